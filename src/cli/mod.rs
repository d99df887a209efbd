mod commands;

pub use commands::{generate_site, Cli};
