//! Documentation and Configuration Extraction Module
//!
//! This module provides the extractors that pull publishable content out of
//! the project README (intro block, named sections) and out of the
//! `kube.tf.example` configuration example (top-level assignment keys).

pub mod config_parser;
pub mod parser;

pub use config_parser::{ConfigParser, RESERVED_KEYWORDS};
pub use parser::DocParser;
