//! HTML page templates

pub mod base;

pub use base::base_template;
