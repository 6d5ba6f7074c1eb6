#![forbid(unsafe_code)]

pub mod anchor;
pub mod annotate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod formats;
pub mod logging;
pub mod render;
pub mod scan;
pub mod server;
pub mod splice;

pub use annotate::annotate;
pub use formats::{AnnotatedDocument, HeadingRecord};
