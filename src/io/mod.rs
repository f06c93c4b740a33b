//! File system facing helpers: source paths and output naming

pub mod source_file;
pub mod output_namer;

pub use source_file::{FileExtension, SourceFile, validate_files};
pub use output_namer::{OutputNamer, output_candidate};
