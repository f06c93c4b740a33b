//! Settings shared by every template engine

use std::path::{Path, PathBuf};

use super::errors::SnipResult;

/// The input paths of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    paths: Vec<PathBuf>,
}

impl TemplateSettings {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        TemplateSettings { paths }
    }

    /// Build settings from command-line arguments, made absolute against the
    /// current directory
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> SnipResult<Self> {
        let paths = args.iter()
            .map(|arg| std::path::absolute(Path::new(arg.as_ref())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TemplateSettings { paths })
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}
