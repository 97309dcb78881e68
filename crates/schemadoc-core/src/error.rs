use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemadocError {
    #[error("Directory cannot be listed: {path}")]
    Unlistable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Schema file cannot be read: {path}")]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SchemadocError>;

impl SchemadocError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unlistable { .. } => 2,
            Self::SchemaRead { .. } => 3,
            Self::TemplateNotFound { .. } => 4,
            Self::ConfigParse { .. } => 5,
            _ => 1,
        }
    }
}
