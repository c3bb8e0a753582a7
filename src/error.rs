//! Errores del flujo de extracción de metadata.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No se pudo leer `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No se pudo interpretar el PDF: {0}")]
    Parse(String),

    #[error("La tarea de extracción terminó de forma inesperada: {0}")]
    Task(String),
}

impl From<lopdf::Error> for ExtractionError {
    fn from(error: lopdf::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
