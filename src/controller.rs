//! Estado de la aplicación y coordinación de la extracción asíncrona.
//!
//! El [`Controller`] es el único dueño del [`AppState`]. Cada selección de
//! archivo recibe un número de secuencia creciente y solo el resultado del
//! intento más reciente llega a modificar el estado.

use crate::error::{ExtractionError, Result};
use crate::metadata::{
    DocumentMetadata, ExtractionOutcome, InfoDictionary, LoadOptions, PdfBackend,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Archivo elegido por el usuario.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub selected: Option<SelectedFile>,
    pub info: Option<InfoDictionary>,
    pub raw_metadata: Option<String>,
    pub last_outcome: Option<ExtractionOutcome>,
}

/// Intento de extracción pendiente de ejecutar.
#[derive(Clone, Debug)]
pub struct ParseTicket {
    pub seq: u64,
    pub file: SelectedFile,
}

#[derive(Debug, Eq, PartialEq)]
pub enum Completion {
    Applied(ExtractionOutcome),
    Discarded,
}

#[derive(Debug, Default)]
pub struct Controller {
    state: AppState,
    latest_seq: u64,
    applied_seq: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_awaiting_parse(&self) -> bool {
        self.state.selected.is_some() && self.latest_seq != self.applied_seq
    }

    /// Registra una nueva selección, o la limpia con `None`.
    ///
    /// Limpiar la selección no toca la metadata derivada del archivo anterior.
    pub fn on_file_selected(&mut self, file: Option<SelectedFile>) -> Option<ParseTicket> {
        let Some(file) = file else {
            info!("selección de archivo limpiada");
            self.state.selected = None;
            return None;
        };

        self.latest_seq += 1;
        info!(seq = self.latest_seq, file = %file.name, "archivo seleccionado");
        self.state.selected = Some(file.clone());
        Some(ParseTicket {
            seq: self.latest_seq,
            file,
        })
    }

    /// Aplica el resultado de un intento; los intentos superados se descartan.
    pub fn complete(&mut self, seq: u64, result: Result<DocumentMetadata>) -> Completion {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "resultado obsoleto descartado");
            return Completion::Discarded;
        }
        self.applied_seq = seq;

        let outcome = match result {
            Ok(metadata) => {
                self.state.raw_metadata = Some(metadata.raw_metadata);
                let outcome = if metadata.info.is_some() {
                    ExtractionOutcome::Loaded
                } else {
                    ExtractionOutcome::Empty
                };
                // Un documento sin diccionario Info no hereda el del archivo anterior.
                self.state.info = metadata.info;
                outcome
            }
            Err(error) => {
                warn!(seq, %error, "falló la extracción de metadata");
                self.state.info = None;
                ExtractionOutcome::Failed {
                    reason: error.to_string(),
                }
            }
        };

        self.state.last_outcome = Some(outcome.clone());
        Completion::Applied(outcome)
    }
}

/// Lee el archivo y consulta al parser sin bloquear el hilo del llamador.
pub async fn extract_metadata<B: PdfBackend>(
    backend: Arc<B>,
    path: &Path,
    options: LoadOptions,
) -> Result<DocumentMetadata> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ExtractionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    tokio::task::spawn_blocking(move || {
        let doc = backend.load_document(bytes, &options)?;
        backend.metadata(&doc)
    })
    .await
    .map_err(|error| ExtractionError::Task(error.to_string()))?
}

/// Ejecuta un ticket completo y devuelve su número de secuencia con el resultado.
pub async fn run_ticket<B: PdfBackend>(
    backend: Arc<B>,
    ticket: ParseTicket,
    options: LoadOptions,
) -> (u64, Result<DocumentMetadata>) {
    let result = extract_metadata(backend, &ticket.file.path, options).await;
    (ticket.seq, result)
}
