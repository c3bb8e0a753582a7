//! Extracción y modelado de la metadata de documentos PDF.

mod backend;
mod fields;
#[cfg(test)]
pub(crate) mod fixtures;
mod report;
mod text;

pub use backend::{LoadOptions, LopdfBackend, PdfBackend};
pub use fields::{FieldRow, FieldSpec, METADATA_FIELDS, PLACEHOLDER, metadata_rows};
pub use report::{DocumentMetadata, ExtractionOutcome, InfoDictionary};
