//! Modelos compartidos para la metadata extraída de un PDF.

use serde::{Deserialize, Serialize};

/// Claves conocidas del diccionario Info, más idioma y versión del documento.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InfoDictionary {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "PDFFormatVersion")]
    pub pdf_format_version: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,
}

/// Resultado de la operación de metadata del parser.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// `None` cuando el documento no tiene diccionario Info.
    pub info: Option<InfoDictionary>,
    /// Paquete XMP tal como aparece en el documento; vacío si no existe.
    pub raw_metadata: String,
}

/// Estado final de un intento de extracción.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    Loaded,
    Empty,
    Failed { reason: String },
}

impl ExtractionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ExtractionOutcome::Loaded => "Metadata disponible",
            ExtractionOutcome::Empty => "Sin diccionario Info",
            ExtractionOutcome::Failed { .. } => "No se pudo leer el PDF",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_serializes_with_pdf_key_names() -> Result<(), Box<dyn std::error::Error>> {
        let info = InfoDictionary {
            title: Some("Informe".to_string()),
            pdf_format_version: Some("1.7".to_string()),
            creation_date: Some("D:20230615143000+09'00'".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&info)?;
        assert_eq!(json["Title"], "Informe");
        assert_eq!(json["PDFFormatVersion"], "1.7");
        assert_eq!(json["CreationDate"], "D:20230615143000+09'00'");
        assert!(json["ModDate"].is_null());
        Ok(())
    }

    #[test]
    fn outcome_is_tagged() -> Result<(), Box<dyn std::error::Error>> {
        let outcome = ExtractionOutcome::Failed {
            reason: "cabecera inválida".to_string(),
        };
        let json = serde_json::to_value(&outcome)?;
        assert_eq!(json["type"], "failed");
        assert_eq!(json["reason"], "cabecera inválida");
        Ok(())
    }
}
