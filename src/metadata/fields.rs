//! Filas fijas de la tabla de metadata, en orden de despliegue.

use crate::formatting::format_pdf_date;
use crate::metadata::report::InfoDictionary;

/// Texto mostrado cuando un campo no tiene valor.
pub const PLACEHOLDER: &str = "N/A";

pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub accessor: fn(&InfoDictionary) -> Option<&str>,
    pub formatter: Option<fn(&str) -> String>,
}

pub const METADATA_FIELDS: [FieldSpec; 9] = [
    FieldSpec {
        key: "Title",
        label: "Título",
        accessor: |info| info.title.as_deref(),
        formatter: None,
    },
    FieldSpec {
        key: "Subject",
        label: "Asunto",
        accessor: |info| info.subject.as_deref(),
        formatter: None,
    },
    FieldSpec {
        key: "Author",
        label: "Autor",
        accessor: |info| info.author.as_deref(),
        formatter: None,
    },
    FieldSpec {
        key: "Language",
        label: "Idioma",
        accessor: |info| info.language.as_deref(),
        formatter: None,
    },
    FieldSpec {
        key: "PDFFormatVersion",
        label: "Versión PDF",
        accessor: |info| info.pdf_format_version.as_deref(),
        formatter: None,
    },
    FieldSpec {
        key: "Creator",
        label: "Creador",
        accessor: |info| info.creator.as_deref(),
        formatter: None,
    },
    FieldSpec {
        key: "Producer",
        label: "Productor",
        accessor: |info| info.producer.as_deref(),
        formatter: None,
    },
    FieldSpec {
        key: "CreationDate",
        label: "Fecha de creación",
        accessor: |info| info.creation_date.as_deref(),
        formatter: Some(format_pdf_date),
    },
    FieldSpec {
        key: "ModDate",
        label: "Fecha de modificación",
        accessor: |info| info.mod_date.as_deref(),
        formatter: Some(format_pdf_date),
    },
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldRow {
    pub label: &'static str,
    pub value: String,
    pub present: bool,
}

impl FieldSpec {
    pub fn row(&self, info: &InfoDictionary) -> FieldRow {
        match (self.accessor)(info).filter(|value| !value.is_empty()) {
            Some(value) => FieldRow {
                label: self.label,
                value: self.formatter.map_or_else(|| value.to_string(), |f| f(value)),
                present: true,
            },
            None => FieldRow {
                label: self.label,
                value: PLACEHOLDER.to_string(),
                present: false,
            },
        }
    }
}

pub fn metadata_rows(info: &InfoDictionary) -> Vec<FieldRow> {
    METADATA_FIELDS.iter().map(|spec| spec.row(info)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_fixed_order() {
        let keys: Vec<&str> = METADATA_FIELDS.iter().map(|spec| spec.key).collect();
        assert_eq!(
            keys,
            [
                "Title",
                "Subject",
                "Author",
                "Language",
                "PDFFormatVersion",
                "Creator",
                "Producer",
                "CreationDate",
                "ModDate",
            ]
        );
    }

    #[test]
    fn only_title_leaves_other_rows_as_placeholder() {
        let info = InfoDictionary {
            title: Some("Manual de usuario".to_string()),
            ..Default::default()
        };

        let rows = metadata_rows(&info);
        assert_eq!(rows.len(), METADATA_FIELDS.len());
        assert_eq!(rows[0].value, "Manual de usuario");
        assert!(rows[0].present);
        for row in &rows[1..] {
            assert_eq!(row.value, PLACEHOLDER, "fila {}", row.label);
            assert!(!row.present);
        }
    }

    #[test]
    fn empty_values_render_placeholder() {
        let info = InfoDictionary {
            author: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(metadata_rows(&info)[2].value, PLACEHOLDER);
    }

    #[test]
    fn date_rows_are_formatted() {
        let info = InfoDictionary {
            creation_date: Some("D:20230615143000+09'00'".to_string()),
            mod_date: Some("D:20230615143000Z".to_string()),
            ..Default::default()
        };

        let rows = metadata_rows(&info);
        assert_eq!(rows[7].value, "2023-06-15T14:30:00+09:00");
        assert_eq!(rows[8].value, "D:20230615143000Z");
    }
}
