//! Puente con el parser PDF: carga del documento y lectura de metadata.

use crate::error::Result;
use crate::metadata::report::{DocumentMetadata, InfoDictionary};
use crate::metadata::text::object_to_string;
use lopdf::{Dictionary, Document, Object};
use tracing::debug;

/// Marca de carga local: el parser solo trabaja con los bytes recibidos.
///
/// No tiene campos configurables. `lopdf` nunca resuelve recursos externos, y
/// el único constructor deja constancia de esa garantía en cada llamada a
/// [`PdfBackend::load_document`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadOptions {
    _local_only: (),
}

impl LoadOptions {
    pub fn local_only() -> Self {
        Self { _local_only: () }
    }
}

/// Operaciones que la aplicación necesita de una biblioteca de lectura PDF.
pub trait PdfBackend: Send + Sync + 'static {
    type Document: Send;

    fn load_document(&self, bytes: Vec<u8>, options: &LoadOptions) -> Result<Self::Document>;

    fn metadata(&self, doc: &Self::Document) -> Result<DocumentMetadata>;
}

/// Implementación sobre `lopdf`, que nunca resuelve especificaciones de archivo
/// externas ni URLs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    type Document = Document;

    fn load_document(&self, bytes: Vec<u8>, _options: &LoadOptions) -> Result<Document> {
        debug!(bytes = bytes.len(), "cargando documento");
        Ok(Document::load_mem(&bytes)?)
    }

    fn metadata(&self, doc: &Document) -> Result<DocumentMetadata> {
        let catalog = doc.catalog().ok();

        let info = info_dictionary(doc).map(|dict| InfoDictionary {
            title: text_entry(doc, dict, b"Title"),
            subject: text_entry(doc, dict, b"Subject"),
            author: text_entry(doc, dict, b"Author"),
            language: catalog.and_then(|catalog| text_entry(doc, catalog, b"Lang")),
            pdf_format_version: Some(doc.version.clone()),
            creator: text_entry(doc, dict, b"Creator"),
            producer: text_entry(doc, dict, b"Producer"),
            creation_date: text_entry(doc, dict, b"CreationDate"),
            mod_date: text_entry(doc, dict, b"ModDate"),
        });

        let raw_metadata = catalog
            .and_then(|catalog| xmp_packet(doc, catalog))
            .unwrap_or_default();

        Ok(DocumentMetadata { info, raw_metadata })
    }
}

fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info_ref = doc.trailer.get(b"Info").ok()?;
    deref_dictionary(doc, info_ref)
}

fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn text_entry(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .ok()
        .and_then(|obj| object_to_string(doc, obj))
}

fn xmp_packet(doc: &Document, catalog: &Dictionary) -> Option<String> {
    let stream = match catalog.get(b"Metadata").ok()? {
        Object::Reference(reference) => doc.get_object(*reference).ok()?.as_stream().ok()?,
        Object::Stream(stream) => stream,
        _ => return None,
    };

    let bytes = if stream.dict.has(b"Filter") {
        match stream.decompressed_content() {
            Ok(content) => content,
            Err(error) => {
                debug!(%error, "no se pudo descomprimir el paquete XMP");
                return None;
            }
        }
    } else {
        stream.content.clone()
    };

    Some(String::from_utf8_lossy(&bytes).into_owned())
}
