//! PDFs mínimos construidos en memoria para las pruebas.

use lopdf::{Dictionary, Document, Object, Stream, dictionary};

pub const SAMPLE_XMP: &str = concat!(
    "<?xpacket begin=\"\u{feff}\" id=\"W5M0MpCehiHzreSzNTczkc9d\"?>\n",
    "<x:xmpmeta xmlns:x=\"adobe:ns:meta/\" x:xmptk=\"Prueba XMP 1.0\">\n",
    "  <rdf:RDF xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\">\n",
    "    <rdf:Description rdf:about=\"\" xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\n",
    "      <dc:title><rdf:Alt><rdf:li xml:lang=\"x-default\">Informe</rdf:li></rdf:Alt></dc:title>\n",
    "    </rdf:Description>\n",
    "  </rdf:RDF>\n",
    "</x:xmpmeta>\n",
    "<?xpacket end=\"r\"?>"
);

pub struct PdfFixture {
    info: Option<Vec<(&'static str, String)>>,
    language: Option<String>,
    xmp: Option<String>,
    compress: bool,
}

impl PdfFixture {
    pub fn new() -> Self {
        Self {
            info: Some(Vec::new()),
            language: None,
            xmp: None,
            compress: false,
        }
    }

    pub fn info(mut self, key: &'static str, value: &str) -> Self {
        self.info
            .get_or_insert_with(Vec::new)
            .push((key, value.to_string()));
        self
    }

    pub fn without_info(mut self) -> Self {
        self.info = None;
        self
    }

    pub fn language(mut self, lang: &str) -> Self {
        self.language = Some(lang.to_string());
        self
    }

    pub fn xmp(mut self, packet: &str) -> Self {
        self.xmp = Some(packet.to_string());
        self
    }

    pub fn compressed(mut self) -> Self {
        self.compress = true;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1_i64,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        if let Some(lang) = &self.language {
            catalog.set("Lang", Object::string_literal(lang.as_str()));
        }
        if let Some(packet) = &self.xmp {
            let stream = Stream::new(
                dictionary! {
                    "Type" => "Metadata",
                    "Subtype" => "XML",
                },
                packet.as_bytes().to_vec(),
            );
            let metadata_id = doc.add_object(stream);
            catalog.set("Metadata", metadata_id);
        }
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        if let Some(entries) = &self.info {
            let mut info = Dictionary::new();
            for (key, value) in entries {
                info.set(*key, Object::string_literal(value.as_str()));
            }
            let info_id = doc.add_object(info);
            doc.trailer.set("Info", info_id);
        }

        if self.compress {
            doc.compress();
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .expect("no se pudo serializar el PDF de prueba");
        bytes
    }
}
