//! PdfLens: inspección local del diccionario Info y del paquete XMP de un PDF.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod formatting;
pub mod metadata;
pub mod ui;
