//! In-memory PDF fixtures and stub services for tests.

use async_trait::async_trait;
use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::analysis::extractor::{ExtractionError, TextExtractor};
use crate::analysis::letter::{CoverLetterGenerator, GenerationError};

/// Builds a PDF with one page per entry; an empty entry produces a page with no text.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Extractor that returns a fixed result without touching the bytes.
pub struct StubExtractor(pub Result<String, String>);

#[async_trait]
impl TextExtractor for StubExtractor {
    async fn extract_text(&self, _pdf: Bytes) -> Result<String, ExtractionError> {
        self.0.clone().map_err(ExtractionError)
    }
}

/// Generator that returns a fixed result and never calls a provider.
pub struct StubGenerator(pub Result<String, String>);

#[async_trait]
impl CoverLetterGenerator for StubGenerator {
    async fn generate(
        &self,
        _cv_text: &str,
        _job_description: &str,
    ) -> Result<String, GenerationError> {
        self.0
            .clone()
            .map(|text| text.trim().to_string())
            .map_err(GenerationError)
    }
}

/// Generator that echoes the CV text and job description it receives.
pub struct EchoGenerator;

#[async_trait]
impl CoverLetterGenerator for EchoGenerator {
    async fn generate(
        &self,
        cv_text: &str,
        job_description: &str,
    ) -> Result<String, GenerationError> {
        Ok(format!("Letter based on: {cv_text}\nFor: {job_description}"))
    }
}
