//! Shared helpers for the integration tests.
//!
//! Test PDFs are generated on the fly. Every page of a generated document
//! has a MediaBox of `width x 842`, so merged output can be checked page by
//! page through [`page_widths`].

#![allow(dead_code)]

use lopdf::{Document, Object, Stream, dictionary};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding generated inputs.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path inside the workspace, nothing is created.
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a PDF with one page per entry of `widths`.
    pub fn pdf(&self, name: &str, widths: &[i64]) -> PathBuf {
        let path = self.join(name);
        let mut doc = build_pdf(widths);
        doc.save(&path).expect("Failed to write test PDF");
        path
    }

    /// Write a file that is not a PDF at all.
    pub fn garbage(&self, name: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, b"definitely not a pdf").expect("Failed to write file");
        path
    }

    /// Names of the files currently in the workspace, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path())
            .expect("Failed to list temp dir")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

pub fn build_pdf(widths: &[i64]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::with_capacity(widths.len());
    for &width in widths {
        let text = format!("BT /F1 12 Tf 20 800 Td (width {width}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, text.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 842.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => widths.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Page widths of the PDF at `path`, in page order.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Failed to load merged PDF");
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_dictionary(page_id).expect("page dictionary");
            let mediabox = page
                .get(b"MediaBox")
                .and_then(Object::as_array)
                .expect("page MediaBox");
            mediabox[2].as_float().expect("numeric width") as i64
        })
        .collect()
}
