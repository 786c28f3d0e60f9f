use std::path::PathBuf;
use svg_document::{Document, DocumentError};

fn scratch_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("svg-document-{}-{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_reads_file() {
    let path = scratch_file(
        "triangle.svg",
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="30" height="15"><path d="M0,0 L30,0 L0,15 Z"/></svg>"#,
    );
    let doc = Document::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(doc.size.width, 30.0);
    assert_eq!(doc.size.height, 15.0);
    assert_eq!(doc.drawable_paths().count(), 1);
}

#[test]
fn load_missing_file_names_the_path() {
    let path = std::env::temp_dir().join("svg-document-does-not-exist.svg");
    let err = Document::load(&path).unwrap_err();
    assert!(matches!(err, DocumentError::Io { .. }));
    assert!(err.to_string().contains("svg-document-does-not-exist.svg"));
}

#[test]
fn document_without_paths_is_valid() {
    let doc =
        Document::parse(r#"<svg viewBox="0 0 1 1"><rect width="1" height="1"/></svg>"#).unwrap();
    assert!(doc.paths.is_empty());
}
