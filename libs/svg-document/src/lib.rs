//! # SVG Document
//!
//! Loads an SVG document with the `svg` crate's event parser and collects
//! the inputs of the extrusion pipeline: the document size in user units
//! and every `<path>` element in document order.
//!
//! Only the root element's size attributes and each path's `id` and `d`
//! are read. Transforms, styles and other shapes are ignored.
//!
//! ## Usage
//!
//! ```rust
//! use svg_document::Document;
//!
//! let doc = Document::parse(
//!     r#"<svg viewBox="0 0 20 10"><path id="a" d="M0,0 L1,1 L0,1 Z"/></svg>"#,
//! )?;
//! assert_eq!(doc.size.width, 20.0);
//! assert_eq!(doc.paths[0].id.as_deref(), Some("a"));
//! # Ok::<(), svg_document::DocumentError>(())
//! ```

pub mod error;
pub mod size;


pub use error::DocumentError;
pub use size::DocumentSize;

use config::constants::SVG_NAMESPACE;
use std::path::Path;
use svg::node::element::tag::Type;
use svg::parser::Event;

/// A `<path>` element found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntity {
    /// Position among all `<path>` elements, counting from 0
    pub index: usize,
    /// The `id` attribute
    pub id: Option<String>,
    /// The `d` attribute
    pub d: Option<String>,
}

/// A loaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Size of the root element in user units
    pub size: DocumentSize,
    /// Every `<path>` element, in document order
    pub paths: Vec<PathEntity>,
}

impl Document {
    /// Reads and parses the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", content.len(), path.display());
        Self::parse(&content)
    }

    /// Parses document markup.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        let mut size = None;
        let mut paths = Vec::new();

        let parser = svg::read(content).map_err(|err| DocumentError::xml(err.to_string()))?;
        for event in parser {
            match event {
                Event::Error(error) => return Err(DocumentError::xml(error.to_string())),

                Event::Tag(name, Type::Start | Type::Empty, attrs) if is_element(name, "svg") => {
                    if size.is_none() {
                        let xmlns = attrs.get("xmlns").map(|v| &**v);
                        if let Some(ns) = xmlns.filter(|ns| *ns != SVG_NAMESPACE) {
                            log::warn!("root element declares namespace '{ns}', reading it as SVG");
                        }
                        size = Some(DocumentSize::resolve(
                            attrs.get("viewBox").map(|v| &**v),
                            attrs.get("width").map(|v| &**v),
                            attrs.get("height").map(|v| &**v),
                        )?);
                    }
                }

                Event::Tag(name, Type::Start | Type::Empty, attrs) if is_element(name, "path") => {
                    paths.push(PathEntity {
                        index: paths.len(),
                        id: attrs.get("id").map(|v| v.to_string()),
                        d: attrs.get("d").map(|v| v.to_string()),
                    });
                }

                _ => {}
            }
        }

        let size = size.ok_or(DocumentError::MissingRoot)?;
        log::debug!(
            "document {}x{} with {} path elements",
            size.width,
            size.height,
            paths.len()
        );
        Ok(Self { size, paths })
    }

    /// Paths that carry a `d` attribute, as `(entity, d)` pairs.
    ///
    /// Paths without one are skipped with a debug log.
    pub fn drawable_paths(&self) -> impl Iterator<Item = (&PathEntity, &str)> {
        self.paths.iter().filter_map(|entity| match entity.d.as_deref() {
            Some(d) if !d.trim().is_empty() => Some((entity, d)),
            _ => {
                log::debug!("skipping path {} without path data", entity.index);
                None
            }
        })
    }
}

/// Matches `local` with or without a namespace prefix.
fn is_element(name: &str, local: &str) -> bool {
    match name.split_once(':') {
        Some((_, rest)) => rest == local,
        None => name == local,
    }
}
