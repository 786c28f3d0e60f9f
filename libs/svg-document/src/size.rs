//! # Document Size
//!
//! Resolves the user-unit extent of the root `<svg>` element.
//!
//! Resolution order for width (height is symmetric):
//!
//! 1. `viewBox` third component
//! 2. `width` attribute, with an optional `px` suffix
//! 3. [`DEFAULT_DOCUMENT_SIZE`]

use crate::error::DocumentError;
use config::constants::DEFAULT_DOCUMENT_SIZE;

/// Width and height of the document in user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentSize {
    pub width: f64,
    pub height: f64,
}

impl Default for DocumentSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_DOCUMENT_SIZE,
            height: DEFAULT_DOCUMENT_SIZE,
        }
    }
}

impl DocumentSize {
    /// Resolves the size from the root element's attributes.
    pub fn resolve(
        view_box: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
    ) -> Result<Self, DocumentError> {
        let size = match view_box {
            Some(view_box) => {
                let [_, _, width, height] = parse_view_box(view_box)?;
                Self { width, height }
            }
            None => Self {
                width: width
                    .map(|w| parse_length("width", w))
                    .transpose()?
                    .unwrap_or(DEFAULT_DOCUMENT_SIZE),
                height: height
                    .map(|h| parse_length("height", h))
                    .transpose()?
                    .unwrap_or(DEFAULT_DOCUMENT_SIZE),
            },
        };

        if !(size.width.is_finite() && size.width > 0.0) {
            return Err(DocumentError::NonPositiveWidth { width: size.width });
        }
        Ok(size)
    }
}

/// Parses `min-x min-y width height`, separated by whitespace or commas.
pub fn parse_view_box(value: &str) -> Result<[f64; 4], DocumentError> {
    let invalid = || DocumentError::invalid_attribute("viewBox", value);

    let numbers = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<f64>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    <[f64; 4]>::try_from(numbers).map_err(|_| invalid())
}

/// Parses a length in user units; `px` is the only accepted suffix.
pub fn parse_length(attribute: &'static str, value: &str) -> Result<f64, DocumentError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    number
        .parse::<f64>()
        .map_err(|_| DocumentError::invalid_attribute(attribute, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_view_box_wins_over_width() {
        let size = DocumentSize::resolve(Some("0 0 200 50"), Some("10"), Some("10")).unwrap();
        assert_relative_eq!(size.width, 200.0);
        assert_relative_eq!(size.height, 50.0);
    }

    #[test]
    fn test_view_box_commas() {
        assert_eq!(parse_view_box("-5,-5, 10,20").unwrap(), [-5.0, -5.0, 10.0, 20.0]);
    }

    #[test]
    fn test_view_box_wrong_arity() {
        assert!(matches!(
            parse_view_box("0 0 10"),
            Err(DocumentError::InvalidAttribute { attribute: "viewBox", .. })
        ));
    }

    #[test]
    fn test_width_with_px() {
        let size = DocumentSize::resolve(None, Some("48px"), Some(" 24 ")).unwrap();
        assert_relative_eq!(size.width, 48.0);
        assert_relative_eq!(size.height, 24.0);
    }

    #[test]
    fn test_other_units_rejected() {
        assert!(parse_length("width", "10mm").is_err());
        assert!(parse_length("width", "50%").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DocumentSize::resolve(None, None, None).unwrap(), DocumentSize::default());
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = DocumentSize::resolve(Some("0 0 0 10"), None, None).unwrap_err();
        assert!(matches!(err, DocumentError::NonPositiveWidth { .. }));
    }
}
