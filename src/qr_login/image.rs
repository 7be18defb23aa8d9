//! Scannable rendering of a login code. The encoding is deterministic: the same
//! code always produces the same modules, so a redraw never changes the image.

use base64ct::{Base64, Encoding};
use qrcode::render::{svg, unicode};
use qrcode::QrCode;
use std::fmt;
use thiserror::Error;

/// Minimum SVG edge, in pixels.
const SVG_MIN_SIZE: u32 = 200;

#[derive(Debug, Error)]
#[error("failed to encode QR code: {0}")]
pub struct ImageError(String);

#[derive(Clone)]
pub struct QrImage {
    code: QrCode,
}

impl fmt::Debug for QrImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrImage")
            .field("width", &self.width())
            .finish_non_exhaustive()
    }
}

impl QrImage {
    /// # Errors
    /// Returns `ImageError` if the payload does not fit in a QR code.
    pub fn encode(payload: &str) -> Result<Self, ImageError> {
        let code = QrCode::new(payload.as_bytes()).map_err(|err| ImageError(err.to_string()))?;
        Ok(Self { code })
    }

    /// Modules per side, without the quiet zone.
    #[must_use]
    pub fn width(&self) -> usize {
        self.code.width()
    }

    /// Half-block text for terminals with a dark background.
    #[must_use]
    pub fn to_terminal(&self) -> String {
        self.code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build()
    }

    #[must_use]
    pub fn to_svg(&self) -> String {
        self.code
            .render::<svg::Color<'_>>()
            .min_dimensions(SVG_MIN_SIZE, SVG_MIN_SIZE)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build()
    }

    /// `data:` URL usable directly as an `<img src>`.
    #[must_use]
    pub fn to_data_url(&self) -> String {
        let svg = self.to_svg();
        format!(
            "data:image/svg+xml;base64,{}",
            Base64::encode_string(svg.as_bytes())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_deterministic() {
        let first = QrImage::encode("abc123").unwrap();
        let second = QrImage::encode("abc123").unwrap();
        assert_eq!(first.to_terminal(), second.to_terminal());
        assert_eq!(first.to_svg(), second.to_svg());
    }

    #[test]
    fn debug_reports_width_only() {
        let image = QrImage::encode("abc123").unwrap();
        let debug = format!("{image:?}");
        assert!(debug.starts_with("QrImage"));
        assert!(debug.contains(&format!("width: {}", image.width())));
        assert!(!debug.contains("abc123"));
    }

    #[test]
    fn different_codes_render_differently() {
        let first = QrImage::encode("abc123").unwrap();
        let second = QrImage::encode("xyz789").unwrap();
        assert_ne!(first.to_terminal(), second.to_terminal());
    }

    #[test]
    fn url_safe_token_fits() {
        // token_urlsafe(32) on the backend yields 43 characters
        let token = "Zk3n9QbT2v8xYw1LmP0sR7uJ4cHeA6dF5gK_-iOqWzX";
        let image = QrImage::encode(token).unwrap();
        assert!(image.width() >= 21);
        assert!(image.to_terminal().lines().count() > 10);
    }

    #[test]
    fn data_url_wraps_svg() {
        let image = QrImage::encode("abc123").unwrap();
        let url = image.to_data_url();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
        let encoded = url.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = Base64::decode_vec(encoded).unwrap();
        assert_eq!(decoded, image.to_svg().into_bytes());
    }
}
