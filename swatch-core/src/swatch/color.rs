//! CSS color model
//!
//! Color tokens arrive in whatever notation designers typed: `#4F46E5`, `#fff8`, `rgb(79 70 229)`,
//! `hsla(243, 75%, 59%, .5)`, `rebeccapurple`. Parsing is delegated to `csscolorparser`, which
//! accepts all CSS color notations (hex with or without `#`, the functional forms, named colors
//! and `transparent`). [`Rgba`] pins the result to 8-bit channels and renders the two target
//! notations:
//!
//! - [`Rgba::to_rgb_string`] → `rgb(79, 70, 229)` / `rgba(79, 70, 229, 0.5)` for style sheets
//! - [`Rgba::to_argb_hex`] → `0xFF4F46E5` for typed containers

use std::fmt;

/// An sRGB color with 8-bit channels and fractional alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 (transparent) ..= 1.0 (opaque)
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    /// Parse CSS color text; `None` when the text is not a color
    ///
    /// Channels are clamped to 0..=255 and alpha to 0..=1.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let color = csscolorparser::parse(&text.to_ascii_lowercase()).ok()?;
        let [r, g, b, _] = color.to_rgba8();
        let a = f64::from(color.a);
        Some(Rgba {
            r,
            g,
            b,
            a: if a.is_nan() { 1.0 } else { a.clamp(0.0, 1.0) },
        })
    }

    /// Alpha rounded to two decimals, as shown in `rgba()`
    pub fn display_alpha(&self) -> f64 {
        (self.a * 100.0).round() / 100.0
    }

    /// `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise
    pub fn to_rgb_string(&self) -> String {
        if self.a == 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                self.display_alpha()
            )
        }
    }

    /// Upper-case `RRGGBBAA`
    pub fn to_hex8(&self) -> String {
        format!(
            "{:02X}{:02X}{:02X}{:02X}",
            self.r,
            self.g,
            self.b,
            alpha_byte(self.a)
        )
    }

    /// `0xAARRGGBB`: the `RRGGBBAA` form with the alpha byte group moved to the front
    pub fn to_argb_hex(&self) -> String {
        let hex8 = self.to_hex8();
        format!("0x{}{}", &hex8[6..], &hex8[..6])
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgb_string())
    }
}

fn alpha_byte(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}
