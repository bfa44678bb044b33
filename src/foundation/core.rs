use crate::foundation::error::{LayerflowError, LayerflowResult};

pub use kurbo::{Circle, Line, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serializes as a `#RRGGBB` hex string when fully opaque and `#RRGGBBAA` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    /// Default node blue.
    pub const BLUE: Self = Self::rgb(0x58, 0xC4, 0xDD);
    /// Default highlight red.
    pub const RED: Self = Self::rgb(0xFC, 0x62, 0x55);

    /// Opaque color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> LayerflowResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(LayerflowError::invalid_parameter(format!(
                "color '{s}' must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |i: usize| -> LayerflowResult<u8> {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| {
                    LayerflowError::invalid_parameter(format!("color '{s}' is not valid hex"))
                })
        };

        let a = if hex.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }

    /// Hex representation accepted by [`Rgba8::from_hex`].
    pub fn to_hex(self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Per-channel interpolation, `t` is clamped to `[0, 1]`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        let t = t.clamp(0.0, 1.0);
        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn require_non_negative(what: &str, v: f64) -> LayerflowResult<f64> {
    if !v.is_finite() || v < 0.0 {
        return Err(LayerflowError::invalid_parameter(format!(
            "{what} must be finite and >= 0 (got {v})"
        )));
    }
    Ok(v)
}

pub(crate) fn require_positive(what: &str, v: f64) -> LayerflowResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(LayerflowError::invalid_parameter(format!(
            "{what} must be finite and > 0 (got {v})"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
