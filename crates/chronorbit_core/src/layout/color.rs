//! Ordinal color assignment for dial slices.

use serde::Serialize;

/// Saturation applied to every slice fill.
pub const SLICE_SATURATION: f64 = 0.7;
/// Brightness applied to every slice fill.
pub const SLICE_BRIGHTNESS: f64 = 0.9;

/// Returns the fractional color key `index / count`.
///
/// Recomputed on every layout pass, so keys shift as the list grows.
/// Returns `0.0` for an empty collection.
pub fn color_key(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 / count as f64
}

/// HSB color for one slice fill. All channels are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliceColor {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl SliceColor {
    /// Builds the fill color for a color key.
    pub fn for_key(key: f64) -> Self {
        Self {
            hue: key,
            saturation: SLICE_SATURATION,
            brightness: SLICE_BRIGHTNESS,
        }
    }

    /// Converts to 8-bit RGB for hosts without HSB color support.
    pub fn to_rgb(self) -> [u8; 3] {
        let hue = self.hue.rem_euclid(1.0) * 6.0;
        let chroma = self.brightness * self.saturation;
        let x = chroma * (1.0 - ((hue % 2.0) - 1.0).abs());
        let m = self.brightness - chroma;

        let (r, g, b) = match hue as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        [channel(r + m), channel(g + m), channel(b + m)]
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
