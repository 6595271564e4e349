use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Default resting title color.
    pub const TITLE: Color = Color { r: 0, g: 0, b: 255 };

    /// Default selected-title and indicator color.
    pub const ACCENT: Color = Color { r: 255, g: 0, b: 0 };

    /// Default drop-shadow color below the strip. #B2B2B2
    pub const SHADOW: Color = Color {
        r: 178,
        g: 178,
        b: 178,
    };

    /// Default border and divider color. #EAEAEA
    pub const HAIRLINE: Color = Color {
        r: 234,
        g: 234,
        b: 234,
    };

    /// Packs into the 0RGB layout softbuffer presents.
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}
