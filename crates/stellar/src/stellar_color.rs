use serde::{Deserialize, Serialize};

/// RGB display color for stellar objects
///
/// Each spectral class carries a fixed reference color; colors are stored as
/// RGB bytes and rendered as hex strings for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StellarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl StellarColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as a hex string (e.g., "#FFB56C")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#FFB56C" or "FFB56C")
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 {
            return Err(format!("Invalid hex color length: {}", s));
        }

        let r = u8::from_str_radix(&s[0..2], 16)
            .map_err(|_| format!("Invalid red component: {}", &s[0..2]))?;
        let g = u8::from_str_radix(&s[2..4], 16)
            .map_err(|_| format!("Invalid green component: {}", &s[2..4]))?;
        let b = u8::from_str_radix(&s[4..6], 16)
            .map_err(|_| format!("Invalid blue component: {}", &s[4..6]))?;

        Ok(Self { r, g, b })
    }
}
