//! Strongly-typed values shared by elements and the encoder.
//!
//! Colors and alignments are validated when they are built, so the encoder
//! never has to second-guess them.

use std::fmt;
use std::str::FromStr;

use crate::errors::PlotError;

/// Opaque RGB color, written on the wire as six lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a 24-bit value (0xRRGGBB).
    pub const fn from_packed(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Pack into a 24-bit value (0xRRGGBB).
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl FromStr for Color {
    type Err = PlotError;

    /// Parse exactly six hex digits, either case, no `#` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| PlotError::InvalidColor {
            value: s.to_string(),
            reason,
        };

        if s.len() != 6 {
            return Err(invalid("expected exactly 6 characters"));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("contains a non-hex character"));
        }

        let packed = u32::from_str_radix(s, 16).map_err(|_| invalid("not a hex number"))?;
        Ok(Color::from_packed(packed))
    }
}

impl TryFrom<&str> for Color {
    type Error = PlotError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Horizontal text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    /// Protocol character for this alignment
    pub const fn code(self) -> char {
        match self {
            HAlign::Left => 'l',
            HAlign::Center => 'h',
            HAlign::Right => 'r',
        }
    }
}

impl FromStr for HAlign {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(HAlign::Left),
            "center" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            _ => Err(PlotError::InvalidAlignment {
                axis: "horizontal",
                value: s.to_string(),
                expected: "left, center, right",
            }),
        }
    }
}

impl fmt::Display for HAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        };
        f.write_str(name)
    }
}

/// Vertical text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VAlign {
    #[default]
    Bottom,
    Middle,
    Top,
}

impl VAlign {
    /// Protocol character for this alignment
    pub const fn code(self) -> char {
        match self {
            VAlign::Bottom => 'b',
            VAlign::Middle => 'v',
            VAlign::Top => 't',
        }
    }
}

impl FromStr for VAlign {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bottom" => Ok(VAlign::Bottom),
            "middle" => Ok(VAlign::Middle),
            "top" => Ok(VAlign::Top),
            _ => Err(PlotError::InvalidAlignment {
                axis: "vertical",
                value: s.to_string(),
                expected: "bottom, middle, top",
            }),
        }
    }
}

impl fmt::Display for VAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VAlign::Bottom => "bottom",
            VAlign::Middle => "middle",
            VAlign::Top => "top",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Color tests ====================

    #[test]
    fn color_parses_lower_and_upper_case() {
        assert_eq!("ccccff".parse::<Color>(), Ok(Color::rgb(0xcc, 0xcc, 0xff)));
        assert_eq!("CCCCFF".parse::<Color>(), Ok(Color::rgb(0xcc, 0xcc, 0xff)));
    }

    #[test]
    fn color_displays_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xEF).to_string(), "ab01ef");
        assert_eq!(Color::BLACK.to_string(), "000000");
        assert_eq!(Color::WHITE.to_string(), "ffffff");
    }

    #[test]
    fn color_rejects_wrong_length() {
        for bad in ["", "fff", "ffffff00", "#ffffff"] {
            let err = bad.parse::<Color>().unwrap_err();
            assert!(
                matches!(err, PlotError::InvalidColor { ref value, .. } if value == bad),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn color_rejects_non_hex() {
        assert!(matches!(
            Color::try_from("gg0000"),
            Err(PlotError::InvalidColor { reason: "contains a non-hex character", .. })
        ));
        // six bytes but not six hex digits
        assert!(Color::try_from("+12345").is_err());
    }

    #[test]
    fn color_packing() {
        let c = Color::from_packed(0x123456);
        assert_eq!(c, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(c.to_packed(), 0x123456);
    }

    // ==================== Alignment tests ====================

    #[test]
    fn alignment_codes() {
        assert_eq!(HAlign::Left.code(), 'l');
        assert_eq!(HAlign::Center.code(), 'h');
        assert_eq!(HAlign::Right.code(), 'r');
        assert_eq!(VAlign::Bottom.code(), 'b');
        assert_eq!(VAlign::Middle.code(), 'v');
        assert_eq!(VAlign::Top.code(), 't');
    }

    #[test]
    fn alignment_defaults() {
        assert_eq!(HAlign::default(), HAlign::Left);
        assert_eq!(VAlign::default(), VAlign::Bottom);
    }

    #[test]
    fn alignment_parse_round_trips_display() {
        for h in [HAlign::Left, HAlign::Center, HAlign::Right] {
            assert_eq!(h.to_string().parse::<HAlign>(), Ok(h));
        }
        for v in [VAlign::Bottom, VAlign::Middle, VAlign::Top] {
            assert_eq!(v.to_string().parse::<VAlign>(), Ok(v));
        }
        assert_eq!("CENTER".parse::<HAlign>(), Ok(HAlign::Center));
    }

    #[test]
    fn alignment_rejects_unknown() {
        assert_eq!(
            "middle".parse::<HAlign>(),
            Err(PlotError::InvalidAlignment {
                axis: "horizontal",
                value: "middle".to_string(),
                expected: "left, center, right",
            })
        );
        assert!(matches!(
            "center".parse::<VAlign>(),
            Err(PlotError::InvalidAlignment { axis: "vertical", .. })
        ));
    }
}
