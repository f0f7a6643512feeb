//! Named ball colors

use bevy::prelude::*;

/// One entry of the fixed ball palette
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Gold,
    Lime,
    Maroon,
    DarkGreen,
    SkyBlue,
    DarkBlue,
    Magenta,
    DarkBrown,
    Gray,
    DarkGray,
}

impl NamedColor {
    /// All palette entries in sampling order
    pub const ALL: [NamedColor; 17] = [
        NamedColor::Red,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Purple,
        NamedColor::Orange,
        NamedColor::Pink,
        NamedColor::Gold,
        NamedColor::Lime,
        NamedColor::Maroon,
        NamedColor::DarkGreen,
        NamedColor::SkyBlue,
        NamedColor::DarkBlue,
        NamedColor::Magenta,
        NamedColor::DarkBrown,
        NamedColor::Gray,
        NamedColor::DarkGray,
    ];

    /// Position in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name for display
    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Purple => "purple",
            NamedColor::Orange => "orange",
            NamedColor::Pink => "pink",
            NamedColor::Gold => "gold",
            NamedColor::Lime => "lime",
            NamedColor::Maroon => "maroon",
            NamedColor::DarkGreen => "dark green",
            NamedColor::SkyBlue => "sky blue",
            NamedColor::DarkBlue => "dark blue",
            NamedColor::Magenta => "magenta",
            NamedColor::DarkBrown => "dark brown",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark gray",
        }
    }

    /// Display color (sRGB)
    pub fn color(&self) -> Color {
        let (r, g, b) = match self {
            NamedColor::Red => (230, 41, 55),
            NamedColor::Blue => (0, 121, 241),
            NamedColor::Green => (0, 228, 48),
            NamedColor::Yellow => (253, 249, 0),
            NamedColor::Purple => (200, 122, 255),
            NamedColor::Orange => (255, 161, 0),
            NamedColor::Pink => (255, 109, 194),
            NamedColor::Gold => (255, 203, 0),
            NamedColor::Lime => (0, 158, 47),
            NamedColor::Maroon => (190, 33, 55),
            NamedColor::DarkGreen => (0, 117, 44),
            NamedColor::SkyBlue => (102, 191, 255),
            NamedColor::DarkBlue => (0, 82, 172),
            NamedColor::Magenta => (255, 0, 255),
            NamedColor::DarkBrown => (76, 63, 47),
            NamedColor::Gray => (130, 130, 130),
            NamedColor::DarkGray => (80, 80, 80),
        };
        Color::srgb_u8(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_matches_position_in_all() {
        for (i, color) in NamedColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i, "{} is out of order", color.name());
        }
    }

    #[test]
    fn test_names_and_colors_are_distinct() {
        let names: HashSet<_> = NamedColor::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), NamedColor::ALL.len());

        let colors: HashSet<_> = NamedColor::ALL
            .iter()
            .map(|c| {
                let s = c.color().to_srgba();
                (s.red.to_bits(), s.green.to_bits(), s.blue.to_bits())
            })
            .collect();
        assert_eq!(colors.len(), NamedColor::ALL.len());
    }
}
