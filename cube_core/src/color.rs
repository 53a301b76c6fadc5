use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six sticker colors of a standard cube held white up, green in front.
///
/// Serialized as its lowercase name; that is how the persisted configuration
/// stores colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

/// A face of the cube. The declaration order is the wire serialization
/// order, so `face as usize` indexes both the sticker grid and the
/// nine-letter chunks of a facelet string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("expected one of U, R, F, D, L or B, got {0:?}")]
pub struct BadFaceLetter(pub char);

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, R, F, D, L, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color conventionally fixed on this face's center.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::B => Color::Blue,
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Result<Self, BadFaceLetter> {
        match letter {
            'U' => Ok(Face::U),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'B' => Ok(Face::B),
            _ => Err(BadFaceLetter(letter)),
        }
    }

    /// Long lowercase name, matching the persisted configuration and the
    /// messages shown to the user.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Face::U => "up",
            Face::R => "right",
            Face::F => "front",
            Face::D => "down",
            Face::L => "left",
            Face::B => "back",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// The face this color belongs to; inverse of [`Face::color`].
    #[must_use]
    pub fn face(self) -> Face {
        match self {
            Color::White => Face::U,
            Color::Red => Face::R,
            Color::Green => Face::F,
            Color::Yellow => Face::D,
            Color::Orange => Face::L,
            Color::Blue => Face::B,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Face};

    #[test]
    fn color_face_bijection() {
        for face in Face::ALL {
            assert_eq!(face.color().face(), face);
        }
        for color in Color::ALL {
            assert_eq!(color.face().color(), color);
        }
    }

    #[test]
    fn letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Ok(face));
        }
        assert!(Face::from_letter('X').is_err());
        assert!(Face::from_letter('u').is_err());
    }
}
