use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{state::CubeState, Color, Face};

/// Number of stickers on the cube.
pub const FACELET_COUNT: usize = 54;

/// The 54-letter wire format the external solver consumes: faces
/// concatenated in U, R, F, D, L, B order, each face row-major.
///
/// This is a derived, re-computable view of a [`CubeState`], never the
/// source of truth.
#[derive(Clone, PartialEq, Eq)]
pub struct Facelets([Face; FACELET_COUNT]);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FaceletError {
    #[error("facelet string must be exactly 54 characters, got {0}")]
    BadLength(usize),
    #[error("facelet string has {letter:?} at position {position}; only U, R, F, D, L and B are allowed")]
    BadLetter { position: usize, letter: char },
}

impl Facelets {
    #[must_use]
    pub fn as_slice(&self) -> &[Face; FACELET_COUNT] {
        &self.0
    }
}

impl From<[Face; FACELET_COUNT]> for Facelets {
    fn from(faces: [Face; FACELET_COUNT]) -> Self {
        Facelets(faces)
    }
}

impl FromStr for Facelets {
    type Err = FaceletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = [Face::U; FACELET_COUNT];
        let mut seen = 0;

        for (position, letter) in s.chars().enumerate() {
            let Some(slot) = out.get_mut(position) else {
                return Err(FaceletError::BadLength(s.chars().count()));
            };
            *slot = Face::from_letter(letter)
                .map_err(|_| FaceletError::BadLetter { position, letter })?;
            seen = position + 1;
        }

        if seen != FACELET_COUNT {
            return Err(FaceletError::BadLength(seen));
        }

        Ok(Facelets(out))
    }
}

impl fmt::Display for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in &self.0 {
            write!(f, "{}", face.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Facelets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Facelets({self})")
    }
}

/// Serialize a state to the solver wire format. Total; every tile goes
/// through the fixed color-to-face bijection.
#[must_use]
pub fn encode(state: &CubeState) -> Facelets {
    let mut out = [Face::U; FACELET_COUNT];

    for face in Face::ALL {
        for (i, color) in state[face].iter().enumerate() {
            out[face as usize * 9 + i] = color.face();
        }
    }

    Facelets(out)
}

/// Rebuild a state from the wire format; exact inverse of [`encode`].
#[must_use]
pub fn decode(facelets: &Facelets) -> CubeState {
    let mut tiles = [[Color::White; 9]; 6];

    for face in Face::ALL {
        for i in 0..9 {
            tiles[face as usize][i] = facelets.0[face as usize * 9 + i].color();
        }
    }

    CubeState::from_tiles(tiles)
}
