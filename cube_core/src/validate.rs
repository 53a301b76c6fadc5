use thiserror::Error;

use crate::{
    state::{CubeState, CENTER},
    Color, Face,
};

/// Why a sticker configuration cannot be handed to the solver.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A center tile does not carry the color that identifies its face.
    #[error("the {face} center must be {expected}, found {found}")]
    CenterMismatch {
        face: Face,
        expected: Color,
        found: Color,
    },
    /// Some color does not appear exactly nine times across the 54 tiles.
    #[error("expected 9 {color} stickers, found {count}")]
    ColorCount { color: Color, count: usize },
}

/// Check the structural invariants the solver relies on, stopping at the
/// first failure: fixed centers first, then nine stickers of each color.
///
/// Deeper solvability (permutation and orientation parity of a physical
/// cube) is deliberately not checked here; a configuration can pass and
/// still be rejected by the solver.
pub fn validate(state: &CubeState) -> Result<(), ValidationError> {
    for face in Face::ALL {
        let expected = face.color();
        let found = state[face][CENTER];
        if found != expected {
            return Err(ValidationError::CenterMismatch {
                face,
                expected,
                found,
            });
        }
    }

    let mut counts = [0usize; 6];
    for face in Face::ALL {
        for &color in &state[face] {
            counts[color as usize] += 1;
        }
    }

    for color in Color::ALL {
        let count = counts[color as usize];
        if count != 9 {
            return Err(ValidationError::ColorCount { color, count });
        }
    }

    Ok(())
}
