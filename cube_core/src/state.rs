use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Face};

/// Index of the fixed center tile on every face.
pub const CENTER: usize = 4;

/// The sticker grid: nine tiles per face in row-major order, each face read
/// in the canonical orientation (white up, green in front).
///
/// Persisted and exchanged as six named arrays (`up`, `right`, …), the shape
/// the shell stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CubeStateRepr", into = "CubeStateRepr")]
pub struct CubeState([[Color; 9]; 6]);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TileError {
    #[error("tile index {0} is out of range, faces have 9 tiles")]
    IndexOutOfRange(usize),
    #[error("the {0} center is fixed and identifies the face; it cannot be edited")]
    CenterTile(Face),
}

impl CubeState {
    /// The canonical solved configuration: every face filled with its own
    /// center color.
    #[must_use]
    pub fn solved() -> Self {
        CubeState(Face::ALL.map(|face| [face.color(); 9]))
    }

    pub(crate) fn from_tiles(tiles: [[Color; 9]; 6]) -> Self {
        CubeState(tiles)
    }

    #[must_use]
    pub fn tile(&self, face: Face, index: usize) -> Option<Color> {
        self.0[face as usize].get(index).copied()
    }

    /// Replace a single sticker; no other tile changes.
    ///
    /// The center is rejected: it is what identifies the face, and the
    /// validator, the wire codec and the face-to-axis mapping all rely on
    /// that identity.
    pub fn set_tile(&mut self, face: Face, index: usize, color: Color) -> Result<(), TileError> {
        if index >= 9 {
            return Err(TileError::IndexOutOfRange(index));
        }
        if index == CENTER {
            return Err(TileError::CenterTile(face));
        }

        self.0[face as usize][index] = color;
        Ok(())
    }

    /// Whether every face is uniformly its own center color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self[face].iter().all(|&color| color == face.color()))
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl Index<Face> for CubeState {
    type Output = [Color; 9];

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face as usize]
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CubeStateRepr {
    up: [Color; 9],
    right: [Color; 9],
    front: [Color; 9],
    down: [Color; 9],
    left: [Color; 9],
    back: [Color; 9],
}

impl From<CubeStateRepr> for CubeState {
    fn from(value: CubeStateRepr) -> Self {
        let mut tiles = [[Color::White; 9]; 6];
        tiles[Face::U as usize] = value.up;
        tiles[Face::R as usize] = value.right;
        tiles[Face::F as usize] = value.front;
        tiles[Face::D as usize] = value.down;
        tiles[Face::L as usize] = value.left;
        tiles[Face::B as usize] = value.back;
        CubeState(tiles)
    }
}

impl From<CubeState> for CubeStateRepr {
    fn from(value: CubeState) -> Self {
        CubeStateRepr {
            up: value[Face::U],
            right: value[Face::R],
            front: value[Face::F],
            down: value[Face::D],
            left: value[Face::L],
            back: value[Face::B],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CubeState, TileError, CENTER};
    use crate::{Color, Face};

    #[test]
    fn solved_faces_are_uniform() {
        let state = CubeState::solved();
        assert!(state.is_solved());
        for face in Face::ALL {
            assert!(state[face].iter().all(|&color| color == face.color()));
        }
    }

    #[test]
    fn set_tile_replaces_one_sticker() {
        let mut state = CubeState::solved();
        state.set_tile(Face::F, 0, Color::Blue).unwrap();

        assert_eq!(state.tile(Face::F, 0), Some(Color::Blue));
        assert!(!state.is_solved());
        assert_eq!(
            state[Face::F][1..],
            [Color::Green; 8],
            "only the written tile may change"
        );
        assert_eq!(state[Face::U], [Color::White; 9]);
    }

    #[test]
    fn center_and_out_of_range_writes_are_rejected() {
        let mut state = CubeState::solved();

        assert_eq!(
            state.set_tile(Face::F, CENTER, Color::Blue),
            Err(TileError::CenterTile(Face::F))
        );
        assert_eq!(
            state.set_tile(Face::F, 9, Color::Blue),
            Err(TileError::IndexOutOfRange(9))
        );
        assert!(state.is_solved());
    }

    #[test]
    fn clone_is_independent() {
        let state = CubeState::solved();
        let mut copy = state.clone();
        copy.set_tile(Face::U, 0, Color::Red).unwrap();

        assert!(state.is_solved());
        assert!(!copy.is_solved());
    }

    #[test]
    fn serde_uses_named_faces() {
        let state = CubeState::solved();
        let text = toml::to_string(&state).unwrap();
        assert!(text.contains("up = ["));
        assert!(text.contains("\"white\""));

        let back: CubeState = toml::from_str(&text).unwrap();
        assert_eq!(back, state);
    }
}
