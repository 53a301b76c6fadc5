//! Integer lattice geometry shared by the facelet move tables and the
//! spatial piece model.
//!
//! X runs left to right, Y down to up, Z back to front; the system is
//! right-handed. Positions and outward normals are triples over {-1, 0, 1},
//! and rotations are pure swap-and-negate on those triples. Both move
//! engines go through this one definition of a turn, which is what keeps
//! them in agreement.

use crate::{moves::MoveToken, Face};

/// One of the three coordinate axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A position or direction on the integer lattice.
pub type IVec = [i8; 3];

/// Rotation axis of a face turn: U/D about Y, L/R about X, F/B about Z.
#[must_use]
pub fn face_axis(face: Face) -> Axis {
    match face {
        Face::L | Face::R => Axis::X,
        Face::U | Face::D => Axis::Y,
        Face::F | Face::B => Axis::Z,
    }
}

/// The coordinate along [`face_axis`] that selects the turning layer.
#[must_use]
pub fn face_layer(face: Face) -> i8 {
    match face {
        Face::U | Face::R | Face::F => 1,
        Face::D | Face::L | Face::B => -1,
    }
}

/// Whether position `p` lies on the layer turned by `face`.
#[must_use]
pub fn on_face_layer(face: Face, p: IVec) -> bool {
    p[face_axis(face).index()] == face_layer(face)
}

/// Outward unit normal of a face.
#[must_use]
pub fn face_normal(face: Face) -> IVec {
    match face {
        Face::U => [0, 1, 0],
        Face::R => [1, 0, 0],
        Face::F => [0, 0, 1],
        Face::D => [0, -1, 0],
        Face::L => [-1, 0, 0],
        Face::B => [0, 0, -1],
    }
}

/// The face whose outward normal is `n`, if `n` is one.
#[must_use]
pub fn face_of_normal(n: IVec) -> Option<Face> {
    match n {
        [0, 1, 0] => Some(Face::U),
        [1, 0, 0] => Some(Face::R),
        [0, 0, 1] => Some(Face::F),
        [0, -1, 0] => Some(Face::D),
        [-1, 0, 0] => Some(Face::L),
        [0, 0, -1] => Some(Face::B),
        _ => None,
    }
}

/// Row-major tile index of the sticker at position `p` on `face`.
///
/// Each face is read the way the wire format reads it: looking straight at
/// the face from outside with U kept up (for U and D themselves, with B away
/// from the viewer). That gives every face its own sign convention:
///
/// - U: columns follow +x, rows follow +z
/// - R: columns follow -z, rows follow -y
/// - F: columns follow +x, rows follow -y
/// - D: columns follow +x, rows follow -z
/// - L: columns follow +z, rows follow -y
/// - B: columns follow -x, rows follow -y
#[must_use]
pub fn tile_index(face: Face, p: IVec) -> usize {
    let [x, y, z] = p;
    let (col, row) = match face {
        Face::U => (x + 1, z + 1),
        Face::R => (1 - z, 1 - y),
        Face::F => (x + 1, 1 - y),
        Face::D => (x + 1, 1 - z),
        Face::L => (z + 1, 1 - y),
        Face::B => (1 - x, 1 - y),
    };

    (row * 3 + col) as usize
}

/// Position of tile `index` on `face`; inverse of [`tile_index`].
#[must_use]
pub fn tile_position(face: Face, index: usize) -> IVec {
    #[allow(clippy::cast_possible_truncation)]
    let (row, col) = ((index / 3) as i8, (index % 3) as i8);

    match face {
        Face::U => [col - 1, 1, row - 1],
        Face::R => [1, 1 - row, 1 - col],
        Face::F => [col - 1, 1 - row, 1],
        Face::D => [col - 1, -1, 1 - row],
        Face::L => [-1, 1 - row, col - 1],
        Face::B => [1 - col, 1 - row, -1],
    }
}

/// Quarter turn of `v` about `face`'s axis, clockwise as seen from outside
/// that face. Applies to positions and to normals alike.
#[must_use]
pub fn rotate_cw(face: Face, v: IVec) -> IVec {
    let [x, y, z] = v;
    match face {
        Face::U => [-z, y, x],
        Face::D => [z, y, -x],
        Face::R => [x, z, -y],
        Face::L => [x, -z, y],
        Face::F => [y, -x, z],
        Face::B => [-y, x, z],
    }
}

/// Apply a full move token to `v`: one, two or three clockwise quarter
/// turns.
#[must_use]
pub fn rotate(token: MoveToken, v: IVec) -> IVec {
    let mut out = v;
    for _ in 0..token.quarter_turns() {
        out = rotate_cw(token.face, out);
    }
    out
}
