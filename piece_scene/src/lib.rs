//! The spatial twin of the sticker model: 26 lattice pieces carrying the
//! colors visible from their positions, plus the one-rotation-at-a-time
//! state machine a renderer drives.

mod piece;
mod rotation;

pub use piece::{build_pieces, Piece, Side};
pub use rotation::{RotationPlan, SceneCube};
