use cube_core::{
    facelets::{FaceletError, Facelets},
    moves::{BadMoveToken, MoveToken},
};
use thiserror::Error;

/// What can go wrong at the solver boundary.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The configuration is well-formed but the search found no solution.
    /// Sub-causes (impossible permutation, flipped edge, …) are not
    /// distinguished.
    #[error("cannot solve this configuration")]
    Unsolvable,
    /// The solver answered with something that is not a move sequence.
    #[error("unparsable solver answer: {0}")]
    BadAnswer(#[from] BadMoveToken),
    /// The solver handed back a malformed facelet string.
    #[error(transparent)]
    Format(#[from] FaceletError),
    /// Talking to the solver process failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The narrow capability the core needs from a cube-algebra library: a full
/// solve and the single-move primitive. Synchronous and blocking; tests
/// substitute a deterministic scripted implementation.
pub trait CubeSolver {
    /// Produce a move sequence that brings `facelets` to the solved state.
    /// The empty sequence means the cube already is.
    fn solve(&self, facelets: &Facelets) -> Result<Vec<MoveToken>, SolverError>;

    /// Apply one move to a facelet string.
    fn apply(&self, facelets: &Facelets, token: MoveToken) -> Result<Facelets, SolverError>;
}
