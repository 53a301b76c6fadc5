//! The solver boundary: the capability trait the core consumes, the
//! embedded facelet move tables behind the single-move primitive, the
//! `twophase` subprocess bridge, and the solve/scramble orchestration on
//! top of them.

pub mod engine;
pub mod solver;
pub mod tables;
pub mod twophase;

pub use engine::{apply_move, apply_sequence, scramble, scrambled_state, solve, SolveError};
pub use solver::{CubeSolver, SolverError};
pub use twophase::TwophaseSolver;
