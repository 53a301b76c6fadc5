use cube_core::{
    facelets::{decode, encode},
    moves::MoveToken,
    state::CubeState,
    validate::{validate, ValidationError},
};
use log::warn;
use thiserror::Error;

use crate::solver::{CubeSolver, SolverError};

/// Why a solve request was not answered.
#[derive(Error, Debug)]
pub enum SolveError {
    /// The validator rejected the configuration before the solver ran.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The solver itself failed.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Apply one move to a state through the solver's move primitive.
///
/// Failures are contained: on any error the input state comes back
/// unchanged, so a bad move can never corrupt an otherwise valid session.
/// Callers that care can compare before and after.
#[must_use]
pub fn apply_move(state: &CubeState, token: MoveToken, solver: &impl CubeSolver) -> CubeState {
    match solver.apply(&encode(state), token) {
        Ok(facelets) => decode(&facelets),
        Err(error) => {
            warn!("move {token} not applied: {error}");
            state.clone()
        }
    }
}

/// Fold [`apply_move`] over a sequence.
#[must_use]
pub fn apply_sequence(
    state: &CubeState,
    tokens: &[MoveToken],
    solver: &impl CubeSolver,
) -> CubeState {
    tokens
        .iter()
        .fold(state.clone(), |state, &token| {
            apply_move(&state, token, solver)
        })
}

/// Validate, serialize and solve. A validation failure blocks the request
/// before the solver is consulted.
pub fn solve(state: &CubeState, solver: &impl CubeSolver) -> Result<Vec<MoveToken>, SolveError> {
    validate(state)?;

    Ok(solver.solve(&encode(state))?)
}

/// A random sequence of `length` tokens with no two consecutive turns of
/// the same face.
#[must_use]
pub fn scramble(length: usize) -> Vec<MoveToken> {
    let mut out: Vec<MoveToken> = Vec::with_capacity(length);

    while out.len() < length {
        let token = MoveToken::ALL[fastrand::usize(..MoveToken::ALL.len())];
        if out.last().is_some_and(|last| last.face == token.face) {
            continue;
        }
        out.push(token);
    }

    out
}

/// Scramble the solved state.
#[must_use]
pub fn scrambled_state(length: usize, solver: &impl CubeSolver) -> CubeState {
    apply_sequence(&CubeState::solved(), &scramble(length), solver)
}

#[cfg(test)]
mod tests {
    use cube_core::{
        facelets::{decode, encode, Facelets},
        moves::{parse_sequence, MoveToken},
        state::CubeState,
        validate::ValidationError,
        Color, Face,
    };

    use super::{apply_move, apply_sequence, scramble, solve, SolveError};
    use crate::{
        solver::{CubeSolver, SolverError},
        tables,
    };

    /// Moves answered from the embedded tables, solves scripted: solved
    /// means the empty sequence, anything else is reported unsolvable.
    struct Scripted;

    impl CubeSolver for Scripted {
        fn solve(&self, facelets: &Facelets) -> Result<Vec<MoveToken>, SolverError> {
            if *facelets == encode(&CubeState::solved()) {
                Ok(vec![])
            } else {
                Err(SolverError::Unsolvable)
            }
        }

        fn apply(&self, facelets: &Facelets, token: MoveToken) -> Result<Facelets, SolverError> {
            Ok(tables::apply_token(facelets, token))
        }
    }

    /// Fails every operation; for exercising the containment policy.
    struct Broken;

    impl CubeSolver for Broken {
        fn solve(&self, _: &Facelets) -> Result<Vec<MoveToken>, SolverError> {
            Err(SolverError::Unsolvable)
        }

        fn apply(&self, _: &Facelets, _: MoveToken) -> Result<Facelets, SolverError> {
            Err(SolverError::Io(std::io::ErrorKind::BrokenPipe.into()))
        }
    }

    /// Panics when asked to search; proves the validator short-circuits.
    struct NeverAsked;

    impl CubeSolver for NeverAsked {
        fn solve(&self, _: &Facelets) -> Result<Vec<MoveToken>, SolverError> {
            panic!("the validator should have blocked this request");
        }

        fn apply(&self, facelets: &Facelets, token: MoveToken) -> Result<Facelets, SolverError> {
            Ok(tables::apply_token(facelets, token))
        }
    }

    fn tokens(sequence: &str) -> Vec<MoveToken> {
        parse_sequence(sequence).unwrap()
    }

    #[test]
    fn failed_moves_leave_the_state_untouched() {
        let state = apply_sequence(&CubeState::solved(), &tokens("R U R'"), &Scripted);

        let after = apply_move(&state, tokens("F")[0], &Broken);
        assert_eq!(after, state);
    }

    #[test]
    fn sexy_move_and_its_reverse_cancel() {
        let solved = CubeState::solved();
        let there = apply_sequence(&solved, &tokens("R U R' U'"), &Scripted);
        assert_ne!(there, solved);

        let back = apply_sequence(&there, &tokens("U R U' R'"), &Scripted);
        assert_eq!(back, solved);
    }

    #[test]
    fn each_move_cancels_with_its_inverse() {
        let start = apply_sequence(&CubeState::solved(), &tokens("F2 D L' B"), &Scripted);

        for token in MoveToken::ALL {
            let there = apply_move(&start, token, &Scripted);
            let back = apply_move(&there, token.inverse(), &Scripted);
            assert_eq!(back, start, "{token}");
        }
    }

    #[test]
    fn solving_the_solved_cube_is_trivial() {
        let solution = solve(&CubeState::solved(), &Scripted).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn invalid_states_never_reach_the_solver() {
        let mut state = CubeState::solved();
        state.set_tile(Face::D, 0, Color::White).unwrap();

        let error = solve(&state, &NeverAsked).unwrap_err();
        assert!(matches!(
            error,
            SolveError::Invalid(ValidationError::ColorCount {
                color: Color::White,
                count: 10,
            })
        ));
    }

    #[test]
    fn tampered_centers_block_the_solve() {
        let mut text = encode(&CubeState::solved()).to_string();
        text.replace_range(22..23, "B");
        let state = decode(&text.parse::<Facelets>().unwrap());

        let error = solve(&state, &NeverAsked).unwrap_err();
        assert!(matches!(
            error,
            SolveError::Invalid(ValidationError::CenterMismatch { face: Face::F, .. })
        ));
    }

    #[test]
    fn unsolvable_states_surface_the_generic_failure() {
        let state = apply_move(&CubeState::solved(), tokens("R")[0], &Scripted);

        let error = solve(&state, &Scripted).unwrap_err();
        assert!(matches!(error, SolveError::Solver(SolverError::Unsolvable)));
    }

    #[test]
    fn scrambles_have_the_requested_shape() {
        for _ in 0..50 {
            let sequence = scramble(20);
            assert_eq!(sequence.len(), 20);
            assert!(sequence
                .windows(2)
                .all(|pair| pair[0].face != pair[1].face));
        }
    }
}
