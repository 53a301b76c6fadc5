use std::f32::consts::{FRAC_PI_2, PI};

use cube_core::{
    geometry::{self, Axis},
    moves::{MoveToken, Turn},
    state::CubeState,
    Face,
};
use log::debug;

use crate::piece::{build_pieces, Piece};

/// What the renderer needs to animate one face turn: the rotation axis, the
/// signed angle in radians and which pieces ride along.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationPlan {
    pub axis: Axis,
    pub angle: f32,
    /// Indices into [`SceneCube::pieces`] of the pieces on the turning
    /// layer.
    pub selected: Vec<usize>,
}

/// Signed animation angle for a token. Angles are right-handed (positive is
/// counter-clockwise seen from the positive end of the axis), so the
/// clockwise turns of U, R and F come out negative and their opposite faces
/// flip sign. Half turns are π regardless of direction.
fn plan_angle(token: MoveToken) -> f32 {
    if token.turn == Turn::Half {
        return PI;
    }

    let clockwise = match token.face {
        Face::U | Face::R | Face::F => -FRAC_PI_2,
        Face::D | Face::L | Face::B => FRAC_PI_2,
    };

    match token.turn {
        Turn::Counter => -clockwise,
        Turn::Clockwise | Turn::Half => clockwise,
    }
}

/// The 26-piece scene and its one-rotation-at-a-time state machine.
///
/// States are idle and rotating. While a rotation is in flight the selected
/// pieces belong to it; they return to the idle set on both
/// [`complete`](SceneCube::complete) and [`cancel`](SceneCube::cancel), so
/// an aborted animation can never strand a piece.
pub struct SceneCube {
    pieces: Vec<Piece>,
    in_flight: Option<ActiveRotation>,
}

struct ActiveRotation {
    token: MoveToken,
    selected: Vec<usize>,
}

impl SceneCube {
    /// Derive the scene from a state.
    #[must_use]
    pub fn new(state: &CubeState) -> Self {
        SceneCube {
            pieces: build_pieces(state),
            in_flight: None,
        }
    }

    /// All 26 pieces, rotating or not, in derivation order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Throw the scene away and re-derive it from `state`. The sticker
    /// model is the source of truth; any in-flight rotation is dropped.
    pub fn rebuild(&mut self, state: &CubeState) {
        self.pieces = build_pieces(state);
        self.in_flight = None;
    }

    /// Start a rotation and hand back the plan the renderer animates.
    ///
    /// Returns `None` while another rotation is in flight: interleaving two
    /// turns would re-parent pieces inconsistently, so a concurrent request
    /// is rejected as a no-op rather than queued here.
    pub fn begin(&mut self, token: MoveToken) -> Option<RotationPlan> {
        if self.in_flight.is_some() {
            return None;
        }

        let selected: Vec<usize> = self
            .pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| geometry::on_face_layer(token.face, piece.position()))
            .map(|(index, _)| index)
            .collect();

        let plan = RotationPlan {
            axis: geometry::face_axis(token.face),
            angle: plan_angle(token),
            selected: selected.clone(),
        };

        self.in_flight = Some(ActiveRotation { token, selected });
        Some(plan)
    }

    /// Commit the in-flight rotation: every selected piece gets its new
    /// lattice position and sticker arrangement. Called when the renderer
    /// reports the visual transition finished. No-op when idle.
    pub fn complete(&mut self) {
        let Some(rotation) = self.in_flight.take() else {
            return;
        };

        debug!("committing {}", rotation.token);
        for index in rotation.selected {
            self.pieces[index].rotate(rotation.token);
        }
    }

    /// Abandon the in-flight rotation without committing, returning the
    /// selected pieces to the idle set untouched. Called when the renderer
    /// reports failure. No-op when idle.
    pub fn cancel(&mut self) {
        if let Some(rotation) = self.in_flight.take() {
            debug!("cancelling {}", rotation.token);
        }
    }
}
