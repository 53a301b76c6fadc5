use cube_core::{
    config::SceneConfig,
    geometry::{self, IVec},
    moves::MoveToken,
    state::CubeState,
    Color, Face,
};
use itertools::iproduct;

/// One side of a small cube, in the renderer's box-material order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Side {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Side {
    pub const ALL: [Self; 6] = [
        Side::PosX,
        Side::NegX,
        Side::PosY,
        Side::NegY,
        Side::PosZ,
        Side::NegZ,
    ];

    /// Outward direction of this side.
    #[must_use]
    pub fn normal(self) -> IVec {
        match self {
            Side::PosX => [1, 0, 0],
            Side::NegX => [-1, 0, 0],
            Side::PosY => [0, 1, 0],
            Side::NegY => [0, -1, 0],
            Side::PosZ => [0, 0, 1],
            Side::NegZ => [0, 0, -1],
        }
    }

    /// The cube face this direction points at.
    #[must_use]
    pub fn face(self) -> Face {
        match self {
            Side::PosX => Face::R,
            Side::NegX => Face::L,
            Side::PosY => Face::U,
            Side::NegY => Face::D,
            Side::PosZ => Face::F,
            Side::NegZ => Face::B,
        }
    }

    fn of_normal(n: IVec) -> Option<Self> {
        Side::ALL.into_iter().find(|side| side.normal() == n)
    }
}

/// A small cube at a lattice position, owning the colors shown on its
/// exterior sides. Sides without a sticker face the interior; the renderer
/// paints those with its fixed neutral material and they are never shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    position: IVec,
    stickers: [Option<Color>; 6],
}

impl Piece {
    #[must_use]
    pub fn position(&self) -> IVec {
        self.position
    }

    /// The color showing on `side`, if that side is exterior.
    #[must_use]
    pub fn sticker(&self, side: Side) -> Option<Color> {
        self.stickers[side as usize]
    }

    /// Scene-space center of the piece: the lattice position scaled by the
    /// configured piece size plus gap.
    #[must_use]
    pub fn world_position(&self, scene: &SceneConfig) -> [f32; 3] {
        let spacing = scene.cube_size + scene.gap;
        self.position.map(|coordinate| f32::from(coordinate) * spacing)
    }

    /// Rotate the piece in place. Position and stickers go through the same
    /// lattice rotation, so every sticker keeps facing outward.
    pub(crate) fn rotate(&mut self, token: MoveToken) {
        self.position = geometry::rotate(token, self.position);

        let mut rotated = [None; 6];
        for side in Side::ALL {
            let turned = geometry::rotate(token, side.normal());
            let new_side =
                Side::of_normal(turned).expect("rotating a unit normal yields a unit normal");
            rotated[new_side as usize] = self.stickers[side as usize];
        }
        self.stickers = rotated;
    }
}

/// Derive the 26 pieces of a state, x-major then y then z, skipping the
/// fully interior origin. Each exterior side looks its color up through the
/// shared tile maps.
#[must_use]
pub fn build_pieces(state: &CubeState) -> Vec<Piece> {
    iproduct!(-1i8..=1, -1i8..=1, -1i8..=1)
        .filter(|&(x, y, z)| (x, y, z) != (0, 0, 0))
        .map(|(x, y, z)| {
            let position = [x, y, z];
            let mut stickers = [None; 6];

            for side in Side::ALL {
                let face = side.face();
                if geometry::on_face_layer(face, position) {
                    stickers[side as usize] =
                        Some(state[face][geometry::tile_index(face, position)]);
                }
            }

            Piece { position, stickers }
        })
        .collect()
}
