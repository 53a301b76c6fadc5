//! The facelet-level single-move primitive: one permutation of the 54 wire
//! slots per move token.
//!
//! The clockwise table for each face is derived from the shared lattice
//! geometry (every sticker slot has a position and an outward normal, and a
//! turn rotates both); the `2` and `'` variants are compositions of it.
//! Deriving instead of hand-writing the eighteen tables keeps this the same
//! definition of a turn the spatial engine uses.

use std::sync::LazyLock;

use cube_core::{
    facelets::{Facelets, FACELET_COUNT},
    geometry,
    moves::{MoveToken, Turn},
    Face,
};

/// A permutation of the 54 facelet slots in goes-to form: the sticker in
/// slot `i` moves to slot `mapping[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceletPerm {
    mapping: [u8; FACELET_COUNT],
}

impl FaceletPerm {
    /// The permutation that maps every slot to itself.
    #[must_use]
    pub fn identity() -> Self {
        let mut mapping = [0; FACELET_COUNT];
        for (i, slot) in mapping.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            {
                *slot = i as u8;
            }
        }

        FaceletPerm { mapping }
    }

    /// Compose `other` after `self`.
    pub fn compose(&mut self, other: &FaceletPerm) {
        for value in &mut self.mapping {
            *value = other.mapping[*value as usize];
        }
    }

    /// Permute a facelet string.
    #[must_use]
    pub fn apply(&self, facelets: &Facelets) -> Facelets {
        let mut out = [Face::U; FACELET_COUNT];
        for (i, &face) in facelets.as_slice().iter().enumerate() {
            out[self.mapping[i] as usize] = face;
        }

        Facelets::from(out)
    }
}

/// Clockwise quarter-turn table for one face, computed by rotating every
/// slot on the turning layer. Slots off the layer, the turning face's own
/// center included, stay put.
fn clockwise_table(face: Face) -> FaceletPerm {
    let mut perm = FaceletPerm::identity();

    for slot_face in Face::ALL {
        for index in 0..9 {
            let position = geometry::tile_position(slot_face, index);
            if !geometry::on_face_layer(face, position) {
                continue;
            }

            let new_normal = geometry::rotate_cw(face, geometry::face_normal(slot_face));
            let new_face = geometry::face_of_normal(new_normal)
                .expect("rotating a unit normal yields a unit normal");
            let new_position = geometry::rotate_cw(face, position);

            let from = slot_face as usize * 9 + index;
            let to = new_face as usize * 9 + geometry::tile_index(new_face, new_position);
            #[allow(clippy::cast_possible_truncation)]
            {
                perm.mapping[from] = to as u8;
            }
        }
    }

    perm
}

static MOVE_TABLES: LazyLock<[FaceletPerm; 18]> = LazyLock::new(|| {
    let mut tables = Vec::with_capacity(18);

    for face in Face::ALL {
        let base = clockwise_table(face);

        let mut half = base.clone();
        half.compose(&base);
        let mut counter = half.clone();
        counter.compose(&base);

        tables.push(base);
        tables.push(half);
        tables.push(counter);
    }

    tables
        .try_into()
        .expect("six faces with three turns each")
});

fn table_slot(token: MoveToken) -> usize {
    let turn = match token.turn {
        Turn::Clockwise => 0,
        Turn::Half => 1,
        Turn::Counter => 2,
    };

    token.face as usize * 3 + turn
}

/// Look up the permutation for one move token.
#[must_use]
pub fn move_table(token: MoveToken) -> &'static FaceletPerm {
    &MOVE_TABLES[table_slot(token)]
}

/// The single-move primitive of the solver boundary: permute a facelet
/// string by one token.
#[must_use]
pub fn apply_token(facelets: &Facelets, token: MoveToken) -> Facelets {
    move_table(token).apply(facelets)
}

#[cfg(test)]
mod tests {
    use cube_core::{
        facelets::{encode, Facelets},
        moves::{parse_sequence, MoveToken},
        state::CubeState,
    };

    use super::{apply_token, move_table};

    /// Scramble/state pairs produced by a real two-phase solver session.
    const SOLVER_VECTORS: [[&str; 2]; 6] = [
        ["", "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"],
        [
            "U",
            "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB",
        ],
        [
            "U2 R2 L D2 L F2 B2 U' D' F U R' L2 U2 D L F' B2 D R2",
            "FLLLULFRFRUURRRBBBLDDFFUBRUDFRDDUFLDUFUFLDLBRBDRBBULBD",
        ],
        [
            "L U' R2 F B2 R2 L U' D2 R2 F B' U R' U2 R2 D2 F2 U2 L'",
            "BLBLUFFFFDULURFRRULDLBFRDBUFDFBDDDBRDUUFLULRRUDRLBRBLB",
        ],
        [
            "R L2 U2 D2 R2 U2 R' D2 R' F' R L2 B R2 L' F' B2 U' D' F B2 U R' L2",
            "DUULUFBDDRRFURDBFLRBBUFBLBLULURDLLBDFUUFLRBDFRFRLBDFRD",
        ],
        [
            "U2 D2 F2 D2 F2 B2 R2 L' F2 R' L2 B' L' U2 D' B2 R' L' U D2 R L U D2 F B2",
            "RDDBUFRBUBLRURRLFLFLRLFRFBBDUDLDDUFFBRUULDBULFBDDBFURL",
        ],
    ];

    fn replay(sequence: &str) -> Facelets {
        let tokens = parse_sequence(sequence).unwrap();
        let mut facelets = encode(&CubeState::solved());
        for token in tokens {
            facelets = apply_token(&facelets, token);
        }

        facelets
    }

    #[test]
    fn matches_real_solver_strings() {
        for [sequence, expected] in SOLVER_VECTORS {
            assert_eq!(replay(sequence).to_string(), expected, "after {sequence:?}");
        }
    }

    #[test]
    fn every_table_has_the_right_order() {
        let identity = super::FaceletPerm::identity();
        for token in MoveToken::ALL {
            let table = move_table(token);
            assert_ne!(*table, identity, "{token}");

            let order = if token.quarter_turns() == 2 { 2 } else { 4 };
            let mut composed = table.clone();
            for _ in 1..order {
                composed.compose(table);
            }
            assert_eq!(composed, identity, "{token}");
        }
    }

    #[test]
    fn inverse_token_undoes_the_move() {
        let start = replay("U2 R2 L D2 L F2 B2 U' D' F");
        for token in MoveToken::ALL {
            let there = apply_token(&start, token);
            let back = apply_token(&there, token.inverse());
            assert_eq!(back, start, "{token}");
        }
    }

    #[test]
    fn quarter_turns_close_after_four() {
        let start = replay("L U' R2 F B2");
        for token in MoveToken::ALL {
            let mut facelets = start.clone();
            let repetitions = if token.quarter_turns() == 2 { 2 } else { 4 };
            for _ in 0..repetitions {
                facelets = apply_token(&facelets, token);
            }
            assert_eq!(facelets, start, "{token}");
        }
    }

    #[test]
    fn centers_never_move() {
        for token in MoveToken::ALL {
            let moved = apply_token(&encode(&CubeState::solved()), token);
            for (face_index, chunk) in moved.as_slice().chunks(9).enumerate() {
                assert_eq!(chunk[4] as usize, face_index, "{token}");
            }
        }
    }
}
