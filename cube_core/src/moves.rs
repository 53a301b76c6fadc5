use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{BadFaceLetter, Face};

/// Direction of one face turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Turn {
    /// A quarter turn clockwise, as seen from outside the turning face.
    Clockwise,
    /// A quarter turn counter-clockwise (the `'` modifier).
    Counter,
    /// A half turn (the `2` modifier).
    Half,
}

/// One turn of one face in standard notation: a face letter optionally
/// followed by `'` or `2`. Eighteen tokens exist.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveToken {
    pub face: Face,
    pub turn: Turn,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("{0:?} is not a move; expected a face letter optionally followed by ' or 2")]
pub struct BadMoveToken(pub String);

impl MoveToken {
    /// All eighteen tokens, grouped by face as `X`, `X2`, `X'`.
    pub const ALL: [Self; 18] = {
        let mut out = [MoveToken {
            face: Face::U,
            turn: Turn::Clockwise,
        }; 18];

        let mut i = 0;
        while i < 6 {
            out[i * 3] = MoveToken {
                face: Face::ALL[i],
                turn: Turn::Clockwise,
            };
            out[i * 3 + 1] = MoveToken {
                face: Face::ALL[i],
                turn: Turn::Half,
            };
            out[i * 3 + 2] = MoveToken {
                face: Face::ALL[i],
                turn: Turn::Counter,
            };
            i += 1;
        }

        out
    };

    /// The token that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        let turn = match self.turn {
            Turn::Clockwise => Turn::Counter,
            Turn::Counter => Turn::Clockwise,
            Turn::Half => Turn::Half,
        };

        MoveToken {
            face: self.face,
            turn,
        }
    }

    /// How many clockwise quarter turns this token stands for.
    #[must_use]
    pub fn quarter_turns(self) -> usize {
        match self.turn {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::Counter => 3,
        }
    }
}

impl FromStr for MoveToken {
    type Err = BadMoveToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BadMoveToken(s.to_owned());

        let mut chars = s.chars();
        let (Some(letter), modifier, None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(bad());
        };

        let face = Face::from_letter(letter).map_err(|BadFaceLetter(_)| bad())?;
        let turn = match modifier {
            None => Turn::Clockwise,
            Some('\'') => Turn::Counter,
            Some('2') => Turn::Half,
            Some(_) => return Err(bad()),
        };

        Ok(MoveToken { face, turn })
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face.letter())?;
        match self.turn {
            Turn::Clockwise => Ok(()),
            Turn::Counter => write!(f, "'"),
            Turn::Half => write!(f, "2"),
        }
    }
}

/// Parse a whitespace-delimited move sequence, such as a solver answer.
pub fn parse_sequence(s: &str) -> Result<Vec<MoveToken>, BadMoveToken> {
    s.split_whitespace().map(str::parse).collect()
}
