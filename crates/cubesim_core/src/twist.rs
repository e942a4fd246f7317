//! Quarter-turns of a single face and the permutation they apply to cubies.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use cgmath::{Matrix3, SquareMatrix};
use itertools::Itertools;
use rand::Rng;
use serde::Serialize;

use crate::{CubeError, Cubie, Face, Position, Sign};

/// Quarter-turns of each face, named by their move notation.
pub mod twists {
    use super::*;

    /// Turn the top face clockwise.
    pub const U: Twist = Twist::new(Face::Top, TwistDirection::CW);
    /// Turn the bottom face clockwise.
    pub const D: Twist = Twist::new(Face::Bottom, TwistDirection::CW);
    /// Turn the right face clockwise.
    pub const R: Twist = Twist::new(Face::Right, TwistDirection::CW);
    /// Turn the left face clockwise.
    pub const L: Twist = Twist::new(Face::Left, TwistDirection::CW);
    /// Turn the front face clockwise.
    pub const F: Twist = Twist::new(Face::Front, TwistDirection::CW);
    /// Turn the back face clockwise.
    pub const B: Twist = Twist::new(Face::Back, TwistDirection::CW);
}

/// Rotation direction of a quarter-turn, as seen from outside the face being
/// turned.
#[derive(Serialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise (+1).
    #[default]
    CW,
    /// Counterclockwise (-1).
    CCW,
}
impl TryFrom<i32> for TwistDirection {
    type Error = CubeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::CW),
            -1 => Ok(Self::CCW),
            _ => Err(CubeError::InvalidDirection(value)),
        }
    }
}
impl TwistDirection {
    /// Both directions.
    pub const ALL: [TwistDirection; 2] = [TwistDirection::CW, TwistDirection::CCW];

    /// Returns the reverse direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Self::CW => Self::CCW,
            Self::CCW => Self::CW,
        }
    }
    /// Returns `Sign::Pos` for clockwise and `Sign::Neg` for
    /// counterclockwise.
    pub const fn sign(self) -> Sign {
        match self {
            Self::CW => Sign::Pos,
            Self::CCW => Sign::Neg,
        }
    }
    /// Returns `1` for clockwise and `-1` for counterclockwise.
    pub const fn int(self) -> i32 {
        self.sign().int() as i32
    }
    /// Returns the suffix used in move notation.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::CW => "",
            Self::CCW => "'",
        }
    }
}

/// A quarter-turn of one face.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Face to turn.
    pub face: Face,
    /// Direction to turn it.
    pub direction: TwistDirection,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.symbol(), self.direction.symbol())
    }
}
impl FromStr for Twist {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CubeError::InvalidNotation(s.to_owned());
        let mut chars = s.trim().chars();
        let face = chars.next().and_then(Face::from_symbol).ok_or_else(err)?;
        let direction = match chars.as_str() {
            "" => TwistDirection::CW,
            "'" => TwistDirection::CCW,
            _ => return Err(err()),
        };
        Ok(Twist::new(face, direction))
    }
}
impl Twist {
    /// Returns a twist of `face` in `direction`.
    pub const fn new(face: Face, direction: TwistDirection) -> Self {
        Self { face, direction }
    }
    /// Returns a twist with a face and direction chosen uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let face = Face::ALL[rng.random_range(0..Face::COUNT)];
        let direction = TwistDirection::ALL[rng.random_range(0..2)];
        Self::new(face, direction)
    }
    /// Returns the twist that undoes this one.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self::new(self.face, self.direction.rev())
    }

    /// Returns the direction of the twist relative to the positive end of the
    /// face's axis.
    ///
    /// A clockwise turn of a face on the negative end of an axis is a
    /// counterclockwise turn when seen from the positive end.
    pub fn effective_direction(self) -> Sign {
        self.direction.sign() * self.face.sign()
    }

    /// Returns whether a cubie at `pos` is moved by this twist.
    pub fn affects(self, pos: Position) -> bool {
        pos.is_on(self.face)
    }

    /// Returns the position that a cubie at `pos` moves to. Positions outside
    /// the turning layer are rotated as well, so callers should check
    /// [`Twist::affects()`] first.
    pub fn rotate_position(self, pos: Position) -> Position {
        let [a1, a2] = self.face.axis().others();
        let mut coords = pos.coords();
        match self.effective_direction() {
            Sign::Pos => {
                coords[a1.int()] = -pos[a2];
                coords[a2.int()] = pos[a1];
            }
            _ => {
                coords[a1.int()] = pos[a2];
                coords[a2.int()] = -pos[a1];
            }
        }
        Position::from_coords(coords)
    }

    /// Returns the direction that a side of a moving cubie faces after the
    /// twist, given the direction it faced before.
    ///
    /// This is the same rotation as [`Twist::rotate_position()`], applied to
    /// the unit vector of the side.
    pub fn rotate_label(self, label: Face) -> Face {
        let [a1, a2] = self.face.axis().others();
        let (axis, sign) = label.axis_sign();
        let eff = self.effective_direction();
        if axis == a1 {
            Face::new(a2, sign * eff)
        } else if axis == a2 {
            Face::new(a1, -sign * eff)
        } else {
            label
        }
    }

    /// Returns the cubie that results from moving `cubie` with this twist,
    /// carrying each of its colors to the rotated side.
    pub fn apply_to_cubie(self, cubie: &Cubie) -> Cubie {
        let mut stickers = [None; Face::COUNT];
        for (label, color) in cubie.stickers() {
            stickers[self.rotate_label(label).index()] = Some(color);
        }
        Cubie::from_parts(self.rotate_position(cubie.position()), stickers)
    }

    /// Returns the rotation matrix for the portion `progress` (0.0 to 1.0) of
    /// the twist.
    ///
    /// At `progress == 1.0` this moves every cubie in the layer exactly where
    /// [`Twist::rotate_position()`] puts it, for all six faces. Renderers must
    /// animate with this matrix rather than deriving their own angle.
    pub fn matrix(self, progress: f32) -> Matrix3<f32> {
        let [a1, a2] = self.face.axis().others();
        let (a1, a2) = (a1.int(), a2.int());
        let angle = progress * FRAC_PI_2 * self.effective_direction().int() as f32;
        let (sin, cos) = angle.sin_cos();

        // Columns are inputs and rows are outputs.
        let mut ret = Matrix3::identity();
        ret[a1][a1] = cos;
        ret[a1][a2] = sin;
        ret[a2][a1] = -sin;
        ret[a2][a2] = cos;
        ret
    }
}

/// Parses a whitespace-separated sequence of moves, such as `"R U R' U'"`.
pub fn parse_twists(s: &str) -> Result<Vec<Twist>, CubeError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Formats a sequence of moves separated by spaces.
pub fn format_twists(twists: &[Twist]) -> String {
    twists.iter().join(" ")
}
