//! Lattice coordinates: axes, faces, and cubie positions.

use std::fmt;
use std::ops::Index;

use serde::{Serialize, Serializer};
use strum::FromRepr;

use crate::{CubeError, Sign};

/// 3-dimensional axis.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (front).
    Y = 1,
    /// Z axis (top).
    Z = 2,
}
impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        self as usize
    }
    /// Returns the two axes other than this one, in ascending order.
    ///
    /// The order is what gives "clockwise" a meaning: a positive quarter-turn
    /// about `self` carries the first axis onto the second.
    pub const fn others(self) -> [Axis; 2] {
        match self {
            Axis::X => [Axis::Y, Axis::Z],
            Axis::Y => [Axis::X, Axis::Z],
            Axis::Z => [Axis::X, Axis::Y],
        }
    }
    /// Returns a lowercase name for the axis.
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six outer faces of the cube.
///
/// The same type names the six oriented faces of a single cubie, since a
/// cubie sticker on the outside of the cube always points in the direction of
/// one of the cube's faces.
#[derive(Serialize, FromRepr, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    /// +Z
    Top = 0,
    /// -Z
    Bottom = 1,
    /// +X
    Right = 2,
    /// -X
    Left = 3,
    /// +Y
    Front = 4,
    /// -Y
    Back = 5,
}
impl TryFrom<u8> for Face {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::from_repr(value).ok_or(CubeError::InvalidFace(value as usize))
    }
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
impl Face {
    /// Returns the face on the given axis with the given sign. Panics if given
    /// `Sign::Zero`.
    pub fn new(axis: Axis, sign: Sign) -> Face {
        match Face::from_axis_sign(axis, sign) {
            Some(face) => face,
            None => panic!("invalid sign for face"),
        }
    }

    /// Number of faces.
    pub const COUNT: usize = 6;
    /// All faces, in index order.
    pub const ALL: [Face; Face::COUNT] = [
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Left,
        Face::Front,
        Face::Back,
    ];

    /// Returns the face with the given index (0 to 5).
    pub fn from_index(index: usize) -> Result<Face, CubeError> {
        u8::try_from(index)
            .ok()
            .and_then(Face::from_repr)
            .ok_or(CubeError::InvalidFace(index))
    }
    /// Returns the index of the face (0 to 5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to the face and the direction the face
    /// points along it.
    pub const fn axis_sign(self) -> (Axis, Sign) {
        match self {
            Face::Top => (Axis::Z, Sign::Pos),
            Face::Bottom => (Axis::Z, Sign::Neg),
            Face::Right => (Axis::X, Sign::Pos),
            Face::Left => (Axis::X, Sign::Neg),
            Face::Front => (Axis::Y, Sign::Pos),
            Face::Back => (Axis::Y, Sign::Neg),
        }
    }
    /// Returns the face on the given axis pointing in the given direction, or
    /// `None` if `sign` is zero.
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Option<Face> {
        match (axis, sign) {
            (Axis::Z, Sign::Pos) => Some(Face::Top),
            (Axis::Z, Sign::Neg) => Some(Face::Bottom),
            (Axis::X, Sign::Pos) => Some(Face::Right),
            (Axis::X, Sign::Neg) => Some(Face::Left),
            (Axis::Y, Sign::Pos) => Some(Face::Front),
            (Axis::Y, Sign::Neg) => Some(Face::Back),
            (_, Sign::Zero) => None,
        }
    }
    /// Returns the axis perpendicular to the face.
    pub const fn axis(self) -> Axis {
        self.axis_sign().0
    }
    /// Returns the sign of the face along its perpendicular axis.
    pub const fn sign(self) -> Sign {
        self.axis_sign().1
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Returns the position of the center cubie of this face.
    pub const fn center(self) -> Position {
        let (axis, sign) = self.axis_sign();
        let mut coords = [Sign::Zero; 3];
        coords[axis.int()] = sign;
        Position(coords)
    }

    /// Returns the move-notation letter for the face.
    pub const fn symbol(self) -> char {
        match self {
            Face::Top => 'U',
            Face::Bottom => 'D',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }
    /// Returns the face with the given move-notation letter.
    pub fn from_symbol(c: char) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.symbol() == c)
    }
    /// Returns a human-friendly name for the face.
    pub const fn name(self) -> &'static str {
        match self {
            Face::Top => "Top",
            Face::Bottom => "Bottom",
            Face::Right => "Right",
            Face::Left => "Left",
            Face::Front => "Front",
            Face::Back => "Back",
        }
    }

    /// Returns the `(row, column)` cell at which a cubie on this face appears
    /// when the face is viewed from outside the cube.
    ///
    /// Row 0 is the top row and column 0 is the leftmost column. The layout
    /// lines up the edges of neighboring faces when all six are unfolded into
    /// a net around the front face.
    pub fn grid_cell(self, pos: Position) -> (usize, usize) {
        let [a1, a2] = self.axis().others();
        let c1 = pos[a1].idx();
        let c2 = pos[a2].idx();
        match self {
            Face::Right => (2 - c2, c1),
            Face::Left => (2 - c2, 2 - c1),
            Face::Front => (2 - c2, 2 - c1),
            Face::Back => (2 - c2, c1),
            Face::Top => (c2, c1),
            Face::Bottom => (2 - c2, c1),
        }
    }
}

/// Location of a cubie in the 3x3x3 lattice.
///
/// The core of the cube at (0, 0, 0) is not a valid position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position([Sign; 3]);
impl Index<Axis> for Position {
    type Output = Sign;
    fn index(&self, axis: Axis) -> &Sign {
        &self.0[axis.int()]
    }
}
impl TryFrom<[i8; 3]> for Position {
    type Error = CubeError;

    fn try_from(value: [i8; 3]) -> Result<Self, Self::Error> {
        let err = || CubeError::InvalidPosition(value);
        let [x, y, z] = value.map(Sign::from_int);
        Position::new([x.ok_or_else(err)?, y.ok_or_else(err)?, z.ok_or_else(err)?])
            .ok_or_else(err)
    }
}
impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ints().serialize(serializer)
    }
}
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.ints();
        write!(f, "({x}, {y}, {z})")
    }
}
impl Position {
    /// Number of valid positions.
    pub const COUNT: usize = 26;

    /// Index that the core would occupy in a full 3x3x3 array.
    const CORE_RAW_INDEX: usize = 13;

    /// Returns the position with the given coordinates, or `None` for the
    /// core.
    pub const fn new(coords: [Sign; 3]) -> Option<Position> {
        if coords[0].is_zero() && coords[1].is_zero() && coords[2].is_zero() {
            None
        } else {
            Some(Position(coords))
        }
    }
    /// Returns the position with the given coordinates. Panics if given the
    /// core.
    pub(crate) fn from_coords(coords: [Sign; 3]) -> Position {
        assert!(coords.iter().any(|s| s.is_nonzero()), "core is not a position");
        Position(coords)
    }
    /// Returns the coordinates of the position.
    pub const fn coords(self) -> [Sign; 3] {
        self.0
    }
    /// Returns the coordinates of the position as integers.
    pub fn ints(self) -> [i8; 3] {
        self.0.map(Sign::int)
    }

    /// Returns the dense index of the position, in the range `0..26`.
    ///
    /// This is `(x+1)*9 + (y+1)*3 + (z+1)`, shifted down by one past the core.
    pub const fn index(self) -> usize {
        let raw = self.0[0].idx() * 9 + self.0[1].idx() * 3 + self.0[2].idx();
        if raw > Self::CORE_RAW_INDEX {
            raw - 1
        } else {
            raw
        }
    }
    /// Returns the position with the given dense index, or `None` if `index`
    /// is out of range.
    pub fn from_index(index: usize) -> Option<Position> {
        if index >= Self::COUNT {
            return None;
        }
        let raw = if index >= Self::CORE_RAW_INDEX {
            index + 1
        } else {
            index
        };
        let coord = |i: usize| Sign::ALL[i % 3];
        Some(Position([coord(raw / 9), coord(raw / 3), coord(raw)]))
    }
    /// Returns an iterator over all 26 positions, in index order.
    pub fn iter() -> impl Clone + Iterator<Item = Position> {
        (0..Self::COUNT).filter_map(Position::from_index)
    }

    /// Returns whether the position lies in the layer of `face`.
    pub fn is_on(self, face: Face) -> bool {
        let (axis, sign) = face.axis_sign();
        self[axis] == sign
    }
    /// Returns the faces of the cube that this position touches.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Axis::ALL
            .into_iter()
            .filter_map(move |axis| Face::from_axis_sign(axis, self[axis]))
    }
    /// Returns the number of nonzero coordinates, which is also the number of
    /// stickers on a cubie at this position.
    pub fn sticker_count(self) -> usize {
        self.0.iter().filter(|s| s.is_nonzero()).count()
    }
    /// Returns the face whose center is at this position, if any.
    pub fn as_face_center(self) -> Option<Face> {
        let mut faces = self.faces();
        match (faces.next(), faces.next()) {
            (Some(face), None) => Some(face),
            _ => None,
        }
    }
}
