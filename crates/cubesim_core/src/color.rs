//! Sticker colors.

use std::fmt;

use serde::Serialize;
use strum::FromRepr;

use crate::Face;

/// Color of a single sticker.
///
/// Each color belongs to one face of the solved cube.
#[derive(Serialize, FromRepr, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    /// Color of the top face (+Z).
    White = 0,
    /// Color of the bottom face (-Z).
    Yellow = 1,
    /// Color of the right face (+X).
    Red = 2,
    /// Color of the left face (-X).
    Orange = 3,
    /// Color of the front face (+Y).
    Blue = 4,
    /// Color of the back face (-Y).
    Green = 5,
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
impl Color {
    /// Number of colors.
    pub const COUNT: usize = 6;
    /// All colors, in index order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    /// Returns the index of the color (0 to 5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the color of `face` on a solved cube.
    pub const fn of_solved_face(face: Face) -> Color {
        match face {
            Face::Top => Color::White,
            Face::Bottom => Color::Yellow,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
            Face::Front => Color::Blue,
            Face::Back => Color::Green,
        }
    }
    /// Returns the face that shows this color on a solved cube.
    pub const fn home_face(self) -> Face {
        match self {
            Color::White => Face::Top,
            Color::Yellow => Face::Bottom,
            Color::Red => Face::Right,
            Color::Orange => Face::Left,
            Color::Blue => Face::Front,
            Color::Green => Face::Back,
        }
    }

    /// Returns the display color as linear RGB components from 0.0 to 1.0.
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            Color::White => [1.0, 1.0, 1.0],
            Color::Yellow => [1.0, 1.0, 0.0],
            Color::Red => [1.0, 0.0, 0.0],
            Color::Orange => [1.0, 0.5, 0.0],
            Color::Blue => [0.0, 0.0, 1.0],
            Color::Green => [0.0, 1.0, 0.0],
        }
    }
    /// Returns the display color as 8-bit RGB components.
    pub fn rgb8(self) -> [u8; 3] {
        self.rgb().map(|c| (c * 255.0) as u8)
    }

    /// Returns a one-letter abbreviation of the color.
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_faces_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::of_solved_face(color.home_face()), color);
            assert_eq!(Color::from_repr(color.index() as u8), Some(color));
        }
    }

    #[test]
    fn test_rgb8() {
        assert_eq!(Color::Orange.rgb8(), [255, 127, 0]);
        assert_eq!(Color::White.rgb8(), [255, 255, 255]);
    }
}
