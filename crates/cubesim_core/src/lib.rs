//! Model of a 3x3x3 twisty cube.
//!
//! [`CubeState`] owns the 26 visible cubies and the move history. A
//! [`Twist`] is a quarter-turn of one face; it permutes the nine cubies in
//! that face's layer and relabels the sides of each one so that every color
//! keeps pointing the same way relative to its cubie.
//!
//! This crate does no logging and no I/O. Presentation layers read from it
//! through [`CubeState::face_colors()`] and [`CubeState::snapshot()`].

mod color;
mod cube;
mod cubie;
mod error;
mod geometry;
mod sign;
mod twist;


pub use color::Color;
pub use cube::{CubeSnapshot, CubeState, FaceGrid};
pub use cubie::Cubie;
pub use error::CubeError;
pub use geometry::{Axis, Face, Position};
pub use sign::Sign;
pub use twist::{Twist, TwistDirection, format_twists, parse_twists, twists};

/// Number of random twists in a default scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;
