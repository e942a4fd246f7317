//! Errors for invalid input at the edge of the cube model.

/// Error produced when a caller passes a value outside the model's domain.
///
/// Rotating while an animation is in progress is not an error; see
/// [`crate::CubeState::rotate_face`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum CubeError {
    #[error("invalid face index {0}; expected 0 to 5")]
    InvalidFace(usize),
    #[error("invalid twist direction {0}; expected 1 or -1")]
    InvalidDirection(i32),
    #[error("invalid cubie position {0:?}")]
    InvalidPosition([i8; 3]),
    #[error("invalid move {0:?}")]
    InvalidNotation(String),
}
