//! Individual cubies.

use serde::{Serialize, Serializer};

use crate::{Color, Face, Position};

/// One of the 26 visible sub-cubes, along with the colors on its outward
/// faces.
///
/// Only faces that point out of the cube at the cubie's current position have
/// a color; a corner has three, an edge two, and a face center one.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    position: Position,
    /// Colors indexed by [`Face::index()`].
    #[serde(serialize_with = "serialize_stickers")]
    stickers: [Option<Color>; Face::COUNT],
}
impl Cubie {
    /// Returns the cubie that occupies `position` on a solved cube.
    pub fn solved(position: Position) -> Self {
        let mut stickers = [None; Face::COUNT];
        for face in position.faces() {
            stickers[face.index()] = Some(Color::of_solved_face(face));
        }
        Self { position, stickers }
    }
    pub(crate) fn from_parts(position: Position, stickers: [Option<Color>; Face::COUNT]) -> Self {
        Self { position, stickers }
    }

    /// Returns the current position of the cubie.
    pub fn position(&self) -> Position {
        self.position
    }
    /// Returns the color on the side of the cubie facing the direction of
    /// `face`, or `None` if that side is not visible.
    pub fn sticker(&self, face: Face) -> Option<Color> {
        self.stickers[face.index()]
    }
    /// Returns an iterator over the visible sides of the cubie and their
    /// colors.
    pub fn stickers(&self) -> impl '_ + Iterator<Item = (Face, Color)> {
        Face::ALL
            .into_iter()
            .filter_map(|face| Some((face, self.sticker(face)?)))
    }
    /// Returns the number of visible stickers.
    pub fn sticker_count(&self) -> usize {
        self.stickers.iter().flatten().count()
    }
}

/// Serializes only the visible sides, as a map from face to color.
fn serialize_stickers<S: Serializer>(
    stickers: &[Option<Color>; Face::COUNT],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(
        Face::ALL
            .into_iter()
            .filter_map(|face| Some((face, stickers[face.index()]?))),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_solved_cubie_stickers_face_outward() {
        for pos in Position::iter() {
            let cubie = Cubie::solved(pos);
            assert_eq!(cubie.sticker_count(), pos.sticker_count());
            for (face, color) in cubie.stickers() {
                assert!(pos.is_on(face));
                assert_eq!(color.home_face(), face);
            }
        }
    }

    #[test]
    fn test_corner_cubie() {
        let pos = Position::try_from([-1, 1, 1]).expect("valid position");
        let cubie = Cubie::solved(pos);
        assert_eq!(cubie.sticker(Face::Left), Some(Color::Orange));
        assert_eq!(cubie.sticker(Face::Front), Some(Color::Blue));
        assert_eq!(cubie.sticker(Face::Top), Some(Color::White));
        assert_eq!(cubie.sticker(Face::Right), None);
        assert_eq!(cubie.sticker_count(), 3);
    }

    #[test]
    fn test_serialize_labels_stickers_by_face() {
        let pos = Position::try_from([-1, 1, 1]).expect("valid position");
        let json = serde_json::to_value(Cubie::solved(pos)).expect("error serializing cubie");
        assert_eq!(
            json,
            serde_json::json!({
                "position": [-1, 1, 1],
                "stickers": { "Top": "White", "Left": "Orange", "Front": "Blue" },
            }),
        );

        let center = Cubie::solved(Face::Right.center());
        let json = serde_json::to_value(center).expect("error serializing cubie");
        assert_eq!(json["stickers"], serde_json::json!({ "Right": "Red" }));
    }
}
