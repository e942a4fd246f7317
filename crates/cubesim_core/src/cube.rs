//! State of the whole cube: which cubie is where, plus move history.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::{Color, CubeError, Cubie, Face, Position, Twist, TwistDirection};

/// Colors of one face as seen from outside the cube, indexed by row and then
/// column.
pub type FaceGrid = [[Color; 3]; 3];

/// Dense index of the center cubie of each face, indexed by
/// [`Face::index()`].
const FACE_CENTERS: [usize; Face::COUNT] = {
    let mut ret = [0; Face::COUNT];
    let mut i = 0;
    while i < Face::COUNT {
        ret[i] = Face::ALL[i].center().index();
        i += 1;
    }
    ret
};

/// State of a 3x3x3 cube.
///
/// Cubies are stored in a dense array indexed by [`Position::index()`]. A
/// twist builds a new array and then replaces the old one, so a partially
/// applied twist is never observable. Cubies that a twist does not move keep
/// the same allocation.
#[derive(Debug, Clone)]
pub struct CubeState {
    cubies: [Arc<Cubie>; Position::COUNT],
    /// Whether an external animation is in progress. Twists are rejected
    /// while this is set.
    animating: bool,
    /// Every twist applied since the cube was created or reset.
    history: Vec<Twist>,
}
impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}
impl CubeState {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        Self {
            cubies: std::array::from_fn(|i| {
                let pos = Position::from_index(i).expect("position index in range");
                Arc::new(Cubie::solved(pos))
            }),
            animating: false,
            history: vec![],
        }
    }
    /// Resets the cube to the solved state and clears the history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns whether an external animation is in progress.
    pub fn is_animating(&self) -> bool {
        self.animating
    }
    /// Sets whether an external animation is in progress. While this is set,
    /// [`Self::rotate_face()`] and [`Self::randomize()`] do nothing.
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// Returns the cubie at `pos`.
    pub fn cubie(&self, pos: Position) -> &Cubie {
        &self.cubies[pos.index()]
    }
    /// Returns a shared handle to the cubie at `pos`.
    pub fn cubie_arc(&self, pos: Position) -> &Arc<Cubie> {
        &self.cubies[pos.index()]
    }
    /// Returns every twist applied since the cube was created or reset.
    pub fn history(&self) -> &[Twist] {
        &self.history
    }

    /// Turns `face` a quarter-turn in `direction` and records the move.
    ///
    /// Returns `false` without changing anything if an animation is in
    /// progress.
    pub fn rotate_face(&mut self, face: Face, direction: TwistDirection) -> bool {
        self.twist(Twist::new(face, direction))
    }
    /// Applies `twist` and records it.
    ///
    /// Returns `false` without changing anything if an animation is in
    /// progress.
    pub fn twist(&mut self, twist: Twist) -> bool {
        if self.animating {
            return false;
        }
        self.history.push(twist);

        let mut new_cubies = self.cubies.clone();
        for old in self.cubies.iter().filter(|c| twist.affects(c.position())) {
            let new = twist.apply_to_cubie(old);
            let i = new.position().index();
            new_cubies[i] = Arc::new(new);
        }
        self.cubies = new_cubies;

        true
    }
    /// Turns a face given by index (0 to 5) in a direction given as `1`
    /// (clockwise) or `-1` (counterclockwise).
    ///
    /// Returns an error for out-of-range input; otherwise behaves like
    /// [`Self::rotate_face()`].
    pub fn rotate_face_by_index(
        &mut self,
        face: usize,
        direction: i32,
    ) -> Result<bool, CubeError> {
        let face = Face::from_index(face)?;
        let direction = TwistDirection::try_from(direction)?;
        Ok(self.rotate_face(face, direction))
    }

    /// Applies `count` random twists, each recorded in the history.
    ///
    /// Returns `false` without changing anything if an animation is in
    /// progress.
    pub fn randomize<R: Rng>(&mut self, count: usize, rng: &mut R) -> bool {
        if self.animating {
            return false;
        }
        for _ in 0..count {
            self.twist(Twist::random(rng));
        }
        true
    }
    /// Applies `count` random twists generated deterministically from `seed`.
    pub fn randomize_seeded(&mut self, count: usize, seed: u64) -> bool {
        self.randomize(count, &mut rand_chacha::ChaCha12Rng::seed_from_u64(seed))
    }

    /// Returns whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let center_color = self.cubies[FACE_CENTERS[face.index()]].sticker(face);
            self.cubies_on(face)
                .all(|cubie| cubie.sticker(face) == center_color)
        })
    }

    /// Returns the colors of `face` as seen from outside the cube.
    ///
    /// See [`Face::grid_cell()`] for the layout.
    pub fn face_colors(&self, face: Face) -> FaceGrid {
        let mut grid = [[None; 3]; 3];
        for cubie in self.cubies_on(face) {
            let (row, col) = face.grid_cell(cubie.position());
            grid[row][col] = cubie.sticker(face);
        }
        // Every cubie on a face has a sticker facing out of it.
        grid.map(|row| row.map(|color| color.expect("missing sticker on outer face")))
    }

    /// Returns the twists that undo the history, in the order to apply them.
    ///
    /// This is not a solver: it only undoes the moves recorded since the cube
    /// was created or reset.
    pub fn solution_moves(&self) -> Vec<Twist> {
        self.history.iter().rev().map(|twist| twist.rev()).collect()
    }

    /// Returns an independent copy of every cubie.
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot {
            cubies: self.cubies.iter().map(|c| Cubie::clone(c)).collect(),
        }
    }

    /// Returns the number of stickers of each color, indexed by
    /// [`Color::index()`].
    pub fn color_counts(&self) -> [usize; Color::COUNT] {
        let mut ret = [0; Color::COUNT];
        for (_, color) in self.cubies.iter().flat_map(|c| c.stickers()) {
            ret[color.index()] += 1;
        }
        ret
    }

    fn cubies_on(&self, face: Face) -> impl '_ + Iterator<Item = &Cubie> {
        self.cubies
            .iter()
            .map(|c| &**c)
            .filter(move |c| c.position().is_on(face))
    }
}

/// Owned copy of every cubie in a cube, for display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeSnapshot {
    cubies: Vec<Cubie>,
}
impl CubeSnapshot {
    /// Returns the cubie at `pos`.
    pub fn get(&self, pos: Position) -> &Cubie {
        &self.cubies[pos.index()]
    }
    /// Returns all cubies, in position index order.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::twists;

    #[test]
    fn test_face_center_table() {
        for face in Face::ALL {
            let center = Position::from_index(FACE_CENTERS[face.index()]);
            assert_eq!(center, Some(face.center()));
        }
    }

    #[test]
    fn test_new_cube_is_solved() {
        let cube = CubeState::new();
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
        assert!(!cube.is_animating());
        assert_eq!(cube.color_counts(), [9; 6]);
        for face in Face::ALL {
            assert_eq!(cube.face_colors(face), [[Color::of_solved_face(face); 3]; 3]);
        }
    }

    #[test]
    fn test_cubies_are_at_their_positions() {
        let mut cube = CubeState::new();
        cube.randomize_seeded(30, 1);
        for pos in Position::iter() {
            assert_eq!(cube.cubie(pos).position(), pos);
            assert_eq!(cube.cubie(pos).sticker_count(), pos.sticker_count());
        }
    }

    #[test]
    fn test_animating_blocks_twists() {
        let mut cube = CubeState::new();
        cube.set_animating(true);
        assert!(!cube.rotate_face(Face::Right, TwistDirection::CW));
        assert!(!cube.randomize_seeded(5, 0));
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());

        cube.set_animating(false);
        assert!(cube.rotate_face(Face::Right, TwistDirection::CW));
        assert_eq!(cube.history(), &[twists::R]);
    }

    #[test]
    fn test_rotate_face_by_index() {
        let mut cube = CubeState::new();
        assert_eq!(cube.rotate_face_by_index(6, 1), Err(CubeError::InvalidFace(6)));
        assert_eq!(
            cube.rotate_face_by_index(0, 2),
            Err(CubeError::InvalidDirection(2)),
        );
        assert!(cube.history().is_empty());
        assert_eq!(cube.rotate_face_by_index(2, -1), Ok(true));
        assert_eq!(cube.history(), &[twists::R.rev()]);
    }

    #[test]
    fn test_randomize_zero_moves() {
        let mut cube = CubeState::new();
        assert!(cube.randomize_seeded(0, 42));
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut cube = CubeState::new();
        cube.randomize_seeded(20, 3);
        cube.set_animating(true);
        cube.reset();
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
        assert!(!cube.is_animating());
        assert_eq!(cube.snapshot(), CubeState::new().snapshot());
    }

    #[test]
    fn test_solution_moves_reverse_history() {
        let mut cube = CubeState::new();
        for twist in [twists::R, twists::U.rev(), twists::F] {
            cube.twist(twist);
        }
        assert_eq!(
            cube.solution_moves(),
            vec![twists::F.rev(), twists::U, twists::R.rev()],
        );
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut cube = CubeState::new();
        let before = cube.snapshot();
        cube.rotate_face(Face::Front, TwistDirection::CW);
        assert_eq!(before, CubeState::new().snapshot());
        assert_ne!(before, cube.snapshot());
        for (i, cubie) in before.cubies().iter().enumerate() {
            assert_eq!(cubie.position().index(), i);
        }
    }
}
