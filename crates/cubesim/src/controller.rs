//! Controller that applies user commands to the cube and keeps views up to
//! date.

use cubesim_core::{CubeState, Twist, format_twists};

/// Presentation backend that displays a cube.
pub(crate) trait Renderable {
    /// Called after every successful change to the cube.
    fn on_cube_changed(&mut self, cube: &CubeState) -> eyre::Result<()>;
}

/// Owns the cube and the views displaying it.
#[derive(Default)]
pub(crate) struct AppController {
    cube: CubeState,
    views: Vec<Box<dyn Renderable>>,
}
impl AppController {
    /// Constructs a controller with a solved cube and no views.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a view to be notified of changes.
    pub fn add_view(&mut self, view: Box<dyn Renderable>) {
        self.views.push(view);
    }

    /// Returns the cube.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }

    /// Applies a twist. Returns `false` if the twist was rejected because an
    /// animation is in progress.
    pub fn twist(&mut self, twist: Twist) -> bool {
        if self.cube.is_animating() {
            log::warn!("Twist {twist} rejected while animating");
            return false;
        }
        let (axis, sign) = twist.face.axis_sign();
        log::info!(
            "Rotating face {}: axis={axis}, sign={}, direction={}",
            twist.face.index(),
            sign.int(),
            twist.direction.int(),
        );
        self.cube.twist(twist);
        self.notify_views();
        true
    }

    /// Resets the cube to the solved state.
    pub fn reset(&mut self) {
        log::info!("Resetting cube to solved state");
        self.cube.reset();
        self.notify_views();
    }

    /// Scrambles the cube with `count` random twists. If `seed` is given, the
    /// scramble is deterministic.
    pub fn randomize(&mut self, count: usize, seed: Option<u64>) -> bool {
        log::info!("Randomizing cube with {count} moves");
        let ok = match seed {
            Some(seed) => self.cube.randomize_seeded(count, seed),
            None => self.cube.randomize(count, &mut rand::rng()),
        };
        if ok {
            self.notify_views();
        } else {
            log::warn!("Randomize rejected while animating");
        }
        ok
    }

    /// Undoes the move history one twist at a time, notifying views after
    /// each twist. Returns the twists that were applied.
    pub fn solve(&mut self) -> Vec<Twist> {
        let moves = self.cube.solution_moves();
        log::info!("Solving cube with {} moves: {}", moves.len(), format_twists(&moves));
        let mut applied = vec![];
        for twist in moves {
            if !self.twist(twist) {
                break;
            }
            applied.push(twist);
        }
        applied
    }

    fn notify_views(&mut self) {
        for view in &mut self.views {
            if let Err(e) = view.on_cube_changed(&self.cube) {
                log::error!("Error updating view: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use cubesim_core::twists;
    use pretty_assertions::assert_eq;

    use super::*;

    /// View that records the move history every time it is notified.
    #[derive(Default, Clone)]
    struct RecordingView(Rc<RefCell<Vec<String>>>);
    impl Renderable for RecordingView {
        fn on_cube_changed(&mut self, cube: &CubeState) -> eyre::Result<()> {
            self.0.borrow_mut().push(format_twists(cube.history()));
            Ok(())
        }
    }

    struct FailingView;
    impl Renderable for FailingView {
        fn on_cube_changed(&mut self, _cube: &CubeState) -> eyre::Result<()> {
            eyre::bail!("display unavailable")
        }
    }

    fn controller_with_recorder() -> (AppController, RecordingView) {
        let mut controller = AppController::new();
        let view = RecordingView::default();
        controller.add_view(Box::new(view.clone()));
        (controller, view)
    }

    #[test]
    fn test_views_are_notified_after_each_change() {
        let (mut controller, view) = controller_with_recorder();
        assert!(controller.twist(twists::R));
        assert!(controller.twist(twists::U.rev()));
        assert_eq!(*view.0.borrow(), vec!["R", "R U'"]);
    }

    #[test]
    fn test_reset_notifies_views() {
        let (mut controller, view) = controller_with_recorder();
        assert!(controller.twist(twists::L));
        controller.cube.set_animating(true);
        controller.reset();
        assert!(controller.cube().is_solved());
        assert!(!controller.cube().is_animating());
        assert!(controller.twist(twists::D));
        assert_eq!(*view.0.borrow(), vec!["L", "", "D"]);
    }

    #[test]
    fn test_rejected_twist_does_not_notify() {
        let (mut controller, view) = controller_with_recorder();
        controller.cube.set_animating(true);
        assert!(!controller.twist(twists::F));
        assert!(!controller.randomize(3, Some(1)));
        assert!(view.0.borrow().is_empty());
        assert!(controller.cube().is_solved());
    }

    #[test]
    fn test_solve_steps_through_solution() {
        let (mut controller, view) = controller_with_recorder();
        assert!(controller.randomize(4, Some(8)));
        let scramble = controller.cube().history().to_vec();
        let applied = controller.solve();

        assert_eq!(applied.len(), 4);
        assert_eq!(applied, controller.cube().history()[4..].to_vec());
        assert_eq!(applied[0], scramble[3].rev());
        assert!(controller.cube().is_solved());
        // One notification for the scramble and one per solution twist.
        assert_eq!(view.0.borrow().len(), 5);
    }

    #[test]
    fn test_view_errors_do_not_stop_other_views() {
        let mut controller = AppController::new();
        controller.add_view(Box::new(FailingView));
        let view = RecordingView::default();
        controller.add_view(Box::new(view.clone()));
        assert!(controller.twist(twists::B));
        assert_eq!(*view.0.borrow(), vec!["B"]);
    }
}
