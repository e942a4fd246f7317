//! Unfolded 2D view of the cube, drawn as text.
//!
//! ```text
//!     U
//! L   F   R   B
//!     D
//! ```

use std::io::Write;

use cubesim_core::{Color, CubeState, Face};
use owo_colors::OwoColorize;

use crate::controller::Renderable;

/// Faces in the middle band of the net, from left to right.
const MIDDLE_FACES: [Face; 4] = [Face::Left, Face::Front, Face::Right, Face::Back];

/// Renders the net of `cube`, one line per row of stickers.
///
/// If `color` is `true`, each sticker is a colored block; otherwise it is the
/// color's letter.
pub(crate) fn render_net(cube: &CubeState, color: bool) -> String {
    let cell = |c: Color| {
        if color {
            let [r, g, b] = c.rgb8();
            "  ".on_truecolor(r, g, b).to_string()
        } else {
            c.symbol().to_string()
        }
    };
    let face_rows = |face: Face| cube.face_colors(face).map(|row| row.map(cell).concat());

    let cell_width = if color { 2 } else { 1 };
    let indent = " ".repeat(cell_width * 3 + 1);

    let mut lines = vec![];
    for row in face_rows(Face::Top) {
        lines.push(format!("{indent}{row}"));
    }
    let middle = MIDDLE_FACES.map(face_rows);
    for i in 0..3 {
        lines.push(middle.iter().map(|rows| rows[i].as_str()).collect::<Vec<_>>().join(" "));
    }
    for row in face_rows(Face::Bottom) {
        lines.push(format!("{indent}{row}"));
    }

    let mut ret = lines.join("\n");
    ret.push('\n');
    ret
}

/// View that writes the net to an output stream every time the cube changes.
pub(crate) struct NetView<W> {
    out: W,
    color: bool,
}
impl<W: Write> NetView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }
}
impl<W: Write> Renderable for NetView<W> {
    fn on_cube_changed(&mut self, cube: &CubeState) -> eyre::Result<()> {
        match cube.history().last() {
            Some(twist) => writeln!(self.out, "After {twist}:")?,
            None => writeln!(self.out, "Solved cube:")?,
        }
        write!(self.out, "{}", render_net(cube, self.color))?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cubesim_core::twists;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_solved_net() {
        let expected = "    WWW\n\
                        \x20   WWW\n\
                        \x20   WWW\n\
                        OOO BBB RRR GGG\n\
                        OOO BBB RRR GGG\n\
                        OOO BBB RRR GGG\n\
                        \x20   YYY\n\
                        \x20   YYY\n\
                        \x20   YYY\n";
        assert_eq!(render_net(&CubeState::new(), false), expected);
    }

    #[test]
    fn test_net_after_top_twist() {
        let mut cube = CubeState::new();
        cube.twist(twists::U);
        let net = render_net(&cube, false);
        let lines: Vec<&str> = net.lines().collect();
        assert_eq!(lines[3], "BBB RRR GGG OOO");
        assert_eq!(lines[4], "OOO BBB RRR GGG");
    }

    #[test]
    fn test_colored_net_has_no_letters() {
        let net = render_net(&CubeState::new(), true);
        assert_eq!(net.lines().count(), 9);
        assert!(!net.contains('W'));
    }

    #[test]
    fn test_net_view_writes_header() {
        let mut cube = CubeState::new();
        let mut view = NetView::new(vec![], false);
        view.on_cube_changed(&cube).expect("error writing net");
        cube.twist(twists::R.rev());
        view.on_cube_changed(&cube).expect("error writing net");

        let out = String::from_utf8(view.out).expect("net is UTF-8");
        assert!(out.starts_with("Solved cube:\n    WWW\n"));
        assert!(out.contains("\nAfter R':\n"));
    }
}
