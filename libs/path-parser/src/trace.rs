//! # Path Tracing
//!
//! Walks decoded commands with an explicit pen state and emits polylines.
//! Relative commands are resolved against the current point, cubic curves
//! are flattened, and close commands return to the sub-path start.

use crate::bezier::flatten_cubic;
use crate::command::Command;
use crate::polyline::Polyline;
use glam::DVec2;

/// Pen state threaded through the commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Pen {
    current: DVec2,
    subpath_start: DVec2,
}

/// Trace `commands` into one polyline per sub-path.
///
/// A new sub-path starts at every move command; points emitted before the
/// first move belong to an initial sub-path. Empty sub-paths are dropped.
/// Concatenating the result in order gives the single-polyline output.
///
/// ## Example
///
/// ```rust
/// use glam::DVec2;
/// use svg_path_parser::{trace, Command};
///
/// let commands = [
///     Command::MoveAbsolute(DVec2::ZERO),
///     Command::LineRelative(DVec2::new(2.0, 0.0)),
///     Command::MoveAbsolute(DVec2::new(5.0, 5.0)),
///     Command::HLineRelative(1.0),
/// ];
/// let subpaths = trace(&commands, 5);
/// assert_eq!(subpaths.len(), 2);
/// assert_eq!(subpaths[1].points(), &[DVec2::new(5.0, 5.0), DVec2::new(6.0, 5.0)]);
/// ```
pub fn trace(commands: &[Command], curve_segments: u32) -> Vec<Polyline> {
    let mut pen = Pen::default();
    let mut subpaths = Vec::new();
    let mut line = Polyline::new();

    for command in commands {
        if command.is_move() && !line.is_empty() {
            subpaths.push(std::mem::take(&mut line));
        }

        match *command {
            Command::MoveAbsolute(to) => {
                pen.current = to;
                pen.subpath_start = pen.current;
                line.push(pen.current);
            }
            Command::MoveRelative(by) => {
                pen.current += by;
                pen.subpath_start = pen.current;
                line.push(pen.current);
            }
            Command::LineAbsolute(to) => {
                pen.current = to;
                line.push(pen.current);
            }
            Command::LineRelative(by) => {
                pen.current += by;
                line.push(pen.current);
            }
            Command::HLineAbsolute(x) => {
                pen.current.x = x;
                line.push(pen.current);
            }
            Command::HLineRelative(dx) => {
                pen.current.x += dx;
                line.push(pen.current);
            }
            Command::VLineAbsolute(y) => {
                pen.current.y = y;
                line.push(pen.current);
            }
            Command::VLineRelative(dy) => {
                pen.current.y += dy;
                line.push(pen.current);
            }
            Command::CubicAbsolute {
                control1,
                control2,
                end,
            } => {
                cubic(&mut pen, &mut line, control1, control2, end, curve_segments);
            }
            Command::CubicRelative {
                control1,
                control2,
                end,
            } => {
                let origin = pen.current;
                cubic(
                    &mut pen,
                    &mut line,
                    origin + control1,
                    origin + control2,
                    origin + end,
                    curve_segments,
                );
            }
            Command::Close => {
                // exact comparison: only an explicit return to the start suppresses the duplicate
                if pen.current != pen.subpath_start {
                    line.push(pen.subpath_start);
                }
                pen.current = pen.subpath_start;
            }
        }
    }

    if !line.is_empty() {
        subpaths.push(line);
    }
    subpaths
}

fn cubic(
    pen: &mut Pen,
    line: &mut Polyline,
    control1: DVec2,
    control2: DVec2,
    end: DVec2,
    segments: u32,
) {
    let samples = flatten_cubic(pen.current, control1, control2, end, segments);
    for point in samples.into_iter().skip(1) {
        line.push(point);
    }
    pen.current = end;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_appends_start_once() {
        let commands = [
            Command::MoveAbsolute(DVec2::new(1.0, 1.0)),
            Command::LineAbsolute(DVec2::new(2.0, 1.0)),
            Command::Close,
            Command::Close,
        ];
        let subpaths = trace(&commands, 5);
        assert_eq!(
            subpaths[0].points(),
            &[DVec2::new(1.0, 1.0), DVec2::new(2.0, 1.0), DVec2::new(1.0, 1.0)]
        );
    }

    #[test]
    fn test_close_without_move_returns_to_origin() {
        let commands = [Command::LineAbsolute(DVec2::new(3.0, 0.0)), Command::Close];
        let subpaths = trace(&commands, 5);
        assert_eq!(subpaths[0].points(), &[DVec2::new(3.0, 0.0), DVec2::ZERO]);
    }

    #[test]
    fn test_relative_move_after_close_uses_subpath_start() {
        let commands = [
            Command::MoveAbsolute(DVec2::new(10.0, 10.0)),
            Command::LineRelative(DVec2::new(5.0, 0.0)),
            Command::Close,
            Command::MoveRelative(DVec2::new(1.0, 1.0)),
        ];
        let subpaths = trace(&commands, 5);
        assert_eq!(subpaths.len(), 2);
        assert_eq!(subpaths[1].points(), &[DVec2::new(11.0, 11.0)]);
    }

    #[test]
    fn test_cubic_skips_first_sample() {
        let commands = [
            Command::MoveAbsolute(DVec2::ZERO),
            Command::CubicRelative {
                control1: DVec2::new(1.0, 1.0),
                control2: DVec2::new(2.0, 1.0),
                end: DVec2::new(3.0, 0.0),
            },
        ];
        let subpaths = trace(&commands, 5);
        // move point + 5 curve samples
        assert_eq!(subpaths[0].len(), 6);
        assert_eq!(subpaths[0].last(), Some(DVec2::new(3.0, 0.0)));
    }

    #[test]
    fn test_curve_segments_option() {
        let commands = [
            Command::MoveAbsolute(DVec2::ZERO),
            Command::CubicAbsolute {
                control1: DVec2::Y,
                control2: DVec2::ONE,
                end: DVec2::X,
            },
        ];
        assert_eq!(trace(&commands, 12)[0].len(), 13);
    }

    #[test]
    fn test_no_commands() {
        assert!(trace(&[], 5).is_empty());
    }
}
