use roxmltree::Node;
use svgtypes::{PathParser, PathSegment};

use crate::point::Point;
use crate::report::{Report, Unsupported};
use crate::util::context::Context;
use crate::util::helper::NodeExt;
use crate::write::Emitter;
use crate::Error;

/// One piece of path geometry in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line {
        start: Point,
        end: Point,
    },
    Cubic {
        start: Point,
        ctrl1: Point,
        ctrl2: Point,
        end: Point,
    },
    Quadratic {
        start: Point,
        ctrl: Point,
        end: Point,
    },
    /// Elliptical arcs are carried along but can't be drawn.
    Arc {
        start: Point,
        end: Point,
        radius: Point,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
    },
}

impl Segment {
    pub fn start(&self) -> Point {
        match *self {
            Segment::Line { start, .. }
            | Segment::Cubic { start, .. }
            | Segment::Quadratic { start, .. }
            | Segment::Arc { start, .. } => start,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Segment::Line { end, .. }
            | Segment::Cubic { end, .. }
            | Segment::Quadratic { end, .. }
            | Segment::Arc { end, .. } => end,
        }
    }

    /// The segment with every coordinate shifted by `offset`.
    pub fn translated(self, offset: Point) -> Segment {
        match self {
            Segment::Line { start, end } => {
                Segment::Line { start: start + offset, end: end + offset }
            }
            Segment::Cubic { start, ctrl1, ctrl2, end } => Segment::Cubic {
                start: start + offset,
                ctrl1: ctrl1 + offset,
                ctrl2: ctrl2 + offset,
                end: end + offset,
            },
            Segment::Quadratic { start, ctrl, end } => Segment::Quadratic {
                start: start + offset,
                ctrl: ctrl + offset,
                end: end + offset,
            },
            Segment::Arc { start, end, radius, rotation, large_arc, sweep } => Segment::Arc {
                start: start + offset,
                end: end + offset,
                radius,
                rotation,
                large_arc,
                sweep,
            },
        }
    }
}

/// Control point of the previous command, for the smooth curve commands.
#[derive(Clone, Copy)]
enum LastControl {
    None,
    Cubic(Point),
    Quadratic(Point),
}

fn resolve(abs: bool, current: Point, x: f64, y: f64) -> Point {
    if abs {
        Point::new(x, y)
    } else {
        current + Point::new(x, y)
    }
}

/// Parse path data into absolute segments, shifted by `offset`.
pub fn translate(data: &str, offset: Point) -> Result<Vec<Segment>, Error> {
    let mut segments = Vec::new();
    let mut current = Point::ZERO;
    let mut subpath_start = Point::ZERO;
    let mut last_control = LastControl::None;

    for token in PathParser::from(data) {
        let token = token.map_err(|source| Error::InvalidPathData {
            data: data.to_string(),
            source,
        })?;

        let mut control = LastControl::None;
        let segment = match token {
            PathSegment::MoveTo { abs, x, y } => {
                current = resolve(abs, current, x, y);
                subpath_start = current;
                None
            }
            PathSegment::LineTo { abs, x, y } => {
                Some(Segment::Line { start: current, end: resolve(abs, current, x, y) })
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { current.x + x };
                Some(Segment::Line { start: current, end: Point::new(x, current.y) })
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { current.y + y };
                Some(Segment::Line { start: current, end: Point::new(current.x, y) })
            }
            PathSegment::CurveTo { abs, x1, y1, x2, y2, x, y } => {
                let ctrl2 = resolve(abs, current, x2, y2);
                control = LastControl::Cubic(ctrl2);
                Some(Segment::Cubic {
                    start: current,
                    ctrl1: resolve(abs, current, x1, y1),
                    ctrl2,
                    end: resolve(abs, current, x, y),
                })
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let ctrl1 = match last_control {
                    LastControl::Cubic(prev) => prev.reflect_around(current),
                    _ => current,
                };
                let ctrl2 = resolve(abs, current, x2, y2);
                control = LastControl::Cubic(ctrl2);
                Some(Segment::Cubic {
                    start: current,
                    ctrl1,
                    ctrl2,
                    end: resolve(abs, current, x, y),
                })
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let ctrl = resolve(abs, current, x1, y1);
                control = LastControl::Quadratic(ctrl);
                Some(Segment::Quadratic { start: current, ctrl, end: resolve(abs, current, x, y) })
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let ctrl = match last_control {
                    LastControl::Quadratic(prev) => prev.reflect_around(current),
                    _ => current,
                };
                control = LastControl::Quadratic(ctrl);
                Some(Segment::Quadratic { start: current, ctrl, end: resolve(abs, current, x, y) })
            }
            PathSegment::EllipticalArc { abs, rx, ry, x_axis_rotation, large_arc, sweep, x, y } => {
                Some(Segment::Arc {
                    start: current,
                    end: resolve(abs, current, x, y),
                    radius: Point::new(rx, ry),
                    rotation: x_axis_rotation,
                    large_arc,
                    sweep,
                })
            }
            PathSegment::ClosePath { .. } => {
                let closing = (current != subpath_start)
                    .then_some(Segment::Line { start: current, end: subpath_start });
                current = subpath_start;
                closing
            }
        };

        last_control = control;
        if let Some(segment) = segment {
            current = segment.end();
            segments.push(segment);
        }
    }

    Ok(segments.into_iter().map(|s| s.translated(offset)).collect())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ClosureState {
    /// No subpath has been started, the next segment needs a move.
    NoSubpath,
    /// A subpath starting at the given point is being drawn.
    OpenSubpath(Point),
    /// The last segment was a line back to the subpath start.
    ClosingMatch,
    /// The last segment was a curve back to the subpath start. Its close is
    /// still pending.
    CurveClosed,
}

/// Turns a segment sequence into path instructions, detecting closed subpaths.
///
/// A straight line that ends where its subpath started is emitted as a close
/// instead of a line. Curves ending at the start are still drawn and closed
/// right before the next subpath starts, or at the end of the sequence.
#[derive(Debug)]
pub struct ClosureDetector {
    state: ClosureState,
}

impl ClosureDetector {
    pub fn new() -> Self {
        Self { state: ClosureState::NoSubpath }
    }

    pub fn feed(&mut self, segment: &Segment, emitter: &mut Emitter, report: &mut Report) {
        match self.state {
            ClosureState::ClosingMatch => self.state = ClosureState::NoSubpath,
            ClosureState::CurveClosed => {
                emitter.close_path();
                self.state = ClosureState::NoSubpath;
            }
            ClosureState::NoSubpath | ClosureState::OpenSubpath(_) => {}
        }

        let closes = matches!(
            self.state,
            ClosureState::OpenSubpath(start) if segment.end().coincides(start)
        );

        if closes && matches!(segment, Segment::Line { .. }) {
            self.state = ClosureState::ClosingMatch;
            emitter.close_path();
            return;
        }

        if self.state == ClosureState::NoSubpath {
            let start = segment.start();
            emitter.move_to(start);
            self.state = ClosureState::OpenSubpath(start);
        }

        match *segment {
            Segment::Line { end, .. } => emitter.line_to(end),
            Segment::Cubic { ctrl1, ctrl2, end, .. } => emitter.cubic_to(ctrl1, ctrl2, end),
            Segment::Quadratic { ctrl, end, .. } => emitter.quad_to(ctrl, end),
            Segment::Arc { radius, .. } => report.unsupported(Unsupported::Arc { radius }),
        }

        if closes {
            self.state = ClosureState::CurveClosed;
        }
    }

    /// Close the path unless the last segment already did.
    pub fn finish(self, emitter: &mut Emitter) {
        if self.state != ClosureState::ClosingMatch {
            emitter.close_path();
        }
    }
}

impl Default for ClosureDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit the path instructions for a sequence of segments.
pub fn emit_segments(segments: &[Segment], emitter: &mut Emitter, report: &mut Report) {
    let mut detector = ClosureDetector::new();
    for segment in segments {
        detector.feed(segment, emitter, report);
    }
    detector.finish(emitter);
}

/// Render a `<path>` element.
pub fn render(node: &Node, ctx: &mut Context, emitter: &mut Emitter) -> Result<(), Error> {
    let fill = ctx.fill_for(node.attribute("class"));
    let segments = translate(node.required("d")?, ctx.offset())?;

    emit_segments(&segments, emitter, &mut ctx.report);
    emitter.draw_filled_path(fill);

    Ok(())
}
