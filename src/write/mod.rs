//! The instruction stream and the sinks that consume it.

pub mod pdf;
pub mod text;

use crate::color::Rgb;
use crate::point::Point;

/// A single drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Size of the drawing (view box width and height).
    SetSize(f64, f64),
    /// Set the fill color used by [`Instruction::DrawPath`].
    SetFill(Rgb),
    /// Set the stroke color, `None` disables stroking.
    SetStroke(Option<Rgb>),
    /// Create the path object all following path instructions add to.
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    /// Cubic curve with two control points and an end point.
    CubicTo(Point, Point, Point),
    /// Quadratic curve with one control point and an end point.
    QuadTo(Point, Point),
    /// Close the current subpath.
    ClosePath,
    /// Fill (and stroke) everything added to the path so far.
    DrawPath,
    /// Add a circle to the path.
    AddEllipse { center: Point, radius: f64 },
}

impl Instruction {
    /// Whether this instruction adds geometry to the path object.
    pub fn builds_path(&self) -> bool {
        matches!(
            self,
            Instruction::MoveTo(_)
                | Instruction::LineTo(_)
                | Instruction::CubicTo(..)
                | Instruction::QuadTo(..)
                | Instruction::ClosePath
                | Instruction::AddEllipse { .. }
        )
    }
}

/// Anything that can consume an instruction stream.
pub trait InstructionSink {
    fn push(&mut self, instruction: Instruction);
}

impl InstructionSink for Vec<Instruction> {
    fn push(&mut self, instruction: Instruction) {
        Vec::push(self, instruction);
    }
}

/// Front-end used by the renderer to feed a sink.
///
/// It takes care of emitting exactly one [`Instruction::BeginPath`] right before
/// the first path building instruction.
pub struct Emitter<'a> {
    sink: &'a mut dyn InstructionSink,
    has_path: bool,
}

impl<'a> Emitter<'a> {
    pub fn new(sink: &'a mut dyn InstructionSink) -> Self {
        Self { sink, has_path: false }
    }

    fn emit(&mut self, instruction: Instruction) {
        if instruction.builds_path() && !self.has_path {
            self.has_path = true;
            self.sink.push(Instruction::BeginPath);
        }
        self.sink.push(instruction);
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.emit(Instruction::SetSize(width, height));
    }

    pub fn set_fill_color(&mut self, color: Rgb) {
        self.emit(Instruction::SetFill(color));
    }

    pub fn set_stroke_color(&mut self, color: Option<Rgb>) {
        self.emit(Instruction::SetStroke(color));
    }

    pub fn add_ellipse(&mut self, center: Point, radius: f64) {
        self.emit(Instruction::AddEllipse { center, radius });
    }

    pub fn move_to(&mut self, point: Point) {
        self.emit(Instruction::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.emit(Instruction::LineTo(point));
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, end: Point) {
        self.emit(Instruction::CubicTo(ctrl1, ctrl2, end));
    }

    pub fn quad_to(&mut self, ctrl: Point, end: Point) {
        self.emit(Instruction::QuadTo(ctrl, end));
    }

    pub fn close_path(&mut self) {
        self.emit(Instruction::ClosePath);
    }

    /// Draw the path with the given fill. Without a fill, nothing is emitted.
    pub fn draw_filled_path(&mut self, fill: Option<Rgb>) {
        let Some(color) = fill else {
            return;
        };
        self.set_stroke_color(None);
        self.set_fill_color(color);
        self.emit(Instruction::DrawPath);
    }
}
