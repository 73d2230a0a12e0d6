use std::fmt::Write;

use super::{Instruction, InstructionSink};
use crate::color::Rgb;
use crate::point::{round, Point};

/// Writes the stream as a wxPython `GraphicsContext` script, one statement per line.
///
/// The script expects a `ctx` graphics context in scope. Coordinates are rounded
/// to three fractional digits.
#[derive(Debug, Default, Clone)]
pub struct TextWriter {
    buf: String,
}

impl TextWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn line(&mut self, args: std::fmt::Arguments) {
        // Writing into a `String` can't fail.
        let _ = self.buf.write_fmt(args);
        self.buf.push('\n');
    }
}

impl InstructionSink for TextWriter {
    fn push(&mut self, instruction: Instruction) {
        match instruction {
            // The drawing size is taken from the window.
            Instruction::SetSize(..) => {}
            Instruction::SetFill(color) => {
                self.line(format_args!("ctx.SetBrush(wx.Brush({}))", colour(color)))
            }
            Instruction::SetStroke(None) => self.line(format_args!("ctx.SetPen(wx.TRANSPARENT_PEN)")),
            Instruction::SetStroke(Some(color)) => {
                self.line(format_args!("ctx.SetPen(wx.Pen({}))", colour(color)))
            }
            Instruction::BeginPath => self.line(format_args!("path = ctx.CreatePath()")),
            Instruction::MoveTo(p) => self.line(format_args!("path.MoveToPoint({})", coords(&[p]))),
            Instruction::LineTo(p) => {
                self.line(format_args!("path.AddLineToPoint({})", coords(&[p])))
            }
            Instruction::CubicTo(c1, c2, end) => {
                self.line(format_args!("path.AddCurveToPoint({})", coords(&[c1, c2, end])))
            }
            Instruction::QuadTo(ctrl, end) => {
                self.line(format_args!("path.AddQuadCurveToPoint({})", coords(&[ctrl, end])))
            }
            Instruction::ClosePath => self.line(format_args!("path.CloseSubpath()")),
            Instruction::DrawPath => self.line(format_args!("ctx.DrawPath(path)")),
            Instruction::AddEllipse { center, radius } => self.line(format_args!(
                "path.AddEllipse({}, {})",
                coords(&[center]),
                number(radius)
            )),
        }
    }
}

fn colour(color: Rgb) -> String {
    format!("wx.Colour({}, {}, {})", color.red, color.green, color.blue)
}

fn coords(points: &[Point]) -> String {
    points
        .iter()
        .flat_map(|p| [number(p.x), number(p.y)])
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format like a Python float: always with a fractional part.
fn number(value: f64) -> String {
    format!("{:?}", round(value))
}
