/*! Convert SVG files into streams of drawing instructions.

The converter walks a small subset of SVG (groups, paths and circles styled through
classes of an embedded style sheet) and flattens it into an ordered list of
[`Instruction`]s for an immediate-mode 2D drawing API. Groups and elements may only
be moved around with `translate(...)`; their offsets are accumulated and applied to
every point before it is emitted.

Two backends are provided: [`TextWriter`] writes a wxPython `GraphicsContext`
script and [`PdfWriter`] renders a single page PDF. Any other backend can
implement [`InstructionSink`].

Features outside the supported subset (rectangles, elliptical arcs, transforms
other than translations, unknown elements) don't fail the conversion. They are
skipped, logged and recorded in the returned [`Report`].

# Example
```
let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20">
    <defs><style>.a { fill: rgb(255, 0, 0) }</style></defs>
    <g transform="translate(5 5)">
        <path class="a" d="M 0 0 L 10 0 L 10 10 Z"/>
    </g>
</svg>"#;

let (script, report) = svg2ir::to_text(svg).unwrap();
assert!(script.contains("path.MoveToPoint(5.0, 5.0)"));
assert!(report.is_clean());
```
*/

mod color;
mod error;
mod point;
mod render;
mod report;
mod style;
mod transform;
mod util;
mod write;

pub use color::Rgb;
pub use error::Error;
pub use point::Point;
pub use render::path::{emit_segments, translate, ClosureDetector, Segment};
pub use report::{Report, Unsupported};
pub use style::{StyleRule, StyleTable};
pub use transform::{parse_translation, OffsetStack, Translation};
pub use write::pdf::PdfWriter;
pub use write::text::TextWriter;
pub use write::{Emitter, Instruction, InstructionSink};

/// Options for the PDF backend.
#[derive(Copy, Clone, Debug)]
pub struct Options {
    /// Whether the content stream should be compressed.
    ///
    /// Uncompressed files are easier to inspect when debugging a conversion.
    ///
    /// _Default:_ `true`.
    pub compress: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { compress: true }
    }
}

/// Convert an SVG string, writing the instructions into `sink`.
pub fn convert(svg: &str, sink: &mut dyn InstructionSink) -> Result<Report, Error> {
    let document = roxmltree::Document::parse(svg)?;
    convert_document(&document, sink)
}

/// Convert an already parsed document, writing the instructions into `sink`.
pub fn convert_document(
    document: &roxmltree::Document,
    sink: &mut dyn InstructionSink,
) -> Result<Report, Error> {
    render::tree_to_stream(document, sink)
}

/// Convert an SVG string into a list of instructions.
pub fn to_instructions(svg: &str) -> Result<(Vec<Instruction>, Report), Error> {
    let mut instructions = Vec::new();
    let report = convert(svg, &mut instructions)?;
    Ok((instructions, report))
}

/// Convert an SVG string into a wxPython `GraphicsContext` script.
pub fn to_text(svg: &str) -> Result<(String, Report), Error> {
    let mut writer = TextWriter::new();
    let report = convert(svg, &mut writer)?;
    Ok((writer.finish(), report))
}

/// Convert an SVG string into a single page PDF.
pub fn to_pdf(svg: &str, options: Options) -> Result<(Vec<u8>, Report), Error> {
    let mut writer = PdfWriter::new();
    let report = convert(svg, &mut writer)?;
    Ok((writer.finish(&options), report))
}
