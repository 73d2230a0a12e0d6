use pdf_writer::{Content, Filter, Finish, Pdf, Rect, Ref, TextStr};

use super::{Instruction, InstructionSink};
use crate::point::Point;
use crate::util::helper::deflate;
use crate::Options;

/// Control point distance for approximating a quarter circle with a cubic curve.
const KAPPA: f32 = 0.552_284_8;

/// Renders the stream into a single page PDF.
///
/// Path instructions accumulate into one retained path, the way a
/// `GraphicsContext` path object does. [`Instruction::DrawPath`] fills
/// everything accumulated so far, [`Instruction::BeginPath`] starts over.
pub struct PdfWriter {
    size: (f64, f64),
    stroking: bool,
    path: Vec<Instruction>,
    content: Content,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self {
            size: (0.0, 0.0),
            stroking: false,
            path: Vec::new(),
            content: Content::new(),
        }
    }

    /// Write the PDF file.
    pub fn finish(self, options: &Options) -> Vec<u8> {
        let (width, height) = page_size(self.size);

        let mut content = Content::new();
        // Flip the y axis so that SVG coordinates can be used as-is.
        content.transform([1.0, 0.0, 0.0, -1.0, 0.0, height]);
        let mut data = content.finish();
        data.extend(self.content.finish());

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let page_id = Ref::new(3);
        let content_id = Ref::new(4);
        let document_info_id = Ref::new(5);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id).count(1).kids([page_id]);

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, width, height));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.finish();

        if options.compress {
            let compressed = deflate(&data);
            let mut stream = pdf.stream(content_id, &compressed);
            stream.filter(Filter::FlateDecode);
            stream.finish();
        } else {
            pdf.stream(content_id, &data).finish();
        }

        pdf.document_info(document_info_id).producer(TextStr("svg2ir"));
        pdf.finish()
    }

    fn draw(&mut self) {
        draw_path(&self.path, &mut self.content);
        if self.stroking {
            self.content.fill_nonzero_and_stroke();
        } else {
            self.content.fill_nonzero();
        }
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionSink for PdfWriter {
    fn push(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::SetSize(width, height) => self.size = (width, height),
            Instruction::SetFill(color) => {
                let [r, g, b] = color.to_pdf_color();
                self.content.set_fill_rgb(r, g, b);
            }
            Instruction::SetStroke(Some(color)) => {
                let [r, g, b] = color.to_pdf_color();
                self.content.set_stroke_rgb(r, g, b);
                self.stroking = true;
            }
            Instruction::SetStroke(None) => self.stroking = false,
            Instruction::BeginPath => self.path.clear(),
            Instruction::DrawPath => self.draw(),
            other => self.path.push(other),
        }
    }
}

/// A page can't be empty, so a missing view box results in a 1x1 page.
fn page_size((width, height): (f64, f64)) -> (f32, f32) {
    let clamp = |v: f64| if v > 0.0 { v as f32 } else { 1.0 };
    (clamp(width), clamp(height))
}

/// Write path construction operators for the retained path.
fn draw_path(path: &[Instruction], content: &mut Content) {
    // Taken from resvg
    fn calc(n1: f32, n2: f32) -> f32 {
        (n1 + n2 * 2.0) / 3.0
    }

    let mut p_prev: Option<Point> = None;
    let mut p_start: Option<Point> = None;

    for instruction in path {
        match *instruction {
            Instruction::MoveTo(p) => {
                content.move_to(p.x as f32, p.y as f32);
                p_prev = Some(p);
                p_start = Some(p);
            }
            Instruction::LineTo(p) => {
                content.line_to(p.x as f32, p.y as f32);
                p_prev = Some(p);
            }
            Instruction::QuadTo(p1, p2) => {
                // PDF has no quadratic curves, so they are elevated to cubic ones.
                let prev = p_prev.unwrap_or(p1);
                let (px, py) = (prev.x as f32, prev.y as f32);
                let (x1, y1) = (p1.x as f32, p1.y as f32);
                let (x2, y2) = (p2.x as f32, p2.y as f32);
                content.cubic_to(calc(px, x1), calc(py, y1), calc(x2, x1), calc(y2, y1), x2, y2);
                p_prev = Some(p2);
            }
            Instruction::CubicTo(p1, p2, p3) => {
                content.cubic_to(
                    p1.x as f32,
                    p1.y as f32,
                    p2.x as f32,
                    p2.y as f32,
                    p3.x as f32,
                    p3.y as f32,
                );
                p_prev = Some(p3);
            }
            Instruction::ClosePath => {
                content.close_path();
                p_prev = p_start;
            }
            Instruction::AddEllipse { center, radius } => {
                draw_circle(center, radius, content);
                p_prev = None;
                p_start = None;
            }
            Instruction::SetSize(..)
            | Instruction::SetFill(_)
            | Instruction::SetStroke(_)
            | Instruction::BeginPath
            | Instruction::DrawPath => {}
        }
    }
}

fn draw_circle(center: Point, radius: f64, content: &mut Content) {
    let (cx, cy, r) = (center.x as f32, center.y as f32, radius as f32);
    let k = KAPPA * r;

    content.move_to(cx + r, cy);
    content.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
}
