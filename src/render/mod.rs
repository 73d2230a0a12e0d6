pub mod circle;
pub mod group;
pub mod path;

use roxmltree::{Document, Node};
use svgtypes::NumberListParser;

use crate::point::Point;
use crate::report::{Report, Unsupported};
use crate::style::StyleTable;
use crate::util::context::Context;
use crate::util::helper::NodeExt;
use crate::write::{Emitter, InstructionSink};
use crate::Error;

/// The kinds of elements the renderer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind<'a> {
    Group,
    Path,
    Circle,
    Rect,
    Defs,
    Other(&'a str),
}

impl<'a> Kind<'a> {
    pub fn of(node: Node<'a, '_>) -> Kind<'a> {
        match node.tag_name().name() {
            "g" => Kind::Group,
            "path" => Kind::Path,
            "circle" => Kind::Circle,
            "rect" => Kind::Rect,
            "defs" => Kind::Defs,
            other => Kind::Other(other),
        }
    }
}

/// Walk a document and write its instructions into a sink.
///
/// Only the `<g>` elements directly below the root are visited. A document without
/// any is treated as one big group.
pub fn tree_to_stream(
    document: &Document,
    sink: &mut dyn InstructionSink,
) -> Result<Report, Error> {
    let root = document.root_element();
    let mut ctx = Context::new(StyleTable::from_document(document));
    let mut emitter = Emitter::new(sink);

    let (origin, width, height) = match root.attribute("viewBox") {
        Some(value) => parse_view_box(value)?,
        None => (Point::ZERO, 0.0, 0.0),
    };

    emitter.set_size(width, height);
    ctx.offsets.push_inverted(origin);

    let groups: Vec<Node> = root.children().filter(|n| n.has_tag_name("g")).collect();
    if groups.is_empty() {
        group::render(root, &mut ctx, &mut emitter)?;
    } else {
        for node in root.children().filter(|n| n.is_element()) {
            match Kind::of(node) {
                Kind::Group => render_node(node, &mut ctx, &mut emitter)?,
                Kind::Defs => {}
                _ => log::debug!("skipping <{}> outside of a group", node.element_name()),
            }
        }
    }

    ctx.pop_offset();
    debug_assert!(ctx.offsets.is_empty());

    Ok(ctx.report)
}

/// Parse the four numbers of a `viewBox` into its origin and size.
///
/// Empty and negative sizes are accepted, the backends deal with them.
fn parse_view_box(value: &str) -> Result<(Point, f64, f64), Error> {
    let invalid = || Error::InvalidViewBox { value: value.to_string() };
    let numbers = NumberListParser::from(value)
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| invalid())?;

    match numbers[..] {
        [x, y, width, height] => Ok((Point::new(x, y), width, height)),
        _ => Err(invalid()),
    }
}

/// Render a single element, with its own offset applied.
pub fn render_node(node: Node, ctx: &mut Context, emitter: &mut Emitter) -> Result<(), Error> {
    let kind = Kind::of(node);
    if kind == Kind::Defs {
        return Ok(());
    }

    let pushed = ctx.push_transform(node.attribute("transform"))?;

    let result = match kind {
        Kind::Group => group::render(node, ctx, emitter),
        Kind::Path => path::render(&node, ctx, emitter),
        Kind::Circle => circle::render(&node, ctx, emitter),
        Kind::Rect => {
            ctx.report.unsupported(Unsupported::Rectangle);
            Ok(())
        }
        Kind::Defs => Ok(()),
        Kind::Other(name) => {
            ctx.report.unsupported(Unsupported::Element(name.to_string()));
            Ok(())
        }
    };

    if pushed {
        ctx.pop_offset();
    }

    result
}
