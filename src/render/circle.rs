use roxmltree::Node;

use crate::point::Point;
use crate::util::context::Context;
use crate::util::helper::NodeExt;
use crate::write::Emitter;
use crate::Error;

/// Render a `<circle>` element. Circles are added to the path as-is and never filled.
pub fn render(node: &Node, ctx: &mut Context, emitter: &mut Emitter) -> Result<(), Error> {
    let center = Point::new(node.number("cx")?, node.number("cy")?);
    let radius = node.number("r")?;

    emitter.add_ellipse(center + ctx.offset(), radius);
    Ok(())
}
