use roxmltree::Node;

use super::render_node;
use crate::util::context::Context;
use crate::write::Emitter;
use crate::Error;

/// Render all element children of a group, in document order.
pub fn render(group: Node, ctx: &mut Context, emitter: &mut Emitter) -> Result<(), Error> {
    for child in group.children().filter(|n| n.is_element()) {
        render_node(child, ctx, emitter)?;
    }
    Ok(())
}
