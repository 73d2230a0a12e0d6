use svgtypes::{TransformListParser, TransformListToken};

use crate::point::Point;
use crate::Error;

/// A stack of cumulative translations.
///
/// Every entry already contains the sum of all entries beneath it, so pushing and
/// popping mirror the recursion of the document walk and [`OffsetStack::value`]
/// is always the offset of the innermost open element.
#[derive(Debug, Default, Clone)]
pub struct OffsetStack {
    entries: Vec<Point>,
}

impl OffsetStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a translation relative to the current offset.
    pub fn push(&mut self, delta: Point) {
        let base = self.entries.last().copied().unwrap_or(Point::ZERO);
        self.entries.push(base + delta);
    }

    /// Push the negated translation. Used for the origin of the view box.
    pub fn push_inverted(&mut self, delta: Point) {
        self.push(-delta);
    }

    /// Remove the innermost translation.
    ///
    /// Popping an empty stack is not fatal: it is logged, `None` is returned and
    /// the stack stays empty.
    pub fn pop(&mut self) -> Option<Point> {
        let popped = self.entries.pop();
        if popped.is_none() {
            log::warn!("offset stack underflow, ignoring pop");
        }
        popped
    }

    /// The current cumulative offset, zero if nothing is pushed.
    pub fn value(&self) -> Point {
        self.entries.last().copied().unwrap_or(Point::ZERO)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The effect of a `transform` attribute on the offset stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Translation {
    /// The transform is a pure translation by this offset.
    Offset(Point),
    /// The transform contains something other than `translate`.
    Unsupported,
}

/// Interpret a `transform` attribute.
///
/// Only lists made of `translate(...)` entries are supported; their offsets add up.
/// A list that can't be tokenized is an error.
pub fn parse_translation(value: &str) -> Result<Translation, Error> {
    let mut offset = Point::ZERO;
    let mut supported = true;

    for token in TransformListParser::from(value) {
        let token = token.map_err(|source| Error::InvalidTransform {
            value: value.to_string(),
            source,
        })?;

        match token {
            TransformListToken::Translate { tx, ty } => offset += Point::new(tx, ty),
            TransformListToken::Matrix { .. }
            | TransformListToken::Scale { .. }
            | TransformListToken::Rotate { .. }
            | TransformListToken::SkewX { .. }
            | TransformListToken::SkewY { .. } => supported = false,
        }
    }

    Ok(if supported { Translation::Offset(offset) } else { Translation::Unsupported })
}
