use crate::point::Point;
use crate::report::{Report, Unsupported};
use crate::style::StyleTable;
use crate::transform::{parse_translation, OffsetStack, Translation};
use crate::Error;

/// State of one conversion, threaded through the document walk.
pub struct Context {
    pub offsets: OffsetStack,
    pub styles: StyleTable,
    pub report: Report,
}

impl Context {
    /// Create a new context.
    pub fn new(styles: StyleTable) -> Self {
        Self { offsets: OffsetStack::new(), styles, report: Report::default() }
    }

    /// The current cumulative offset.
    pub fn offset(&self) -> Point {
        self.offsets.value()
    }

    /// Push the offset of a `transform` attribute.
    ///
    /// Returns whether something was pushed: unsupported transforms are reported
    /// and have no effect.
    pub fn push_transform(&mut self, transform: Option<&str>) -> Result<bool, Error> {
        let Some(transform) = transform else {
            return Ok(false);
        };

        match parse_translation(transform)? {
            Translation::Offset(delta) => {
                self.offsets.push(delta);
                Ok(true)
            }
            Translation::Unsupported => {
                self.report.unsupported(Unsupported::Transform(transform.to_string()));
                Ok(false)
            }
        }
    }

    /// Pop an offset, counting underflows.
    pub fn pop_offset(&mut self) {
        if self.offsets.pop().is_none() {
            self.report.stack_underflows += 1;
        }
    }

    /// The fill of a whitespace separated class list.
    pub fn fill_for(&self, class: Option<&str>) -> Option<crate::Rgb> {
        class?.split_whitespace().find_map(|name| self.styles.resolve(name))
    }
}
