use std::fmt::{self, Display, Formatter};

use crate::point::Point;

/// A feature that was skipped during conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Unsupported {
    /// A `transform` that is not a pure translation. It was treated as no offset.
    Transform(String),
    /// An elliptical arc segment. It was left out of the path.
    Arc { radius: Point },
    /// A `<rect>` element.
    Rectangle,
    /// An element of an unknown kind.
    Element(String),
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Unsupported::Transform(value) => write!(f, "unsupported transform `{value}`"),
            Unsupported::Arc { radius } => {
                write!(f, "unsupported arc segment with radius ({}, {})", radius.x, radius.y)
            }
            Unsupported::Rectangle => write!(f, "unsupported <rect> element"),
            Unsupported::Element(name) => write!(f, "unknown element <{name}>"),
        }
    }
}

/// Everything a conversion recovered from instead of failing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    /// Skipped features, in document order.
    pub unsupported: Vec<Unsupported>,
    /// How often the offset stack was popped while empty.
    pub stack_underflows: usize,
}

impl Report {
    /// Whether the conversion was lossless.
    pub fn is_clean(&self) -> bool {
        self.unsupported.is_empty() && self.stack_underflows == 0
    }

    /// Number of skipped arc segments.
    pub fn arcs(&self) -> usize {
        self.unsupported
            .iter()
            .filter(|u| matches!(u, Unsupported::Arc { .. }))
            .count()
    }

    pub(crate) fn unsupported(&mut self, feature: Unsupported) {
        match &feature {
            Unsupported::Rectangle => log::info!("ignored rect"),
            other => log::warn!("{other}"),
        }
        self.unsupported.push(feature);
    }
}
