use std::str::FromStr;

use roxmltree::Node;

use crate::Error;

/// Extension trait for reading typed attributes from document nodes.
pub trait NodeExt {
    /// The local tag name.
    fn element_name(&self) -> &str;

    /// A required attribute.
    fn required(&self, attribute: &'static str) -> Result<&str, Error>;

    /// A required numeric attribute.
    fn number(&self, attribute: &'static str) -> Result<f64, Error>;
}

impl NodeExt for Node<'_, '_> {
    fn element_name(&self) -> &str {
        self.tag_name().name()
    }

    fn required(&self, attribute: &'static str) -> Result<&str, Error> {
        self.attribute(attribute).ok_or_else(|| Error::MissingAttribute {
            element: self.element_name().to_string(),
            attribute,
        })
    }

    fn number(&self, attribute: &'static str) -> Result<f64, Error> {
        let value = self.required(attribute)?;
        svgtypes::Number::from_str(value)
            .map(|n| n.0)
            .map_err(|_| Error::InvalidNumber {
                element: self.element_name().to_string(),
                attribute,
                value: value.to_string(),
            })
    }
}

/// Compress data using the deflate algorithm.
pub fn deflate(data: &[u8]) -> Vec<u8> {
    const COMPRESSION_LEVEL: u8 = 6;
    miniz_oxide::deflate::compress_to_vec_zlib(data, COMPRESSION_LEVEL)
}
