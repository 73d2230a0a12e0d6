/// Errors that make a conversion fail as a whole.
///
/// Unsupported features are not errors, they end up in the
/// [`Report`](crate::Report) instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to parse SVG document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("invalid viewBox `{value}`")]
    InvalidViewBox { value: String },
    #[error("invalid path data `{data}`: {source}")]
    InvalidPathData {
        data: String,
        #[source]
        source: svgtypes::Error,
    },
    #[error("invalid transform `{value}`: {source}")]
    InvalidTransform {
        value: String,
        #[source]
        source: svgtypes::Error,
    },
    #[error("<{element}> is missing the required attribute `{attribute}`")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },
    #[error("attribute `{attribute}` of <{element}> is not a number: `{value}`")]
    InvalidNumber {
        element: String,
        attribute: &'static str,
        value: String,
    },
}
