//! Error type for adapter construction and lifecycle misuse.

use slidefx_api_core::ValueCategory;

use crate::transform::TransformType;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AnimationError {
    /// Name does not map to any animatable attribute.
    #[error("unknown animation attribute {name:?}")]
    UnknownAttribute { name: String },

    /// Attribute requested through the factory of another value category.
    #[error("attribute {attribute:?} is a {actual:?} attribute, requested as {expected:?}")]
    CategoryMismatch {
        attribute: String,
        expected: ValueCategory,
        actual: ValueCategory,
    },

    #[error("transform type {0:?} cannot drive a pair animation")]
    UnsupportedTransform(TransformType),

    #[error("failed to parse motion path {path:?}: {reason}")]
    PathParse { path: String, reason: String },

    #[error("motion path must consist of exactly one sub-path, found {count}")]
    PathSubpathCount { count: usize },

    #[error("{animation}: no shape manager supplied")]
    MissingShapeManager { animation: &'static str },

    #[error("physics animation requires a physics world")]
    MissingPhysicsWorld,

    #[error("reference size for {what} must be finite and non-zero")]
    InvalidReferenceSize { what: String },

    #[error("{animation}: already started")]
    AlreadyStarted { animation: &'static str },

    #[error("{animation}: not started")]
    NotStarted { animation: &'static str },
}
