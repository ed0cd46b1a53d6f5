//! Transform and additive-mode selectors coming from the effect description.

use serde::{Deserialize, Serialize};

/// `animateTransform` type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformType {
    Translate,
    Scale,
    Rotate,
    SkewX,
    SkewY,
    Matrix,
}

/// How an effect's value combines with the underlying one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdditiveMode {
    #[default]
    Base,
    Sum,
    Replace,
    Multiply,
    None,
}
