//! Source decoding and color parsing.

pub(crate) mod color;
pub(crate) mod decode;
