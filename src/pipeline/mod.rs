//! Asset manifest and the decode-once, resize-per-asset orchestration.

pub(crate) mod generate;
pub(crate) mod manifest;
