//! Single-frame PNG and multi-size ICO encoding, plus output sinks.
//!
//! Encoders serialize into memory first; bytes reach the filesystem only through an atomic
//! temp-file-and-rename write, so a failed run never leaves a half-written asset behind.

pub(crate) mod fs;
pub(crate) mod ico;
pub(crate) mod png;
pub(crate) mod sink;
