//! Core data types shared by every stage of the icon pipeline.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
