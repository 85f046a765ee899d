//! Pixel compositing.

pub(crate) mod composite;
