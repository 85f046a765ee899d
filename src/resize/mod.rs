//! Uniform resampling and the padded, centered square resize.

pub(crate) mod padded;
pub(crate) mod resample;
