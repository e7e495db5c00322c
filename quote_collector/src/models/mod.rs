//! Data types flowing through the collection pipeline.

pub mod bar;
pub mod raw;
