//! Small helpers shared across the stock history workspace.

pub mod env;
