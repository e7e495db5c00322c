//! Adapter for the public Nasdaq historical-quotes endpoint.

mod provider;
pub mod response;

pub use provider::NasdaqProvider;
