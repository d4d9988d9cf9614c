pub mod canon;
pub mod capture;
pub mod config;
pub mod entry;
pub mod error;
pub mod har;
pub mod logging;

pub use canon::Canonicalizer;
pub use capture::{CapturedResponse, RawRequest, RawResponse};
pub use error::{HarfixError, Result};
