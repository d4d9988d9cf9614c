//! Turning captured exchanges into HAR entries.
//!
//! [`Canonicalizer::normalize_request`] scrubs and canonicalizes a live
//! request, [`Canonicalizer::normalize_har_request`] does the same for a stored
//! one, and [`Canonicalizer::build_entry`] assembles the entry that gets
//! appended to a fixture.
//!
//! [`Canonicalizer::normalize_request`]: crate::canon::Canonicalizer::normalize_request
//! [`Canonicalizer::normalize_har_request`]: crate::canon::Canonicalizer::normalize_har_request
//! [`Canonicalizer::build_entry`]: crate::canon::Canonicalizer::build_entry

mod build;
mod normalize;

pub use normalize::NormalizedRequest;
