//! # Location Search
//!
//! Client-side aggregation over the location search proxy.
//!
//! A free-text query goes through one pipeline per call:
//! cache check -> proxy call -> normalize -> region filter -> cache write.
//!
//! The proxy relays the upstream provider's raw JSON; this crate owns
//! turning that payload into [`Suggestion`] values and deciding which of
//! them plausibly belong to the target region.
//!
//! The public entry point never fails: any transport or decoding error
//! collapses to an empty suggestion list, so a UI consuming this crate
//! renders "no locations found" instead of an error state.

pub mod cache;
pub mod geo;
pub mod normalize;
pub mod search;
pub mod suggestion;

pub use cache::{MemoryStore, SearchCache, SessionStore};
pub use geo::BoundingBox;
pub use search::{NearCenter, SearchOptions, SearchService};
pub use suggestion::{Source, Suggestion};
