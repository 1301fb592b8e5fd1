//! Cover image resolution for catalog records.
//!
//! [`build_candidates`] turns a title into an ordered list of image
//! references ending in a seeded placeholder. A [`CoverCursor`] walks that
//! list against a [`CoverTarget`], advancing on every failed load, and
//! [`resolve_cover`] drives it with a [`SourceProbe`] standing in for the
//! host's load events.

pub mod candidates;
pub mod cursor;
pub mod encode;
pub mod error;
pub mod overrides;
pub mod pool;
pub mod probe;

pub use candidates::{
    Candidate, CandidateConfig, CandidateList, CandidateOrigin, CoverRequest, IMAGE_EXTENSIONS,
    PlaceholderSize, RECENT_YEARS, build_candidates, candidate_years, filename_variants,
    generated_paths, placeholder_url,
};
pub use cursor::{CoverCursor, CoverSlot, CoverTarget, CursorState, LoadEvent, ResolutionOutcome};
pub use encode::{decode_uri, encode_uri, is_remote};
pub use error::CoverError;
pub use overrides::{CoverOverrides, MapSource, STATIC_COVER_OVERRIDES, resolve_asset_reference};
pub use pool::{CoverPool, CoverReport};
pub use probe::{FsProbe, HttpProbe, Probe, SourceProbe, resolve_cover};
