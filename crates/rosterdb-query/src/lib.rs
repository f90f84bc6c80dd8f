#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! rosterdb-query
//!
//! The record query pipeline: normalize, fuzzy-match, filter, sort and
//! paginate a borrowed snapshot of student records. Every function here is
//! pure; nothing holds state between calls.

pub mod filter;
pub mod fuzzy;
pub mod normalize;
pub mod paginate;
pub mod pipeline;
pub mod sort;
pub mod summary;

pub use fuzzy::{FallbackPolicy, FuzzyMatcher};
pub use normalize::normalize;
pub use paginate::{page_markers, paginate, Page, PageMarker};
pub use pipeline::{run_query, QueryPipeline};
pub use summary::{summarize, RosterSummary};
