//! Presentation of match results.
//!
//! - [`highlight`] - lossless plain/match segmentation of the test string
//! - [`detail`] - per-match records with group labels and empty markers

pub mod detail;
pub mod highlight;

pub use detail::{GroupDetail, GroupState, MatchDetail, EMPTY_MARKER};
pub use highlight::{concat as concat_segments, render, HighlightSegment};
