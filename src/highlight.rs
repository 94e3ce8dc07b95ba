//! Highlight fragments supplied by the embedding environment
//!
//! The formatter never computes highlights itself. The embedder hands over
//! the per-field fragments together with a merge function that knows how to
//! weave emphasis markup into a label.

use std::collections::HashMap;

/// Field name → ordered, pre-rendered highlight fragments for the current hit
pub type HighlightMap = HashMap<String, Vec<String>>;

/// Merge capability: returns the label with highlight emphasis applied at the
/// positions indicated by the fragments, order preserved
pub type MergeHighlights<'a> = &'a dyn Fn(&str, &[String]) -> String;
