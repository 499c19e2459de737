// Resume analysis: keyword catalog, field extractors, and the skill matcher.
// Everything except `handlers` is synchronous and free of shared state.

pub mod catalog;
pub mod fields;
pub mod handlers;
pub mod matcher;
