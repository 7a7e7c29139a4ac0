//! Core non-UI logic: request dispatch and client-side ordering.

pub mod query;
pub mod sort;

pub use query::{send_query, send_query_if_dirty};
pub use sort::{compare_labels, sorted_characters};
