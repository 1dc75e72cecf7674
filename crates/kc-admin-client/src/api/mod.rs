//! Endpoint wrappers over the dispatch layer, grouped by admin area.
//!
//! Each wrapper names its verb, path template and parameters and leaves
//! everything else to [`AdminClient`](crate::AdminClient)'s verb methods.

mod authentication;
mod clients;
mod users;
