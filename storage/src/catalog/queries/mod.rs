//! Read-only queries over the catalog.
//!
//! Nothing in here mutates the catalog; the "most popular" rankings and the
//! relationship walks used by `like_song` and the brief views live here.

pub mod popularity;
pub mod relations;
