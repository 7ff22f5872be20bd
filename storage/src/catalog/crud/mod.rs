//! Operations that add records to the catalog, or relationships between them.
//!
//! Every operation that can fail looks up everything it needs before it writes
//! anything, so an `Err` always leaves the catalog untouched.

mod album;
mod artist;
mod playlist;
mod song;
mod user;
