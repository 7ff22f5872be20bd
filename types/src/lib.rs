#![allow(clippy::module_name_repetitions)]
//! The records that make up a chorus catalog.
//!
//! Records only hold their own fields. How they relate to each other (which
//! albums belong to which artist, who listens to which playlist, ...) is tracked
//! separately by the relationship index in `chorus-storage`.

pub mod album;
pub mod artist;
pub mod id;
pub mod playlist;
pub mod song;
pub mod user;
