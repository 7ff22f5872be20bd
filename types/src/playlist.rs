use std::sync::Arc;

use crate::id::record_id;

pub const TABLE_NAME: &str = "playlist";

record_id!(
    /// The unique identifier of a [`Playlist`].
    PlaylistId,
    TABLE_NAME
);

/// This struct holds all the metadata about a particular [`Playlist`].
/// A [`Playlist`] is a fixed collection of [`super::song::Song`]s chosen when it is created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playlist {
    /// the unique identifier for this [`Playlist`].
    pub id: PlaylistId,

    /// The [`Playlist`]'s title.
    pub title: Arc<str>,
}

impl Playlist {
    #[must_use]
    pub fn new(title: impl Into<Arc<str>>) -> Self {
        Self {
            id: PlaylistId::generate(),
            title: title.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaylistBrief {
    pub id: PlaylistId,
    pub title: Arc<str>,
    pub songs: usize,
    pub listeners: usize,
}

impl PlaylistBrief {
    #[must_use]
    pub fn new(playlist: &Playlist, songs: usize, listeners: usize) -> Self {
        Self {
            id: playlist.id,
            title: playlist.title.clone(),
            songs,
            listeners,
        }
    }
}
