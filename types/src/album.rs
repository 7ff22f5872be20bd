use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::id::record_id;

pub const TABLE_NAME: &str = "album";

record_id!(
    /// The unique identifier of an [`Album`].
    AlbumId,
    TABLE_NAME
);

/// This struct holds all the metadata about a particular [`Album`].
/// An [`Album`] is a collection of [`super::song::Song`]s owned by an [`super::artist::Artist`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Album {
    /// The unique identifier for this [`Album`].
    pub id: AlbumId,
    /// Title of the [`Album`].
    pub title: Arc<str>,
    /// When this [`Album`] was released (added to the catalog).
    pub release: DateTime<Utc>,
}

impl Album {
    /// Create a new [`Album`] released now.
    #[must_use]
    pub fn new(title: impl Into<Arc<str>>) -> Self {
        Self {
            id: AlbumId::generate(),
            title: title.into(),
            release: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumBrief {
    pub id: AlbumId,
    pub title: Arc<str>,
    pub release: DateTime<Utc>,
    /// Name of the owning artist, if one could be resolved.
    pub artist: Option<Arc<str>>,
    pub song_count: usize,
}

impl AlbumBrief {
    #[must_use]
    pub fn new(album: &Album, artist: Option<Arc<str>>, song_count: usize) -> Self {
        Self {
            id: album.id,
            title: album.title.clone(),
            release: album.release,
            artist,
            song_count,
        }
    }
}
