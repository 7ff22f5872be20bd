use std::sync::Arc;

use crate::id::record_id;

pub const TABLE_NAME: &str = "artist";

record_id!(
    /// The unique identifier of an [`Artist`].
    ArtistId,
    TABLE_NAME
);

/// This struct holds all the metadata about a particular [`Artist`].
/// An [`Artist`] owns a collection of [`super::album::Album`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artist {
    /// the unique identifier for this [`Artist`].
    pub id: ArtistId,

    /// The [`Artist`]'s name.
    pub name: Arc<str>,

    /// How many like-events have been attributed to this [`Artist`] through its songs.
    pub likes: u64,
}

impl Artist {
    /// Create a new [`Artist`] with a fresh id and no likes.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: ArtistId::generate(),
            name: name.into(),
            likes: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtistBrief {
    pub id: ArtistId,
    pub name: Arc<str>,
    pub likes: u64,
    /// the number of albums this artist has.
    pub albums: usize,
}

impl ArtistBrief {
    #[must_use]
    pub fn new(artist: &Artist, albums: usize) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            likes: artist.likes,
            albums,
        }
    }
}
