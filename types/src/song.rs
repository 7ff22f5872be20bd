use std::sync::Arc;

use crate::id::record_id;

pub const TABLE_NAME: &str = "song";

record_id!(
    /// The unique identifier of a [`Song`].
    SongId,
    TABLE_NAME
);

/// This struct holds all the metadata about a particular [`Song`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Song {
    /// The unique identifier for this [`Song`].
    pub id: SongId,
    /// Title of the [`Song`].
    pub title: Arc<str>,
    /// Length of the [`Song`], in seconds.
    pub length: u32,
    /// How many distinct users like this [`Song`].
    pub likes: u64,
}

impl Song {
    #[must_use]
    pub fn new(title: impl Into<Arc<str>>, length: u32) -> Self {
        Self {
            id: SongId::generate(),
            title: title.into(),
            length,
            likes: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SongBrief {
    pub id: SongId,
    pub title: Arc<str>,
    pub length: u32,
    pub likes: u64,
    /// Title of the album the song was created against, if one could be resolved.
    pub album: Option<Arc<str>>,
}

impl SongBrief {
    #[must_use]
    pub fn new(song: &Song, album: Option<Arc<str>>) -> Self {
        Self {
            id: song.id,
            title: song.title.clone(),
            length: song.length,
            likes: song.likes,
            album,
        }
    }
}

impl From<&Song> for SongBrief {
    fn from(song: &Song) -> Self {
        Self::new(song, None)
    }
}
