//! Popularity rankings.
//!
//! A ranking scans its collection in creation order and only replaces the current
//! leader with a record that has strictly more likes, so ties go to the record
//! created first. A record with zero likes still wins over an empty collection.

use tracing::instrument;

use crate::catalog::Catalog;

impl Catalog {
    /// The name of the artist with the most likes, or an empty string if there are no artists.
    #[must_use]
    #[instrument(skip(self))]
    pub fn most_popular_artist(&self) -> String {
        self.artists
            .iter()
            .reduce(|best, artist| if artist.likes > best.likes { artist } else { best })
            .map(|artist| artist.name.to_string())
            .unwrap_or_default()
    }

    /// The title of the song with the most likes, or an empty string if there are no songs.
    #[must_use]
    #[instrument(skip(self))]
    pub fn most_popular_song(&self) -> String {
        self.songs
            .iter()
            .reduce(|best, song| if song.likes > best.likes { song } else { best })
            .map(|song| song.title.to_string())
            .unwrap_or_default()
    }
}
