//! CRUD operations for albums
use log::{debug, info};
use tracing::instrument;

use chorus_types::album::Album;

use crate::catalog::Catalog;

impl Catalog {
    /// Create an album released now and file it under the artist named `artist_name`.
    ///
    /// The artist is resolved by exact name (first match). If there is no such
    /// artist, one is created as a side effect, so this call never fails.
    #[instrument(skip(self))]
    pub fn create_album(&mut self, title: &str, artist_name: &str) -> Album {
        let album = Album::new(title);
        self.albums.push(album.clone());

        let artist_id = match self.find_artist_by_name(artist_name) {
            Some(artist) => artist.id,
            None => {
                info!("artist {artist_name:?} does not exist yet, creating it");
                self.create_artist(artist_name).id
            }
        };

        self.index.add_album(artist_id, album.id);
        debug!("created album {} under {artist_id}", album.id);

        album
    }
}
