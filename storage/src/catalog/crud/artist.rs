//! CRUD operations for artists
use log::debug;
use tracing::instrument;

use chorus_types::artist::Artist;

use crate::catalog::Catalog;

impl Catalog {
    /// Register a new artist.
    ///
    /// Names are not checked for uniqueness.
    #[instrument(skip(self))]
    pub fn create_artist(&mut self, name: &str) -> Artist {
        let artist = Artist::new(name);
        debug!("created artist {}", artist.id);
        self.artists.push(artist.clone());
        artist
    }
}
