use serde::{Deserialize, Serialize};

use chorus_storage::Catalog;

/// A brief representation of the catalog
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogBrief {
    pub users: usize,
    pub artists: usize,
    pub albums: usize,
    pub songs: usize,
    pub playlists: usize,
}

impl From<&Catalog> for CatalogBrief {
    fn from(catalog: &Catalog) -> Self {
        Self {
            users: catalog.users().len(),
            artists: catalog.artists().len(),
            albums: catalog.albums().len(),
            songs: catalog.songs().len(),
            playlists: catalog.playlists().len(),
        }
    }
}

impl std::fmt::Display for CatalogBrief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} users, {} artists, {} albums, {} songs, {} playlists",
            self.users, self.artists, self.albums, self.songs, self.playlists
        )
    }
}
