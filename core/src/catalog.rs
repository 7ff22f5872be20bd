//! A catalog that can be shared between tasks.
//!
//! Every operation takes the lock once and runs to completion while holding it,
//! so operations from different callers never interleave.
//----------------------------------------------------------------------------------------- std lib
use std::sync::Arc;
//--------------------------------------------------------------------------------- other libraries
use log::info;
use tokio::sync::Mutex;
use tracing::instrument;
//-------------------------------------------------------------------------------- CHORUS libraries
use chorus_storage::Catalog;
use chorus_types::{album::Album, artist::Artist, playlist::Playlist, song::Song, user::User};

use crate::{errors::SerializableCatalogError, state::catalog::CatalogBrief};

#[derive(Clone, Debug, Default)]
pub struct SharedCatalog {
    catalog: Arc<Mutex<Catalog>>,
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
        }
    }
}

impl SharedCatalog {
    /// A handle to a new, empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the catalog while holding the lock.
    ///
    /// Use this for reads that have no dedicated method here.
    pub async fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&*self.catalog.lock().await)
    }

    /// Counts of every kind of record in the catalog.
    #[instrument(skip(self))]
    pub async fn brief(&self) -> CatalogBrief {
        CatalogBrief::from(&*self.catalog.lock().await)
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, name: &str, mobile: &str) -> User {
        self.catalog.lock().await.create_user(name, mobile)
    }

    #[instrument(skip(self))]
    pub async fn create_artist(&self, name: &str) -> Artist {
        self.catalog.lock().await.create_artist(name)
    }

    #[instrument(skip(self))]
    pub async fn create_album(&self, title: &str, artist_name: &str) -> Album {
        self.catalog.lock().await.create_album(title, artist_name)
    }

    /// See [`Catalog::create_song`].
    ///
    /// # Errors
    ///
    /// If no album has the title `album_name`.
    #[instrument(skip(self))]
    pub async fn create_song(
        &self,
        title: &str,
        album_name: &str,
        length: u32,
    ) -> Result<Song, SerializableCatalogError> {
        Ok(self
            .catalog
            .lock()
            .await
            .create_song(title, album_name, length)?)
    }

    /// See [`Catalog::create_playlist_on_length`].
    ///
    /// # Errors
    ///
    /// If no user has this mobile number.
    #[instrument(skip(self))]
    pub async fn create_playlist_on_length(
        &self,
        mobile: &str,
        title: &str,
        length: u32,
    ) -> Result<Playlist, SerializableCatalogError> {
        Ok(self
            .catalog
            .lock()
            .await
            .create_playlist_on_length(mobile, title, length)?)
    }

    /// See [`Catalog::create_playlist_on_name`].
    ///
    /// # Errors
    ///
    /// If no user has this mobile number.
    #[instrument(skip(self, song_titles))]
    pub async fn create_playlist_on_name<S: AsRef<str> + Sync>(
        &self,
        mobile: &str,
        title: &str,
        song_titles: &[S],
    ) -> Result<Playlist, SerializableCatalogError> {
        Ok(self
            .catalog
            .lock()
            .await
            .create_playlist_on_name(mobile, title, song_titles)?)
    }

    /// See [`Catalog::find_playlist`].
    ///
    /// # Errors
    ///
    /// If no user has this mobile number, or no playlist has this title.
    #[instrument(skip(self))]
    pub async fn find_playlist(
        &self,
        mobile: &str,
        playlist_title: &str,
    ) -> Result<Playlist, SerializableCatalogError> {
        Ok(self
            .catalog
            .lock()
            .await
            .find_playlist(mobile, playlist_title)?)
    }

    /// See [`Catalog::like_song`].
    ///
    /// # Errors
    ///
    /// If no song has this title, or no user has this mobile number.
    #[instrument(skip(self))]
    pub async fn like_song(
        &self,
        mobile: &str,
        song_title: &str,
    ) -> Result<Song, SerializableCatalogError> {
        let song = self.catalog.lock().await.like_song(mobile, song_title)?;
        info!("{} now has {} likes", song.title, song.likes);
        Ok(song)
    }

    #[instrument(skip(self))]
    pub async fn most_popular_artist(&self) -> String {
        self.catalog.lock().await.most_popular_artist()
    }

    #[instrument(skip(self))]
    pub async fn most_popular_song(&self) -> String {
        self.catalog.lock().await.most_popular_song()
    }
}
