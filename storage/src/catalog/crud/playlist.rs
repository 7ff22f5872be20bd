//! CRUD operations for playlists
use log::debug;
use tracing::instrument;

use chorus_types::{
    playlist::Playlist,
    song::SongId,
    user::UserId,
};

use crate::{catalog::Catalog, errors::Error};

impl Catalog {
    /// Create a playlist of every song whose length is exactly `length` seconds.
    ///
    /// A length no song has is not an error: the playlist is created empty.
    ///
    /// # Errors
    ///
    /// [`Error::UserNotFound`] if no user has this mobile number.
    #[instrument(skip(self))]
    pub fn create_playlist_on_length(
        &mut self,
        mobile: &str,
        title: &str,
        length: u32,
    ) -> Result<Playlist, Error> {
        let creator = self
            .find_user_by_mobile(mobile)
            .ok_or(Error::UserNotFound)?
            .id;

        let songs = self
            .songs
            .iter()
            .filter(|song| song.length == length)
            .map(|song| song.id)
            .collect();

        Ok(self.register_playlist(creator, Playlist::new(title), songs))
    }

    /// Create a playlist from a list of song titles.
    ///
    /// Each title contributes the first song with exactly that title; titles that
    /// match nothing are skipped. Repeated titles, or titles that resolve to the
    /// same song, each contribute their own entry.
    ///
    /// # Errors
    ///
    /// [`Error::UserNotFound`] if no user has this mobile number.
    #[instrument(skip(self, song_titles), fields(titles = song_titles.len()))]
    pub fn create_playlist_on_name<S: AsRef<str>>(
        &mut self,
        mobile: &str,
        title: &str,
        song_titles: &[S],
    ) -> Result<Playlist, Error> {
        let creator = self
            .find_user_by_mobile(mobile)
            .ok_or(Error::UserNotFound)?
            .id;

        let songs = song_titles
            .iter()
            .filter_map(|song_title| self.find_song_by_title(song_title.as_ref()))
            .map(|song| song.id)
            .collect();

        Ok(self.register_playlist(creator, Playlist::new(title), songs))
    }

    /// Look up the playlist titled `playlist_title` on behalf of a user, subscribing them to it.
    ///
    /// The first lookup by a user who is neither the playlist's creator nor already
    /// a listener adds them to its listeners and the playlist to their playlists.
    /// Every other lookup leaves the catalog as it was.
    ///
    /// # Errors
    ///
    /// [`Error::UserDoesNotExist`] if no user has this mobile number, checked first,
    /// then [`Error::PlaylistNotFound`] if no playlist has that title.
    #[instrument(skip(self))]
    pub fn find_playlist(&mut self, mobile: &str, playlist_title: &str) -> Result<Playlist, Error> {
        let user = self
            .find_user_by_mobile(mobile)
            .ok_or(Error::UserDoesNotExist)?
            .id;
        let playlist = self
            .find_playlist_by_title(playlist_title)
            .ok_or(Error::PlaylistNotFound)?
            .clone();

        if self.index.is_creator(user, playlist.id) || self.index.is_listener(user, playlist.id) {
            return Ok(playlist);
        }

        self.index.add_listener(playlist.id, user);
        self.index.add_user_playlist(user, playlist.id);
        debug!("{user} subscribed to {}", playlist.id);

        Ok(playlist)
    }

    /// Add a freshly created playlist to the catalog, with `creator` as its creator and only listener.
    fn register_playlist(
        &mut self,
        creator: UserId,
        playlist: Playlist,
        songs: Vec<SongId>,
    ) -> Playlist {
        debug!(
            "{creator} created {} with {} songs",
            playlist.id,
            songs.len()
        );

        self.index.set_playlist_songs(playlist.id, songs);
        if let Some(previous) = self.index.set_creator(creator, playlist.id) {
            debug!("{creator} is no longer recorded as the creator of {previous}");
        }
        self.index.add_listener(playlist.id, creator);
        self.index.add_user_playlist(creator, playlist.id);
        self.playlists.push(playlist.clone());

        playlist
    }
}
