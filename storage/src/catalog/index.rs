//! The relationship index.
//!
//! Seven mappings tie the records of the registry together. The index only stores
//! ids; the records themselves live in [`super::Catalog`].
//!
//! | mapping                 | cardinality                        |
//! |-------------------------|------------------------------------|
//! | artist -> albums        | 1 -> N                             |
//! | album -> songs          | 1 -> N                             |
//! | playlist -> songs       | 1 -> N, fixed when created         |
//! | playlist -> listeners   | 1 -> N, no duplicates              |
//! | user -> created playlist| 1 -> 1, last write wins            |
//! | user -> playlists       | 1 -> N, created and subscribed     |
//! | song -> liking users    | 1 -> N, no duplicates              |
//!
//! Entries are only ever added, never removed.

use std::collections::HashMap;

use chorus_types::{
    album::AlbumId, artist::ArtistId, playlist::PlaylistId, song::SongId, user::UserId,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationIndex {
    artist_albums: HashMap<ArtistId, Vec<AlbumId>>,
    album_songs: HashMap<AlbumId, Vec<SongId>>,
    playlist_songs: HashMap<PlaylistId, Box<[SongId]>>,
    playlist_listeners: HashMap<PlaylistId, Vec<UserId>>,
    creator_playlist: HashMap<UserId, PlaylistId>,
    user_playlists: HashMap<UserId, Vec<PlaylistId>>,
    song_likers: HashMap<SongId, Vec<UserId>>,
}

impl RelationIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    //------------------------------------------------------------------------------------ reads

    #[must_use]
    pub fn albums_of(&self, artist: ArtistId) -> &[AlbumId] {
        self.artist_albums.get(&artist).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn songs_of_album(&self, album: AlbumId) -> &[SongId] {
        self.album_songs.get(&album).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn songs_of_playlist(&self, playlist: PlaylistId) -> &[SongId] {
        self.playlist_songs.get(&playlist).map(|songs| &songs[..]).unwrap_or_default()
    }

    #[must_use]
    pub fn listeners_of(&self, playlist: PlaylistId) -> &[UserId] {
        self.playlist_listeners
            .get(&playlist)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn created_playlist_of(&self, user: UserId) -> Option<PlaylistId> {
        self.creator_playlist.get(&user).copied()
    }

    #[must_use]
    pub fn playlists_of(&self, user: UserId) -> &[PlaylistId] {
        self.user_playlists.get(&user).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn likers_of(&self, song: SongId) -> &[UserId] {
        self.song_likers.get(&song).map(Vec::as_slice).unwrap_or_default()
    }

    /// Is `user` the creator of `playlist`?
    ///
    /// Only the most recent playlist a user created counts.
    #[must_use]
    pub fn is_creator(&self, user: UserId, playlist: PlaylistId) -> bool {
        self.created_playlist_of(user) == Some(playlist)
    }

    #[must_use]
    pub fn is_listener(&self, user: UserId, playlist: PlaylistId) -> bool {
        self.listeners_of(playlist).contains(&user)
    }

    #[must_use]
    pub fn likes(&self, user: UserId, song: SongId) -> bool {
        self.likers_of(song).contains(&user)
    }

    //----------------------------------------------------------------------------------- writes

    pub fn add_album(&mut self, artist: ArtistId, album: AlbumId) {
        self.artist_albums.entry(artist).or_default().push(album);
    }

    pub fn add_song(&mut self, album: AlbumId, song: SongId) {
        self.album_songs.entry(album).or_default().push(song);
    }

    /// Fix the songs of a newly created playlist.
    pub fn set_playlist_songs(&mut self, playlist: PlaylistId, songs: Vec<SongId>) {
        self.playlist_songs.insert(playlist, songs.into_boxed_slice());
    }

    /// Record `user` as the creator of `playlist`, returning the playlist they created before, if any.
    pub fn set_creator(&mut self, user: UserId, playlist: PlaylistId) -> Option<PlaylistId> {
        self.creator_playlist.insert(user, playlist)
    }

    /// Add `user` to the listeners of `playlist`.
    ///
    /// Returns `false` (and changes nothing) if they were already listening.
    pub fn add_listener(&mut self, playlist: PlaylistId, user: UserId) -> bool {
        let listeners = self.playlist_listeners.entry(playlist).or_default();
        if listeners.contains(&user) {
            return false;
        }
        listeners.push(user);
        true
    }

    pub fn add_user_playlist(&mut self, user: UserId, playlist: PlaylistId) {
        self.user_playlists.entry(user).or_default().push(playlist);
    }

    /// Record that `user` likes `song`.
    ///
    /// Returns `false` (and changes nothing) if they already did.
    pub fn add_liker(&mut self, song: SongId, user: UserId) -> bool {
        let likers = self.song_likers.entry(song).or_default();
        if likers.contains(&user) {
            return false;
        }
        likers.push(user);
        true
    }
}
