//! The catalog: an entity registry plus the relationship index that links its records.
//!
//! The registry is five append-only collections kept in creation order. Every
//! lookup by name, title or mobile number is a linear scan that returns the
//! *first* match, so when duplicates exist the oldest record wins.
//!
//! [`Catalog`] is a plain single-threaded value; wrap it in a lock (see
//! `chorus_core::SharedCatalog`) to share it between callers.

pub mod crud;
pub mod index;
pub mod queries;

use chorus_types::{
    album::{Album, AlbumId},
    artist::{Artist, ArtistId},
    playlist::{Playlist, PlaylistId},
    song::{Song, SongId},
    user::{User, UserId},
};

pub use index::RelationIndex;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    users: Vec<User>,
    artists: Vec<Artist>,
    albums: Vec<Album>,
    songs: Vec<Song>,
    playlists: Vec<Playlist>,
    index: RelationIndex,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    //---------------------------------------------------------------------------------- registry

    /// Every user, in creation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Every artist, in creation order.
    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Every album, in creation order.
    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// Every song, in creation order.
    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Every playlist, in creation order.
    #[must_use]
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// The relationship index, read-only.
    #[must_use]
    pub const fn index(&self) -> &RelationIndex {
        &self.index
    }

    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    #[must_use]
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }

    #[must_use]
    pub fn album(&self, id: AlbumId) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == id)
    }

    #[must_use]
    pub fn song(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    #[must_use]
    pub fn playlist(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| playlist.id == id)
    }

    //---------------------------------------------------------------------------- first matches

    /// The first user registered with this mobile number.
    #[must_use]
    pub fn find_user_by_mobile(&self, mobile: &str) -> Option<&User> {
        self.users.iter().find(|user| user.mobile.as_ref() == mobile)
    }

    /// The first artist with exactly this name.
    #[must_use]
    pub fn find_artist_by_name(&self, name: &str) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.name.as_ref() == name)
    }

    /// The first album with exactly this title.
    #[must_use]
    pub fn find_album_by_title(&self, title: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.title.as_ref() == title)
    }

    /// The first song with exactly this title.
    #[must_use]
    pub fn find_song_by_title(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.title.as_ref() == title)
    }

    /// The first playlist with exactly this title.
    #[must_use]
    pub fn find_playlist_by_title(&self, title: &str) -> Option<&Playlist> {
        self.playlists
            .iter()
            .find(|playlist| playlist.title.as_ref() == title)
    }
}
