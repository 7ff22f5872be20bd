//! Walking the relationship index back from a record to its owners, and the brief views built on that.
use chorus_types::{
    album::{Album, AlbumBrief, AlbumId},
    artist::{Artist, ArtistBrief, ArtistId},
    playlist::{PlaylistBrief, PlaylistId},
    song::{SongBrief, SongId},
    user::{UserBrief, UserId},
};

use crate::catalog::Catalog;

impl Catalog {
    /// The album a song was created on.
    ///
    /// Albums are searched in creation order, so if the song somehow appears on
    /// more than one album the oldest one is returned.
    #[must_use]
    pub fn album_of_song(&self, song: SongId) -> Option<&Album> {
        self.albums
            .iter()
            .find(|album| self.index.songs_of_album(album.id).contains(&song))
    }

    /// The artist that owns an album, searching artists in creation order.
    #[must_use]
    pub fn artist_of_album(&self, album: AlbumId) -> Option<&Artist> {
        self.artists
            .iter()
            .find(|artist| self.index.albums_of(artist.id).contains(&album))
    }

    #[must_use]
    pub fn artist_brief(&self, id: ArtistId) -> Option<ArtistBrief> {
        self.artist(id)
            .map(|artist| ArtistBrief::new(artist, self.index.albums_of(id).len()))
    }

    #[must_use]
    pub fn album_brief(&self, id: AlbumId) -> Option<AlbumBrief> {
        let album = self.album(id)?;
        let artist = self.artist_of_album(id).map(|artist| artist.name.clone());
        Some(AlbumBrief::new(
            album,
            artist,
            self.index.songs_of_album(id).len(),
        ))
    }

    #[must_use]
    pub fn song_brief(&self, id: SongId) -> Option<SongBrief> {
        let song = self.song(id)?;
        let album = self.album_of_song(id).map(|album| album.title.clone());
        Some(SongBrief::new(song, album))
    }

    #[must_use]
    pub fn playlist_brief(&self, id: PlaylistId) -> Option<PlaylistBrief> {
        self.playlist(id).map(|playlist| {
            PlaylistBrief::new(
                playlist,
                self.index.songs_of_playlist(id).len(),
                self.index.listeners_of(id).len(),
            )
        })
    }

    /// Brief view of a user; `created` is the title of the last playlist they created.
    #[must_use]
    pub fn user_brief(&self, id: UserId) -> Option<UserBrief> {
        let user = self.user(id)?;
        let created = self
            .index
            .created_playlist_of(id)
            .and_then(|playlist| self.playlist(playlist))
            .map(|playlist| playlist.title.clone());
        Some(UserBrief::new(
            user,
            self.index.playlists_of(id).len(),
            created,
        ))
    }
}
