//! CRUD operations for songs
use log::{debug, warn};
use tracing::instrument;

use chorus_types::song::Song;

use crate::{catalog::Catalog, errors::Error};

impl Catalog {
    /// Create a song on the album titled `album_name`.
    ///
    /// Albums are matched by exact title. When several albums share the title the
    /// first one created gets the song, not the most recent one.
    ///
    /// # Errors
    ///
    /// [`Error::AlbumNotFound`] if no album has exactly that title. Albums are
    /// never created implicitly, and nothing is added to the catalog on failure.
    #[instrument(skip(self))]
    pub fn create_song(
        &mut self,
        title: &str,
        album_name: &str,
        length: u32,
    ) -> Result<Song, Error> {
        let album_id = self
            .find_album_by_title(album_name)
            .ok_or(Error::AlbumNotFound)?
            .id;

        let song = Song::new(title, length);
        self.songs.push(song.clone());
        self.index.add_song(album_id, song.id);
        debug!("created song {} on {album_id}", song.id);

        Ok(song)
    }

    /// Record that the user with this mobile number likes the song titled `song_title`.
    ///
    /// The first like from a given user increments the song's likes, and the likes
    /// of the artist that owns the song's album. Later likes from the same user
    /// change nothing. If the song's album, or the album's artist, cannot be
    /// resolved only the song's counter moves.
    ///
    /// Returns the song as it stands after the like.
    ///
    /// # Errors
    ///
    /// [`Error::SongNotFound`] if no song has that title, checked first, then
    /// [`Error::UserDoesNotExist`] if no user has that mobile number.
    #[instrument(skip(self))]
    pub fn like_song(&mut self, mobile: &str, song_title: &str) -> Result<Song, Error> {
        let song_pos = self
            .songs
            .iter()
            .position(|song| song.title.as_ref() == song_title)
            .ok_or(Error::SongNotFound)?;
        let user_id = self
            .find_user_by_mobile(mobile)
            .ok_or(Error::UserDoesNotExist)?
            .id;
        let song_id = self.songs[song_pos].id;

        if !self.index.add_liker(song_id, user_id) {
            debug!("{user_id} already likes {song_id}");
            return Ok(self.songs[song_pos].clone());
        }
        self.songs[song_pos].likes += 1;

        let artist_id = self
            .album_of_song(song_id)
            .and_then(|album| self.artist_of_album(album.id))
            .map(|artist| artist.id);

        match artist_id.and_then(|id| self.artists.iter_mut().find(|artist| artist.id == id)) {
            Some(artist) => {
                artist.likes += 1;
                debug!(
                    "{user_id} liked {song_id}, {} now has {} likes",
                    artist.id, artist.likes
                );
            }
            None => warn!("could not resolve the artist of {song_id}, only its own likes changed"),
        }

        Ok(self.songs[song_pos].clone())
    }
}
