//! Catalogs for tests and benchmarks.
use crate::catalog::Catalog;

/// A small catalog: user "Alice" (mobile `111`) and the album "Abbey Road" by
/// "Beatles", with the songs "Come Together" (259s), "Something" (182s) and
/// "Octopus's Garden" (171s), in that order. Nothing is liked and there are no
/// playlists.
///
/// # Panics
///
/// Never, the album is created before its songs.
#[must_use]
pub fn abbey_road() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.create_user("Alice", "111");
    catalog.create_album("Abbey Road", "Beatles");
    for (title, length) in [
        ("Come Together", 259),
        ("Something", 182),
        ("Octopus's Garden", 171),
    ] {
        catalog
            .create_song(title, "Abbey Road", length)
            .expect("the album was just created");
    }
    catalog
}

/// Shape of a generated catalog, see [`generate_catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogCase {
    pub users: usize,
    pub artists: usize,
    pub albums_per_artist: usize,
    pub songs_per_album: usize,
}

impl CatalogCase {
    #[must_use]
    pub const fn new(
        users: usize,
        artists: usize,
        albums_per_artist: usize,
        songs_per_album: usize,
    ) -> Self {
        Self {
            users,
            artists,
            albums_per_artist,
            songs_per_album,
        }
    }
}

/// Build a catalog with deterministic names.
///
/// Users are `User {n}` with mobile `{n}`, artists `Artist {n}`, albums
/// `Album {artist}-{n}` and songs `Song {artist}-{album}-{n}`. Song lengths cycle
/// through 120..=299 seconds.
///
/// # Panics
///
/// Never, every album is created before its songs.
#[must_use]
pub fn generate_catalog(case: CatalogCase) -> Catalog {
    let mut catalog = Catalog::new();
    for user in 0..case.users {
        catalog.create_user(&format!("User {user}"), &user.to_string());
    }

    let mut length = 120u32;
    for artist in 0..case.artists {
        for album in 0..case.albums_per_artist {
            let album_title = format!("Album {artist}-{album}");
            catalog.create_album(&album_title, &format!("Artist {artist}"));
            for song in 0..case.songs_per_album {
                catalog
                    .create_song(&format!("Song {artist}-{album}-{song}"), &album_title, length)
                    .expect("the album was just created");
                length = if length >= 299 { 120 } else { length + 1 };
            }
        }
    }
    catalog
}
