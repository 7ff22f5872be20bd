use chorus_storage::{Catalog, errors::Error};

use pretty_assertions::{assert_eq, assert_str_eq};

#[test]
fn test_like_propagates_to_artist() -> anyhow::Result<()> {
    let mut catalog = Catalog::new();

    let alice = catalog.create_user("Alice", "111");
    let album = catalog.create_album("Abbey Road", "Beatles");
    assert_eq!(catalog.artists().len(), 1);
    let beatles = catalog.artists()[0].clone();
    assert_str_eq!(beatles.name.as_ref(), "Beatles");
    assert_eq!(catalog.index().albums_of(beatles.id), &[album.id]);

    let song = catalog.create_song("Come Together", "Abbey Road", 259)?;
    assert_eq!(catalog.index().songs_of_album(album.id), &[song.id]);

    let liked = catalog.like_song("111", "Come Together")?;
    assert_eq!(liked.likes, 1);
    assert_eq!(catalog.find_artist_by_name("Beatles").map(|a| a.likes), Some(1));
    assert_eq!(catalog.index().likers_of(song.id), &[alice.id]);

    assert_str_eq!(catalog.most_popular_artist(), "Beatles");
    assert_str_eq!(catalog.most_popular_song(), "Come Together");

    Ok(())
}

#[test]
fn test_tied_artists_rank_by_creation() -> anyhow::Result<()> {
    let mut catalog = Catalog::new();
    for (name, mobile) in [("Alice", "1"), ("Bob", "2"), ("Carol", "3")] {
        catalog.create_user(name, mobile);
    }
    catalog.create_album("First", "A1");
    catalog.create_album("Second", "A2");
    catalog.create_song("One", "First", 200)?;
    catalog.create_song("Two", "Second", 200)?;

    for mobile in ["1", "2", "3"] {
        catalog.like_song(mobile, "Two")?;
        catalog.like_song(mobile, "One")?;
    }

    assert_eq!(catalog.artists()[0].likes, 3);
    assert_eq!(catalog.artists()[1].likes, 3);
    assert_str_eq!(catalog.most_popular_artist(), "A1");
    assert_str_eq!(catalog.most_popular_song(), "One");

    Ok(())
}

#[test]
fn test_playlists_and_listeners() -> anyhow::Result<()> {
    let mut catalog = Catalog::new();
    let alice = catalog.create_user("Alice", "111");
    let bob = catalog.create_user("Bob", "222");
    catalog.create_album("Abbey Road", "Beatles");
    catalog.create_song("Come Together", "Abbey Road", 259)?;
    catalog.create_song("Something", "Abbey Road", 182)?;

    assert_eq!(
        catalog.create_playlist_on_length("999", "Nope", 259),
        Err(Error::UserNotFound)
    );

    let by_length = catalog.create_playlist_on_length("111", "Long", 259)?;
    let by_name = catalog.create_playlist_on_name("222", "Picks", &["Something", "Missing"])?;

    assert_eq!(catalog.index().songs_of_playlist(by_length.id).len(), 1);
    assert_eq!(catalog.index().songs_of_playlist(by_name.id).len(), 1);

    catalog.find_playlist("222", "Long")?;
    catalog.find_playlist("222", "Long")?;
    assert_eq!(catalog.index().listeners_of(by_length.id), &[alice.id, bob.id]);
    assert_eq!(catalog.index().playlists_of(bob.id), &[by_name.id, by_length.id]);

    assert_eq!(
        catalog.find_playlist("111", "Missing").unwrap_err().to_string(),
        "Playlist does not exist"
    );
    assert_eq!(
        catalog.like_song("111", "Missing").unwrap_err().to_string(),
        "Song does not exist"
    );
    assert_eq!(
        catalog.create_song("Because", "Let It Be", 165).unwrap_err().to_string(),
        "Album doesn't exist"
    );

    Ok(())
}
