//! Handles displaying the output of the catalog commands in a human readable format.

use std::{fmt::Write, sync::Arc};

use chorus_core::state::catalog::CatalogBrief;
use chorus_types::{
    album::AlbumBrief,
    artist::Artist,
    playlist::PlaylistBrief,
    song::{Song, SongBrief},
    user::User,
};

use super::TopTarget;

pub fn user(user: &User) -> String {
    format!(
        "Created user \"{}\" (mobile: {}, id: {})",
        user.name, user.mobile, user.id
    )
}

pub fn artist(artist: &Artist) -> String {
    format!("Created artist \"{}\" (id: {})", artist.name, artist.id)
}

pub fn album(album: &AlbumBrief) -> String {
    format!(
        "Created album \"{}\" (by: {:?}, released: {}, id: {})",
        album.title,
        album.artist.as_deref().unwrap_or("?"),
        album.release.format("%Y-%m-%d %H:%M:%S"),
        album.id
    )
}

pub fn song(song: &SongBrief) -> String {
    format!(
        "Created song \"{}\" ({}s, on: {:?}, id: {})",
        song.title,
        song.length,
        song.album.as_deref().unwrap_or("?"),
        song.id
    )
}

pub fn liked(song: &Song) -> String {
    format!("\"{}\" has {} likes", song.title, song.likes)
}

pub fn playlist(playlist: &PlaylistBrief, songs: &[Arc<str>]) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(
        output,
        "Playlist \"{}\" ({} songs, {} listeners, id: {}):",
        playlist.title, playlist.songs, playlist.listeners, playlist.id
    )?;

    for (i, title) in songs.iter().enumerate() {
        writeln!(output, "\t{i}: \"{title}\",")?;
    }

    Ok(output)
}

pub fn top(target: TopTarget, name: &str) -> String {
    let target = match target {
        TopTarget::Artist => "artist",
        TopTarget::Song => "song",
    };
    format!("Most popular {target}: \"{name}\"")
}

pub fn brief(brief: &CatalogBrief) -> String {
    format!("Catalog: {brief}")
}
