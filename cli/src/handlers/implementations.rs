use std::sync::Arc;

use anyhow::{Context as _, bail};
use chorus_core::SharedCatalog;
use chorus_types::playlist::Playlist;

use crate::handlers::{printing, script, utils::StdIn};

use super::{CatalogCommand, Command, CommandHandler, TopTarget};

impl Command {
    /// Run the command against the catalog.
    ///
    /// `stdin` is only read by [`Command::Run`] without a script path.
    ///
    /// # Errors
    ///
    /// If the command fails, or its output cannot be written.
    pub async fn run<W1: std::fmt::Write + Send, W2: std::fmt::Write + Send>(
        &self,
        catalog: &SharedCatalog,
        stdout: &mut W1,
        stderr: &mut W2,
        stdin: &impl StdIn,
    ) -> anyhow::Result<()> {
        match self {
            Self::Run { script } => {
                let source = match script {
                    Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                        .with_context(|| format!("reading script {}", path.display()))?,
                    _ if stdin.is_terminal() => {
                        bail!("no script given, pass a path or pipe one in")
                    }
                    _ => stdin.read_to_string().context("reading script from stdin")?,
                };

                let report = script::replay(catalog, &source, false, stdout, stderr).await?;
                if report.failed > 0 {
                    writeln!(
                        stderr,
                        "{} of {} commands failed",
                        report.failed, report.ran
                    )?;
                }
                Ok(())
            }
            Self::Catalog(command) => command.handle(catalog, stdout, stderr).await,
        }
    }
}

impl CommandHandler for CatalogCommand {
    type Output = anyhow::Result<()>;

    async fn handle<W1: std::fmt::Write + Send, W2: std::fmt::Write + Send>(
        &self,
        catalog: &SharedCatalog,
        stdout: &mut W1,
        _stderr: &mut W2,
    ) -> Self::Output {
        match self {
            Self::User { name, mobile } => {
                let user = catalog.create_user(name, mobile).await;
                writeln!(stdout, "{}", printing::user(&user))?;
            }
            Self::Artist { name } => {
                let artist = catalog.create_artist(name).await;
                writeln!(stdout, "{}", printing::artist(&artist))?;
            }
            Self::Album { title, artist } => {
                let album = catalog.create_album(title, artist).await;
                let brief = catalog
                    .read(|c| c.album_brief(album.id))
                    .await
                    .context("the new album is missing from the catalog")?;
                writeln!(stdout, "{}", printing::album(&brief))?;
            }
            Self::Song {
                title,
                album,
                length,
            } => {
                let song = catalog.create_song(title, album, *length).await?;
                let brief = catalog
                    .read(|c| c.song_brief(song.id))
                    .await
                    .context("the new song is missing from the catalog")?;
                writeln!(stdout, "{}", printing::song(&brief))?;
            }
            Self::PlaylistLength {
                mobile,
                title,
                length,
            } => {
                let playlist = catalog
                    .create_playlist_on_length(mobile, title, *length)
                    .await?;
                write!(stdout, "{}", describe_playlist(catalog, &playlist).await?)?;
            }
            Self::PlaylistNames {
                mobile,
                title,
                titles,
            } => {
                let playlist = catalog
                    .create_playlist_on_name(mobile, title, titles.as_slice())
                    .await?;
                write!(stdout, "{}", describe_playlist(catalog, &playlist).await?)?;
            }
            Self::FindPlaylist { mobile, title } => {
                let playlist = catalog.find_playlist(mobile, title).await?;
                write!(stdout, "{}", describe_playlist(catalog, &playlist).await?)?;
            }
            Self::Like { mobile, title } => {
                let song = catalog.like_song(mobile, title).await?;
                writeln!(stdout, "{}", printing::liked(&song))?;
            }
            Self::Top { target } => {
                let name = match target {
                    TopTarget::Artist => catalog.most_popular_artist().await,
                    TopTarget::Song => catalog.most_popular_song().await,
                };
                writeln!(stdout, "{}", printing::top(*target, &name))?;
            }
            Self::Brief => {
                writeln!(stdout, "{}", printing::brief(&catalog.brief().await))?;
            }
        }

        Ok(())
    }
}

/// Print a playlist with the titles of its songs, in order.
async fn describe_playlist(catalog: &SharedCatalog, playlist: &Playlist) -> anyhow::Result<String> {
    let (brief, songs) = catalog
        .read(|c| {
            let songs = c
                .index()
                .songs_of_playlist(playlist.id)
                .iter()
                .filter_map(|id| c.song(*id))
                .map(|song| song.title.clone())
                .collect::<Vec<Arc<str>>>();
            (c.playlist_brief(playlist.id), songs)
        })
        .await;
    let brief = brief.context("the playlist is missing from the catalog")?;

    Ok(printing::playlist(&brief, &songs)?)
}
