pub mod implementations;
pub mod printing;
pub mod script;
pub mod utils;

#[cfg(test)]
mod smoke_tests;

use std::path::PathBuf;

use chorus_core::SharedCatalog;
use clap::{Parser, Subcommand, ValueEnum};

pub trait CommandHandler {
    type Output;

    async fn handle<W1: std::fmt::Write + Send, W2: std::fmt::Write + Send>(
        &self,
        catalog: &SharedCatalog,
        stdout: &mut W1,
        stderr: &mut W2,
    ) -> Self::Output;
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Replay a command script against the catalog
    Run {
        /// The script to replay, reads from stdin when omitted or `-`
        #[clap(value_hint = clap::ValueHint::FilePath)]
        script: Option<PathBuf>,
    },
    #[clap(flatten)]
    Catalog(CatalogCommand),
}

/// The commands that change or query the catalog.
///
/// These are also the commands a script is made of, one per line.
#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum CatalogCommand {
    /// Create a user
    User { name: String, mobile: String },
    /// Create an artist
    Artist { name: String },
    /// Create an album, and its artist if there is no artist with that name yet
    Album { title: String, artist: String },
    /// Create a song on an existing album
    Song {
        title: String,
        album: String,
        /// Length in seconds
        length: u32,
    },
    /// Create a playlist of every song with exactly this length
    PlaylistLength {
        mobile: String,
        title: String,
        /// Length in seconds
        length: u32,
    },
    /// Create a playlist from song titles
    PlaylistNames {
        mobile: String,
        title: String,
        /// The songs to add, by title
        titles: Vec<String>,
    },
    /// Find a playlist by title, subscribing the user to it
    FindPlaylist { mobile: String, title: String },
    /// Like a song
    Like { mobile: String, title: String },
    /// The artist or song with the most likes
    Top { target: TopTarget },
    /// Get brief catalog info
    Brief,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum TopTarget {
    Artist,
    Song,
}

/// One line of a script.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
pub struct ScriptLine {
    #[clap(subcommand)]
    pub command: CatalogCommand,
}
