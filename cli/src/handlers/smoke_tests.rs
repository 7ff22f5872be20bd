use std::path::PathBuf;

use chorus_core::SharedCatalog;
use chorus_storage::test_utils::abbey_road;
use clap::Parser;
use pretty_assertions::{assert_eq, assert_str_eq};
use rstest::{fixture, rstest};

use crate::handlers::{
    CatalogCommand, Command, CommandHandler, TopTarget,
    utils::{StdIn, WriteAdapter},
};

struct StdInMock {
    lines: Vec<String>,
    terminal: bool,
}

impl StdInMock {
    fn new(lines: Vec<String>, terminal: bool) -> Self {
        Self { lines, terminal }
    }
}

impl StdIn for StdInMock {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn lines(&self) -> impl Iterator<Item = std::io::Result<String>> {
        self.lines.clone().into_iter().map(Ok)
    }
}

#[fixture]
fn catalog() -> SharedCatalog {
    SharedCatalog::from(abbey_road())
}

#[test]
fn test_cli_args_parse() {
    let args = vec!["chorus", "--log-level", "debug", "--trace"];
    let flags = crate::Flags::try_parse_from(args);
    assert!(flags.is_ok());
    let flags = flags.unwrap();
    assert_eq!(flags.log_level, Some(log::LevelFilter::Debug));
    assert!(flags.trace);
    assert!(flags.config.is_none());
    assert!(flags.subcommand.is_none());
}

#[test]
fn test_cli_args_parse_run() {
    let args = vec!["chorus", "--seed", "seed.chorus", "run", "script.chorus"];
    let flags = crate::Flags::try_parse_from(args).unwrap();
    assert_eq!(flags.seed, Some(PathBuf::from("seed.chorus")));
    assert_eq!(
        flags.subcommand,
        Some(Command::Run {
            script: Some(PathBuf::from("script.chorus"))
        })
    );
}

#[test]
fn test_cli_args_parse_catalog_command() {
    let args = vec!["chorus", "song", "Because", "Abbey Road", "165"];
    let flags = crate::Flags::try_parse_from(args).unwrap();
    assert_eq!(
        flags.subcommand,
        Some(Command::Catalog(CatalogCommand::Song {
            title: "Because".into(),
            album: "Abbey Road".into(),
            length: 165,
        }))
    );

    let args = vec!["chorus", "top", "album"];
    assert!(crate::Flags::try_parse_from(args).is_err());
}

#[rstest]
#[tokio::test]
async fn test_user(catalog: SharedCatalog) {
    let mut stdout = String::new();
    let mut stderr = String::new();

    CatalogCommand::User {
        name: "Bob".into(),
        mobile: "222".into(),
    }
    .handle(&catalog, &mut stdout, &mut stderr)
    .await
    .unwrap();

    let id = catalog.read(|c| c.users()[1].id).await;
    assert_str_eq!(
        stdout,
        format!("Created user \"Bob\" (mobile: 222, id: {id})\n")
    );
    assert_str_eq!(stderr, "");
}

#[rstest]
#[tokio::test]
async fn test_album_and_song(catalog: SharedCatalog) {
    let mut stdout = String::new();
    let mut stderr = String::new();

    CatalogCommand::Album {
        title: "Tapestry".into(),
        artist: "Carole King".into(),
    }
    .handle(&catalog, &mut stdout, &mut stderr)
    .await
    .unwrap();
    assert!(stdout.starts_with("Created album \"Tapestry\" (by: \"Carole King\", released: "));

    stdout.clear();
    CatalogCommand::Song {
        title: "So Far Away".into(),
        album: "Tapestry".into(),
        length: 235,
    }
    .handle(&catalog, &mut stdout, &mut stderr)
    .await
    .unwrap();
    assert!(stdout.starts_with("Created song \"So Far Away\" (235s, on: \"Tapestry\", id: song:"));
}

#[rstest]
#[tokio::test]
async fn test_song_on_missing_album(catalog: SharedCatalog) {
    let mut stdout = String::new();
    let mut stderr = String::new();

    let result = CatalogCommand::Song {
        title: "Because".into(),
        album: "Let It Be".into(),
        length: 165,
    }
    .handle(&catalog, &mut stdout, &mut stderr)
    .await;

    assert_str_eq!(result.unwrap_err().to_string(), "Album doesn't exist");
    assert_str_eq!(stdout, "");
}

#[rstest]
#[tokio::test]
async fn test_playlists(catalog: SharedCatalog) {
    let mut stdout = String::new();
    let mut stderr = String::new();

    CatalogCommand::PlaylistNames {
        mobile: "111".into(),
        title: "Mix".into(),
        titles: vec!["Something".into(), "Missing".into(), "Something".into()],
    }
    .handle(&catalog, &mut stdout, &mut stderr)
    .await
    .unwrap();
    let lines = stdout.lines().collect::<Vec<_>>();
    assert!(lines[0].starts_with("Playlist \"Mix\" (2 songs, 1 listeners, id: playlist:"));
    assert_eq!(&lines[1..], &["\t0: \"Something\",", "\t1: \"Something\","]);

    stdout.clear();
    catalog.create_user("Bob", "222").await;
    CatalogCommand::FindPlaylist {
        mobile: "222".into(),
        title: "Mix".into(),
    }
    .handle(&catalog, &mut stdout, &mut stderr)
    .await
    .unwrap();
    assert!(stdout.starts_with("Playlist \"Mix\" (2 songs, 2 listeners, "));

    stdout.clear();
    CatalogCommand::PlaylistLength {
        mobile: "222".into(),
        title: "Nothing".into(),
        length: 1,
    }
    .handle(&catalog, &mut stdout, &mut stderr)
    .await
    .unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Playlist \"Nothing\" (0 songs, 1 listeners, "));
}

#[rstest]
#[tokio::test]
async fn test_like_and_top(catalog: SharedCatalog) {
    let mut stdout = String::new();
    let mut stderr = String::new();

    let commands = [
        CatalogCommand::Like {
            mobile: "111".into(),
            title: "Something".into(),
        },
        CatalogCommand::Top {
            target: TopTarget::Song,
        },
        CatalogCommand::Top {
            target: TopTarget::Artist,
        },
        CatalogCommand::Brief,
    ];
    for command in commands {
        command
            .handle(&catalog, &mut stdout, &mut stderr)
            .await
            .unwrap();
    }

    assert_str_eq!(
        stdout,
        "\"Something\" has 1 likes\n\
         Most popular song: \"Something\"\n\
         Most popular artist: \"Beatles\"\n\
         Catalog: 1 users, 1 artists, 1 albums, 3 songs, 0 playlists\n"
    );
}

#[rstest]
#[tokio::test]
async fn test_run_script_file(catalog: SharedCatalog) {
    let mut stdout = String::new();
    let mut stderr = String::new();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("likes.chorus");
    std::fs::write(&path, "user Bob 222\nlike 222 Something\nlike 333 Something\n").unwrap();

    Command::Run { script: Some(path) }
        .run(
            &catalog,
            &mut stdout,
            &mut stderr,
            &StdInMock::new(vec![], true),
        )
        .await
        .unwrap();

    assert!(stdout.ends_with("\"Something\" has 1 likes\n"));
    assert_str_eq!(
        stderr,
        "line 3: User does not exist\n1 of 3 commands failed\n"
    );
}

#[rstest]
#[tokio::test]
async fn test_run_missing_script(catalog: SharedCatalog) {
    let dir = tempfile::tempdir().unwrap();

    let result = Command::Run {
        script: Some(dir.path().join("missing.chorus")),
    }
    .run(
        &catalog,
        &mut String::new(),
        &mut String::new(),
        &StdInMock::new(vec![], true),
    )
    .await;

    assert!(result.is_err());
}

#[rstest]
#[case::omitted(None)]
#[case::dash(Some(PathBuf::from("-")))]
#[tokio::test]
async fn test_run_from_stdin(#[case] script: Option<PathBuf>) {
    let catalog = SharedCatalog::new();
    let mut stdout = String::new();
    let mut stderr = String::new();
    let stdin = StdInMock::new(
        vec![
            "user Alice 111".to_string(),
            "album 'Abbey Road' Beatles".to_string(),
        ],
        false,
    );

    Command::Run { script }
        .run(&catalog, &mut stdout, &mut stderr, &stdin)
        .await
        .unwrap();

    assert_eq!(stdout.lines().count(), 2);
    assert_str_eq!(stderr, "");
    assert_eq!(catalog.brief().await.albums, 1);
}

#[tokio::test]
async fn test_run_without_script_on_a_terminal() {
    let result = Command::Run { script: None }
        .run(
            &SharedCatalog::new(),
            &mut String::new(),
            &mut String::new(),
            &StdInMock::new(vec!["brief".to_string()], true),
        )
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_write_adapter() {
    let mut buffer = WriteAdapter(Vec::new());

    CatalogCommand::Brief
        .handle(&SharedCatalog::new(), &mut buffer, &mut String::new())
        .await
        .unwrap();

    assert_str_eq!(
        String::from_utf8(buffer.0).unwrap(),
        "Catalog: 0 users, 0 artists, 0 albums, 0 songs, 0 playlists\n"
    );
}
