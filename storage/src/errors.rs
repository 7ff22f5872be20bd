use thiserror::Error;

/// Errors that can occur while operating on the catalog.
///
/// Every failure is a lookup that came up empty. Each variant carries the exact
/// message callers are expected to surface, and every lookup happens before the
/// operation writes anything.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// No user has the mobile number given when creating a playlist.
    #[error("User not found")]
    UserNotFound,
    /// No user has the mobile number given when browsing or liking.
    #[error("User does not exist")]
    UserDoesNotExist,
    #[error("Album doesn't exist")]
    AlbumNotFound,
    #[error("Playlist does not exist")]
    PlaylistNotFound,
    #[error("Song does not exist")]
    SongNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_str_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Error::UserNotFound, "User not found")]
    #[case(Error::UserDoesNotExist, "User does not exist")]
    #[case(Error::AlbumNotFound, "Album doesn't exist")]
    #[case(Error::PlaylistNotFound, "Playlist does not exist")]
    #[case(Error::SongNotFound, "Song does not exist")]
    fn test_error_messages(#[case] error: Error, #[case] expected: &str) {
        assert_str_eq!(error.to_string(), expected);
    }
}
