pub mod catalog;
pub mod config;
pub mod errors;
pub mod logger;
pub mod state;

pub use catalog::SharedCatalog;

use errors::DirectoryError;

/// Get the directory chorus keeps its configuration in.
///
/// This is the platform's config directory for the application, e.g.
/// `~/.config/chorus` on linux.
///
/// # Errors
///
/// [`DirectoryError::Config`] if the home directory of the current user cannot be determined.
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, DirectoryError> {
    directories::ProjectDirs::from("", "", "chorus")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(DirectoryError::Config)
}

/// Format a duration as `h:mm:ss.ss`, or `m:ss.ss` when it is shorter than an hour.
#[must_use]
pub fn format_duration(duration: &std::time::Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = duration.as_secs_f32() % 60.;

    if hours > 0 {
        format!("{hours}:{minutes:0>2}:{seconds:0>5.2}")
    } else {
        format!("{minutes}:{seconds:0>5.2}")
    }
}
