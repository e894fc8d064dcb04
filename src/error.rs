use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read compatibility list {}: {}", .0.display(), .1)]
    ListUnreadable(PathBuf, io::Error),
    #[error("malformed compatibility list {}: {}", .0.display(), .1)]
    ListMalformed(PathBuf, serde_json::Error),
    #[error("could not launch emulator {}: {}", .0.display(), .1)]
    LaunchFailed(PathBuf, io::Error),
}
