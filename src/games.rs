use std::fs;
use std::path::{Path, PathBuf};

use serde_derive::Deserialize;

use crate::error::Error;

/// Compatibility label given to games that have never been run against the
/// emulator. The `test` command only considers games carrying this label.
pub const UNTESTED: &str = "UNTESTED";

/// One entry in the compatibility list. The list is loaded once at startup
/// and never modified afterwards.
#[derive(Clone, Debug, Deserialize)]
pub struct GameRecord {
    pub name: String,
    /// Path of the ROM file relative to the ROM directory. An empty string
    /// means no ROM is known for this game.
    pub path: String,
    pub compatibility: String,
}

impl GameRecord {
    /// Full path to the game's ROM file under the given ROM directory.
    pub fn rom_path(&self, roms_dir: &Path) -> PathBuf {
        roms_dir.join(&self.path)
    }

    /// A game can only be launched if it has a ROM path set and the file is
    /// actually present on disk.
    pub fn can_launch(&self, roms_dir: &Path) -> bool {
        !self.path.is_empty() && self.rom_path(roms_dir).exists()
    }
}

/// Read and deserialize the compatibility list. Any failure here is fatal to
/// the caller, including a record with a missing field.
pub fn load_compatibility_list(path: &Path) -> Result<Vec<GameRecord>, Error> {
    let data = fs::read(path).map_err(|err| Error::ListUnreadable(path.to_path_buf(), err))?;
    let games: Vec<GameRecord> =
        serde_json::from_slice(&data).map_err(|err| Error::ListMalformed(path.to_path_buf(), err))?;
    log::debug!("loaded {} games from {}", games.len(), path.display());
    Ok(games)
}
