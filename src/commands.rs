use std::path::Path;
use std::process;

use crate::error::Error;
use crate::games::{GameRecord, UNTESTED};

/// Count how many games carry each compatibility label. Labels appear in the
/// result in the order they are first encountered in the list.
pub fn tally_labels(games: &[GameRecord]) -> Vec<(String, usize)> {
    let mut tally: Vec<(String, usize)> = vec![];
    for game in games {
        match tally.iter_mut().find(|(label, _)| *label == game.compatibility) {
            Some((_, count)) => *count += 1,
            None => tally.push((game.compatibility.clone(), 1)),
        }
    }
    tally
}

pub fn summary_line(label: &str, count: usize, total: usize) -> String {
    format!("{}: {}/{} games ({:.2}%)", label, count, total, (count as f64 / total as f64) * 100.0)
}

/// Print one summary line per compatibility label seen in the list.
pub fn analyze(games: &[GameRecord]) {
    let total = games.len();
    for (label, count) in tally_labels(games) {
        println!("{}", summary_line(&label, count, total));
    }
}

pub fn missing_path_line(game: &GameRecord) -> String {
    format!("{} missing path", game.name)
}

pub fn missing_file_line(game: &GameRecord) -> String {
    format!("{} has path ({}), but it doesn't exist!", game.name, game.path)
}

pub fn missing_totals(missing_path_count: usize, missing_file_count: usize) -> (String, String) {
    (
        format!("{} games missing path.", missing_path_count),
        format!("{} games missing file.", missing_file_count),
    )
}

/// Report every game that cannot be launched, either because it has no ROM
/// path or because the file the path points at is not on disk. Returns the
/// two counts after printing them.
pub fn missing_roms(games: &[GameRecord], roms_dir: &Path) -> (usize, usize) {
    let mut missing_path_count = 0;
    let mut missing_file_count = 0;
    for game in games {
        if game.path.is_empty() {
            println!("{}", missing_path_line(game));
            missing_path_count += 1;
        } else if !game.rom_path(roms_dir).exists() {
            println!("{}", missing_file_line(game));
            missing_file_count += 1;
        }
    }
    let (path_total, file_total) = missing_totals(missing_path_count, missing_file_count);
    println!("{}", path_total);
    println!("{}", file_total);
    (missing_path_count, missing_file_count)
}

/// First game in list order that is still untested and has its ROM on disk.
pub fn next_untested<'a>(games: &'a [GameRecord], roms_dir: &Path) -> Option<&'a GameRecord> {
    games
        .iter()
        .find(|game| game.can_launch(roms_dir) && game.compatibility == UNTESTED)
}

/// Launch the emulator against the first untested game that can be launched,
/// if there is one, and wait for it to finish.
pub fn test(games: &[GameRecord], roms_dir: &Path, emulator: &Path) -> Result<(), Error> {
    if let Some(game) = next_untested(games, roms_dir) {
        launch_emulator(game, roms_dir, emulator)?;
    }
    Ok(())
}

fn launch_emulator(game: &GameRecord, roms_dir: &Path, emulator: &Path) -> Result<(), Error> {
    println!("Launching emulator: {}", game.name);
    // The child inherits the terminal, so nothing is captured here; the wait
    // is unbounded and ends only when the emulator exits
    let status = process::Command::new(emulator)
        .arg(game.rom_path(roms_dir))
        .status()
        .map_err(|err| Error::LaunchFailed(emulator.to_path_buf(), err))?;
    println!("{} finished with {}", game.name, status.code().unwrap_or(-1));
    Ok(())
}
