pub mod commands;
pub mod error;
pub mod games;

pub use crate::error::Error;
pub use crate::games::{load_compatibility_list, GameRecord, UNTESTED};
