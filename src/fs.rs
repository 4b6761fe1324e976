use std::path::PathBuf;

use log::warn;

pub fn get_home_dir() -> Option<PathBuf> {
    match home::home_dir() {
        Some(path) => Some(path.join(".rdig")),
        None => {
            warn!("cannot find the home directory, skipping config lookup");

            None
        }
    }
}
