use std::path::PathBuf;

const CONFIG_FILE: &str = ".notes-store.toml";

/// Load config file content
///
/// Searches for the config in:
/// 1. Current working directory as `.notes-store.toml`
/// 2. Home directory as `.notes-store.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_FILE));
    }
    paths
}
