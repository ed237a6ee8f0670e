use crate::config::{CONFIG_FILE_NAME, Config};
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("config file not found at {}", .path.display())]
    NotFound { path: PathBuf },
}

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit,
    ProgramDir,
    WorkingDir,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSource::Explicit => "--config",
            ConfigSource::ProgramDir => "program directory",
            ConfigSource::WorkingDir => "working directory",
        };
        f.write_str(name)
    }
}

/// Pick the config file: the one next to the program wins, otherwise the
/// working directory's. The returned path may not exist.
pub fn find_config(program_dir: Option<&Path>, work_dir: &Path) -> (PathBuf, ConfigSource) {
    if let Some(dir) = program_dir {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return (candidate, ConfigSource::ProgramDir);
        }
    }
    (work_dir.join(CONFIG_FILE_NAME), ConfigSource::WorkingDir)
}

/// Directory holding the running executable, if it can be determined.
pub fn program_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = Config::from_toml_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), sections = config.table().len(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn program_dir_config_wins() {
        let program = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        std::fs::write(program.path().join("config.toml"), "").unwrap();
        std::fs::write(work.path().join("config.toml"), "").unwrap();

        let (path, source) = find_config(Some(program.path()), work.path());
        assert_eq!(path, program.path().join("config.toml"));
        assert_eq!(source, ConfigSource::ProgramDir);
    }

    #[test]
    fn falls_back_to_working_dir() {
        let program = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();

        let (path, source) = find_config(Some(program.path()), work.path());
        assert_eq!(path, work.path().join("config.toml"));
        assert_eq!(source, ConfigSource::WorkingDir);
    }

    #[test]
    fn directory_named_config_toml_is_ignored() {
        let program = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        std::fs::create_dir(program.path().join("config.toml")).unwrap();

        let (path, _) = find_config(Some(program.path()), work.path());
        assert_eq!(path, work.path().join("config.toml"));
    }

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path("/etc/vm/config.toml"), PathBuf::from("/etc/vm/config.toml"));
        assert_eq!(expand_path("rel/config.toml"), PathBuf::from("rel/config.toml"));
    }
}
