use anyhow::Result;
use std::path::{Path, PathBuf};

/// Get the container base path from environment variable, defaulting to "/app"
pub fn container_base_path() -> PathBuf {
    std::env::var("REELOG_BASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/app"))
}

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("reelog");
        Ok(Self { config_dir })
    }

    pub fn from_container_env() -> Self {
        Self {
            config_dir: container_base_path(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // Presence of the base path indicates a container environment.
        let base = container_base_path();
        if base.exists() {
            return Self::from_container_env();
        }

        // Otherwise, platform-specific paths (e.g., ~/.config/reelog on Linux)
        Self::new().unwrap_or_else(|_| Self::from_container_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_under_config_dir() {
        let manager = PathManager {
            config_dir: PathBuf::from("/tmp/reelog-test"),
        };
        assert_eq!(
            manager.config_file(),
            PathBuf::from("/tmp/reelog-test/config.toml")
        );
    }
}
