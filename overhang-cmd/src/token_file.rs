//! Bearer token persisted to a plain file between CLI runs.

use directories::BaseDirs;
use log::{debug, warn};
use overhang_core::token::TokenStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Folder under the user's home directory holding CLI state.
pub const APP_DIR_NAME: &str = ".overhang";
const TOKEN_FILE_NAME: &str = "token";

#[derive(Debug, Error)]
pub enum TokenPathError {
    /// No home directory could be resolved for this user.
    #[error("No home directory available; pass --token-file or set OVERHANG_TOKEN_FILE")]
    NoHomeDir,
}

/// `~/.overhang/token`, resolved through the platform's home directory.
pub fn default_token_path() -> Result<PathBuf, TokenPathError> {
    token_path_under(BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
}

fn token_path_under(home: Option<PathBuf>) -> Result<PathBuf, TokenPathError> {
    let home = home.ok_or(TokenPathError::NoHomeDir)?;
    Ok(home.join(APP_DIR_NAME).join(TOKEN_FILE_NAME))
}

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_private(&self, token: &str) -> std::io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            let mut file = options.open(&self.path)?;
            // mode() only applies on create; tighten files left by older runs
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
            file.write_all(token.as_bytes())
        }
        #[cfg(not(unix))]
        {
            options.open(&self.path)?.write_all(token.as_bytes())
        }
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn set_token(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("could not create {}: {}", parent.display(), e);
                return;
            }
        }
        match self.write_private(token) {
            Ok(()) => debug!("token written to {}", self.path.display()),
            Err(e) => warn!("could not write {}: {}", self.path.display(), e),
        }
    }

    fn clear_token(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("removed {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("could not remove {}: {}", self.path.display(), e),
        }
    }
}
