use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base ocgen config directory (universal ~/.config/ocgen/ on all platforms)
pub fn ocgen() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows".to_string())
        })?;
        Ok(PathBuf::from(appdata).join("ocgen"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("ocgen"))
    }
}

/// Editing-session file path
pub fn session_file() -> Result<PathBuf> {
    Ok(ocgen()?.join("session.json"))
}
