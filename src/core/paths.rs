use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "cmdguide";
const CONFIG_FILE: &str = "cmdguide.json";

/// User config file: `<config dir>/cmdguide/cmdguide.json`.
pub fn config_file() -> Result<PathBuf> {
    let base = config_base().ok_or_else(|| {
        Error::internal_unexpected("Cannot locate the user config directory".to_string())
    })?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(windows)]
fn config_base() -> Option<PathBuf> {
    env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(windows))]
fn config_base() -> Option<PathBuf> {
    xdg_or_home(
        env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        env::var_os("HOME").map(PathBuf::from),
    )
}

/// An absolute `$XDG_CONFIG_HOME` wins; otherwise `$HOME/.config`.
#[cfg(not(windows))]
fn xdg_or_home(xdg: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg.filter(|dir| dir.is_absolute())
        .or_else(|| home.map(|home| home.join(".config")))
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn absolute_xdg_dir_is_preferred() {
        let base = xdg_or_home(Some("/xdg".into()), Some("/home/u".into()));
        assert_eq!(base, Some(PathBuf::from("/xdg")));
    }

    #[test]
    fn relative_xdg_dir_falls_back_to_home() {
        let base = xdg_or_home(Some("rel".into()), Some("/home/u".into()));
        assert_eq!(base, Some(PathBuf::from("/home/u/.config")));
    }

    #[test]
    fn no_home_means_no_config_dir() {
        assert_eq!(xdg_or_home(None, None), None);
    }
}
