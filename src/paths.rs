//! Config-directory resolution and atomic persistence
//!
//! The directory holding the Asterisk configuration is an explicit input:
//! the binary reads the environment once at its edge and passes the value
//! in, so resolution itself is free of process globals and fully testable.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the dongle trunk configuration.
pub const DONGLE_FILE: &str = "dongle_fessbox.conf";

/// Environment variable naming the Asterisk configuration directory.
pub const CONFIG_DIR_ENV: &str = "ASTERISK_CONFIG";

/// Default configuration directory when neither an explicit override nor
/// the environment provides one.
pub const DEFAULT_CONFIG_DIR: &str = "/etc/asterisk";

/// A resolved configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    root: PathBuf,
}

impl ConfigDir {
    /// Resolution order: explicit override, then the environment value
    /// (an empty value counts as unset), then `default`.
    pub fn resolve(
        explicit: Option<PathBuf>,
        env_value: Option<OsString>,
        default: impl Into<PathBuf>,
    ) -> Self {
        let root = explicit
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| default.into());
        ConfigDir { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the dongle configuration file inside this directory.
    pub fn dongle_file(&self) -> PathBuf {
        self.root.join(DONGLE_FILE)
    }
}

/// Writes `contents` to `path` through a sibling temp file and a rename,
/// so an interrupted run never leaves a truncated file behind.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = ConfigDir::resolve(
            Some(PathBuf::from("/custom")),
            Some(OsString::from("/from-env")),
            "/default",
        );
        assert_eq!(dir.root(), Path::new("/custom"));
    }

    #[test]
    fn environment_beats_the_default() {
        let dir = ConfigDir::resolve(None, Some(OsString::from("/from-env")), "/default");
        assert_eq!(dir.root(), Path::new("/from-env"));
    }

    #[test]
    fn empty_environment_value_counts_as_unset() {
        let dir = ConfigDir::resolve(None, Some(OsString::new()), "/default");
        assert_eq!(dir.root(), Path::new("/default"));
    }

    #[test]
    fn default_is_the_last_resort() {
        let dir = ConfigDir::resolve(None, None, DEFAULT_CONFIG_DIR);
        assert_eq!(dir.root(), Path::new("/etc/asterisk"));
    }

    #[test]
    fn dongle_file_lives_inside_the_directory() {
        let dir = ConfigDir::resolve(None, None, "/etc/asterisk");
        assert_eq!(
            dir.dongle_file(),
            PathBuf::from("/etc/asterisk/dongle_fessbox.conf")
        );
    }

    #[test]
    fn write_atomic_replaces_existing_content() {
        let dir = std::env::temp_dir().join(format!("fconf-paths-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DONGLE_FILE);
        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!path.with_extension("conf.tmp").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
