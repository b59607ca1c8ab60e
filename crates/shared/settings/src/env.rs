//! Environment sources.
//!
//! The loader never calls `std::env` directly; it asks an [`EnvSource`].
//! The process environment, an env file, and plain maps are all sources,
//! which keeps loading deterministic and testable.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::path::{Path, PathBuf};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::error::{ConfigError, ConfigResult};

const DOTENV_FILENAME: &str = ".env";

/// Lookup of a single env key.
///
/// `Ok(None)` means absent. A present but empty value is `Ok(Some(""))`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource {
    fn var(&self, key: &str) -> ConfigResult<Option<String>>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(ConfigError::invalid(key, "value is not valid unicode"))
            }
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

/// Key/value pairs parsed from an env file.
///
/// Parsing does not touch the process environment; layer this under
/// [`ProcessEnv`] to get "real env wins over file" semantics.
#[derive(Debug, Clone, Default)]
pub struct DotenvFile {
    path: Option<PathBuf>,
    vars: HashMap<String, String>,
}

impl DotenvFile {
    /// Parse an explicit env file. A missing file is an error.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let env_file_error = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let iter = dotenvy::from_path_iter(path).map_err(env_file_error)?;
        let mut vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(env_file_error)?;
            vars.insert(key, value);
        }

        tracing::debug!(path = %path.display(), entries = vars.len(), "Env file parsed");
        Ok(Self {
            path: Some(path.to_path_buf()),
            vars,
        })
    }

    /// Look for `.env` in the working directory and its parents.
    ///
    /// No file found yields an empty source; a file that fails to parse is
    /// still an error.
    pub fn discover() -> ConfigResult<Self> {
        let cwd = env::current_dir().map_err(|e| ConfigError::EnvFile {
            path: PathBuf::from(DOTENV_FILENAME),
            source: dotenvy::Error::Io(e),
        })?;
        Self::discover_from(&cwd)
    }

    /// Look for `.env` in `start` and its ancestors; the nearest file wins.
    pub fn discover_from(start: &Path) -> ConfigResult<Self> {
        let found = start
            .ancestors()
            .map(|dir| dir.join(DOTENV_FILENAME))
            .find(|candidate| candidate.is_file());

        match found {
            Some(path) => Self::from_path(&path),
            None => {
                tracing::debug!("No .env file found, using process environment only");
                Ok(Self::default())
            }
        }
    }

    /// Path the pairs were read from, if any file was read.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for DotenvFile {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        self.vars.var(key)
    }
}

/// Two sources stacked: `primary` answers first, `fallback` fills the gaps.
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P: EnvSource, F: EnvSource> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: EnvSource, F: EnvSource> EnvSource for Layered<P, F> {
    fn var(&self, key: &str) -> ConfigResult<Option<String>> {
        match self.primary.var(key)? {
            Some(value) => Ok(Some(value)),
            None => self.fallback.var(key),
        }
    }
}
