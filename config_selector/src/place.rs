//! Lookup places: the symbolic or literal directories searched for a file.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{SelectorError, SelectorResult};

/// A single directory source searched for the target file.
///
/// Symbolic variants stand for platform locations that are detected at
/// resolution time; [`LookupPlace::Path`] carries a literal relative or
/// absolute path and is used as given. Values are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupPlace {
    /// The user's home directory, detected at resolution time.
    HomeDir,
    /// The platform user configuration directory, detected at resolution
    /// time. On Unix this honours `XDG_CONFIG_HOME`.
    UserConfig,
    /// The process working directory.
    CurrentPath,
    /// The POSIX `/etc` directory.
    Etc,
    /// A literal relative or absolute path.
    Path(PathBuf),
}

impl LookupPlace {
    /// Resolves this place to an absolute directory.
    ///
    /// Symbolic places whose platform lookup fails resolve to `Ok(None)`;
    /// callers drop such entries rather than treating them as failures.
    /// Literal places that cannot be made absolute are malformed entries and
    /// fail hard.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidPath`] when a literal path cannot be
    /// absolutised (for example an empty path).
    pub fn resolve(&self) -> SelectorResult<Option<PathBuf>> {
        match self {
            Self::HomeDir => Ok(absolutise_detected(home_dir())),
            Self::UserConfig => Ok(absolutise_detected(user_config_dir())),
            Self::CurrentPath => Ok(absolutise_detected(env::current_dir().ok())),
            Self::Etc => absolutise_literal(Path::new("/etc")).map(Some),
            Self::Path(path) => absolutise_literal(path).map(Some),
        }
    }
}

impl fmt::Display for LookupPlace {
    /// Renders the symbolic token (`Home`, `.config`, `./`, `/etc`) or the
    /// literal path, as used in diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeDir => f.write_str("Home"),
            Self::UserConfig => f.write_str(".config"),
            Self::CurrentPath => f.write_str("./"),
            Self::Etc => f.write_str("/etc"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<PathBuf> for LookupPlace {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for LookupPlace {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for LookupPlace {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

/// Home directory, preferring the environment over the platform database so
/// tests and callers can steer resolution.
fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// User configuration directory. `XDG_CONFIG_HOME` wins when set and
/// non-empty, matching the platform convention.
fn user_config_dir() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Absolutisation for detected platform directories: a failure here is an
/// environment limitation, so the entry is dropped rather than surfaced.
fn absolutise_detected(dir: Option<PathBuf>) -> Option<PathBuf> {
    dir.and_then(|path| std::path::absolute(&path).ok())
}

/// Absolutisation for literal entries: a failure here means the entry itself
/// is malformed and aborts the whole lookup.
fn absolutise_literal(path: &Path) -> SelectorResult<PathBuf> {
    std::path::absolute(path).map_err(|err| SelectorError::invalid_path(path, err))
}

/// Ordered list of lookup places; order is search priority.
///
/// The deduplicating mutator [`LookupPlaces::push`] gives the list set-like
/// uniqueness over an ordered sequence: registering the same value twice is
/// a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupPlaces(Vec<LookupPlace>);

impl LookupPlaces {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `place` unless an equal value is already present.
    pub fn push(&mut self, place: LookupPlace) {
        if !self.0.contains(&place) {
            self.0.push(place);
        }
    }

    /// Number of registered places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no places are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `place` is already registered.
    #[must_use]
    pub fn contains(&self, place: &LookupPlace) -> bool {
        self.0.contains(place)
    }

    /// Iterates over the places in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, LookupPlace> {
        self.0.iter()
    }
}

impl fmt::Display for LookupPlaces {
    /// Joins the token renderings with `", "`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, place) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{place}")?;
        }
        Ok(())
    }
}

impl FromIterator<LookupPlace> for LookupPlaces {
    /// Collects places in order. Unlike [`LookupPlaces::push`] this performs
    /// no deduplication; uniqueness is a property of the mutator only.
    fn from_iter<I: IntoIterator<Item = LookupPlace>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LookupPlaces {
    type Item = LookupPlace;
    type IntoIter = std::vec::IntoIter<LookupPlace>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LookupPlaces {
    type Item = &'a LookupPlace;
    type IntoIter = std::slice::Iter<'a, LookupPlace>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
