//! Configuration file selection across prioritised lookup places.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{SelectorError, SelectorResult};
use crate::place::{LookupPlace, LookupPlaces};

mod builder;

pub use builder::ConfigFileSelectorBuilder;

/// Locates a configuration file by name across an ordered list of lookup
/// places.
///
/// The search order is the registration order; symbolic places that cannot
/// be resolved on the current platform are skipped silently. Instances are
/// single-owner and perform no internal synchronisation.
///
/// # Examples
///
/// ```no_run
/// use config_selector::{ConfigFileSelector, LookupPlace};
///
/// # fn run() -> config_selector::SelectorResult<()> {
/// let selector = ConfigFileSelector::new(
///     "app.conf",
///     [LookupPlace::CurrentPath, LookupPlace::HomeDir],
/// );
/// let path = selector.select_first_known_place()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileSelector {
    filename: String,
    places: LookupPlaces,
}

/// Outcome of [`ConfigFileSelector::select_path`].
///
/// Carries the filename that was effective for the call alongside the
/// selected path, so a relative override never has to mutate the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Selection {
    /// Full path of the selected file.
    pub path: PathBuf,
    /// The filename that was effective for the call: the configured filename,
    /// unless a relative override replaced it.
    pub filename: String,
}

impl ConfigFileSelector {
    /// Creates a selector for `filename` with zero or more pre-registered
    /// lookup places.
    ///
    /// The filename is not validated; an empty filename is legal but will
    /// never resolve to an existing file. Pre-registered places are taken as
    /// given, without deduplication.
    pub fn new(filename: impl Into<String>, places: impl IntoIterator<Item = LookupPlace>) -> Self {
        Self {
            filename: filename.into(),
            places: places.into_iter().collect(),
        }
    }

    /// Creates a builder initialised for `filename`.
    #[must_use]
    pub fn builder(filename: impl Into<String>) -> ConfigFileSelectorBuilder {
        ConfigFileSelectorBuilder::new(filename)
    }

    /// The filename this selector searches for.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The registered lookup places, in priority order.
    #[must_use]
    pub const fn places(&self) -> &LookupPlaces {
        &self.places
    }

    /// Registers an additional lookup place unless an equal value is already
    /// present. Registration is idempotent per value.
    pub fn add_lookup_place(&mut self, place: LookupPlace) {
        self.places.push(place);
    }

    /// Registers the `/etc` directory as a lookup place.
    pub fn use_etc(&mut self) {
        self.places.push(LookupPlace::Etc);
    }

    /// Registers `/etc/<program_name>` as a lookup place.
    pub fn use_etc_program_folder(&mut self, program_name: &str) {
        self.places
            .push(LookupPlace::Path(Path::new("/etc").join(program_name)));
    }

    /// Resolves every lookup place to an absolute directory, in registration
    /// order.
    ///
    /// Symbolic places whose platform lookup fails are dropped without
    /// shifting the relative order of the survivors; the symbolic markers
    /// themselves never appear in the output.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::InvalidPath`] when a literal entry cannot be
    /// absolutised. Unlike an unavailable platform directory, this signals a
    /// malformed entry and aborts the whole call.
    pub fn lookup_folder_list(&self) -> SelectorResult<Vec<PathBuf>> {
        let mut folders = Vec::new();
        for place in &self.places {
            match place.resolve()? {
                Some(dir) => folders.push(dir),
                None => tracing::debug!(place = %place, "lookup place unavailable, skipped"),
            }
        }
        Ok(folders)
    }

    /// Builds the full candidate file path for every resolved folder, in
    /// order.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::lookup_folder_list`] failures unchanged.
    pub fn lookup_file_path_list(&self) -> SelectorResult<Vec<PathBuf>> {
        self.file_path_list_for(&self.filename)
    }

    /// Returns the first existing candidate path, in registration order.
    ///
    /// A candidate that does not exist is skipped; a stat failure for any
    /// other reason aborts the search immediately. Infrastructure errors are
    /// never silently conflated with a clean miss.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::NotFound`] naming the filename and every
    /// attempted path when no candidate exists, [`SelectorError::Io`] when a
    /// stat fails for a reason other than non-existence, or
    /// [`SelectorError::InvalidPath`] from folder resolution.
    pub fn select_first_known_place(&self) -> SelectorResult<PathBuf> {
        self.select_first_for(&self.filename)
    }

    /// Resolves a configuration path, honouring a caller-supplied override.
    ///
    /// - An empty override delegates entirely to
    ///   [`Self::select_first_known_place`] with the configured filename.
    /// - An absolute override is tried verbatim: if it exists it is returned
    ///   as-is without consulting the configured search list; if it is
    ///   missing, or its stat fails, the configured search runs instead.
    /// - Any other override (a bare filename or relative path) replaces the
    ///   filename for this call and is searched across every configured
    ///   lookup place, not just the working directory.
    ///
    /// The selector itself is never mutated; [`Selection::filename`] reports
    /// the filename that was effective for the call.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::select_first_known_place`].
    pub fn select_path(&self, override_path: &str) -> SelectorResult<Selection> {
        if override_path.is_empty() {
            return self.select_configured();
        }
        let requested = Path::new(override_path);
        if requested.is_absolute() {
            match file_exists(requested) {
                Ok(true) => {
                    return Ok(Selection {
                        path: requested.to_path_buf(),
                        filename: self.filename.clone(),
                    });
                }
                Ok(false) => tracing::debug!(
                    path = %requested.display(),
                    "override path does not exist, falling back to configured search"
                ),
                Err(err) => tracing::warn!(
                    path = %requested.display(),
                    error = %err,
                    "override path could not be checked, falling back to configured search"
                ),
            }
            return self.select_configured();
        }
        self.select_first_for(override_path).map(|path| Selection {
            path,
            filename: override_path.to_owned(),
        })
    }

    fn select_configured(&self) -> SelectorResult<Selection> {
        self.select_first_known_place().map(|path| Selection {
            path,
            filename: self.filename.clone(),
        })
    }

    fn file_path_list_for(&self, filename: &str) -> SelectorResult<Vec<PathBuf>> {
        Ok(self
            .lookup_folder_list()?
            .into_iter()
            .map(|folder| folder.join(filename))
            .collect())
    }

    fn select_first_for(&self, filename: &str) -> SelectorResult<PathBuf> {
        let candidates = self.file_path_list_for(filename)?;
        // An empty filename leaves every candidate a bare directory; it can
        // never name a file.
        if filename.is_empty() {
            return Err(SelectorError::not_found(filename, candidates));
        }
        for candidate in &candidates {
            if file_exists(candidate)? {
                return Ok(candidate.clone());
            }
        }
        Err(SelectorError::not_found(filename, candidates))
    }
}

impl fmt::Display for ConfigFileSelector {
    /// Renders as `ConfigFileSelector{<filename>, [<places>]}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigFileSelector{{{}, [{}]}}", self.filename, self.places)
    }
}

/// Tests whether `path` exists.
///
/// A clean miss is `Ok(false)`; any other stat failure is surfaced so
/// callers can distinguish a missing file from a broken environment.
///
/// # Errors
///
/// Returns [`SelectorError::Io`] when the stat fails for a reason other than
/// non-existence, for example a permission failure on a parent directory.
pub fn file_exists(path: &Path) -> SelectorResult<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(SelectorError::io(path, err)),
    }
}
