//! Builder for [`ConfigFileSelector`].

use std::path::Path;

use crate::place::{LookupPlace, LookupPlaces};

use super::ConfigFileSelector;

/// Builder for [`ConfigFileSelector`].
///
/// Additions go through the deduplicating mutator, so registering the same
/// place twice is a no-op, exactly as with
/// [`ConfigFileSelector::add_lookup_place`].
///
/// # Examples
///
/// ```no_run
/// use config_selector::{ConfigFileSelector, LookupPlace};
///
/// # fn run() -> config_selector::SelectorResult<()> {
/// let selector = ConfigFileSelector::builder("app.conf")
///     .place(LookupPlace::CurrentPath)
///     .place(LookupPlace::HomeDir)
///     .etc_program_folder("myapp")
///     .build();
/// let path = selector.select_first_known_place()?;
/// println!("using {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFileSelectorBuilder {
    filename: String,
    places: LookupPlaces,
}

impl ConfigFileSelectorBuilder {
    /// Creates a builder initialised for `filename`.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            places: LookupPlaces::new(),
        }
    }

    /// Registers a lookup place.
    #[must_use]
    pub fn place(mut self, place: impl Into<LookupPlace>) -> Self {
        self.places.push(place.into());
        self
    }

    /// Registers several lookup places, preserving iteration order.
    #[must_use]
    pub fn places<I, P>(mut self, places: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<LookupPlace>,
    {
        for place in places {
            self.places.push(place.into());
        }
        self
    }

    /// Registers the `/etc` directory.
    #[must_use]
    pub fn etc(mut self) -> Self {
        self.places.push(LookupPlace::Etc);
        self
    }

    /// Registers `/etc/<program_name>`.
    #[must_use]
    pub fn etc_program_folder(mut self, program_name: &str) -> Self {
        self.places
            .push(LookupPlace::Path(Path::new("/etc").join(program_name)));
        self
    }

    /// Finalises the builder.
    #[must_use]
    pub fn build(self) -> ConfigFileSelector {
        ConfigFileSelector {
            filename: self.filename,
            places: self.places,
        }
    }
}
