//! Locates a named configuration file across prioritised lookup places.
//!
//! A [`ConfigFileSelector`] holds a target filename and an ordered list of
//! [`LookupPlace`] values. Symbolic places (home directory, user config
//! directory, working directory) are resolved to concrete absolute
//! directories at call time; literal places are used as given. The selector
//! never reads file contents, it only resolves existence and path.
//!
//! ```no_run
//! use config_selector::{ConfigFileSelector, LookupPlace};
//!
//! # fn run() -> config_selector::SelectorResult<()> {
//! let mut selector = ConfigFileSelector::new(
//!     "app.conf",
//!     [LookupPlace::CurrentPath, LookupPlace::HomeDir],
//! );
//! selector.use_etc_program_folder("myapp");
//!
//! let path = selector.select_first_known_place()?;
//! println!("loading configuration from {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! [`ConfigFileSelector::select_path`] additionally honours a caller-supplied
//! override: an absolute override is tried verbatim before the configured
//! search, while a relative override replaces the filename for that call.

mod error;
mod place;
mod selector;

pub use error::{SelectorError, SelectorResult};
pub use place::{LookupPlace, LookupPlaces};
pub use selector::{ConfigFileSelector, ConfigFileSelectorBuilder, Selection, file_exists};
