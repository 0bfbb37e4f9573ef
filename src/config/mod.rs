//! Setup configuration.
//!
//! Settings come from, in increasing precedence: built-in defaults, an
//! optional `setup.yml` file, the `PYTHON_PATH` environment variable, and
//! command-line flags.

pub mod loader;
pub mod schema;

pub use loader::{discover, load_config, load_file, CONFIG_DIR, CONFIG_FILE};
pub use schema::{
    ConfigOverrides, SetupConfig, DEFAULT_MODEL, DEFAULT_PACKAGE, DEFAULT_TEST_SENTENCE,
};
