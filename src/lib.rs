//! Map interactive fuzzy-finder choices back to your own values.
//!
//! `fzpick` streams the string form of arbitrary items to an external
//! fuzzy-finder process (`fzf` by default), blocks while the user picks, and
//! returns the original items rather than their display strings. It does no
//! matching and draws no UI of its own; the finder is an opaque collaborator
//! that turns "these labels, these flags" into "those chosen labels".
//!
//! ```no_run
//! use fzpick::{FzfPrompt, Options};
//!
//! # fn main() -> fzpick::Result<()> {
//! let prompt = FzfPrompt::new()?;
//! let picked: Vec<i32> = prompt.select(0..10, &Options::new().flag("multi"))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod prompt;

pub use config::Config;
pub use error::{PickError, Result};
pub use options::{Delimiter, Options};
pub use prompt::{FzfPrompt, Selection};
