//! Interactive selection through an external fuzzy finder.
//!
//! One [`FzfPrompt`] call is one synchronous round trip: derive a label for
//! every item, stream the labels to the finder process, block until the user
//! confirms or cancels, then map the chosen labels back to the original
//! items. The finder owns the terminal UI and the matching; this module only
//! does the plumbing and the label-to-item bookkeeping.

use std::collections::HashMap;
use std::fmt::Display;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::Config;
use crate::error::{PickError, Result};
use crate::options::{Delimiter, Options};

/// Finder executable used when none is configured.
const DEFAULT_FINDER: &str = "fzf";

/// Result of a [`FzfPrompt::prompt`] call.
///
/// Exactly one chosen item comes back as [`Selection::Single`]; zero or two
/// and more come back as [`Selection::Multiple`], in the order the finder
/// printed them. Callers that want a uniform shape should use
/// [`FzfPrompt::select`] or [`FzfPrompt::select_one`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Single(T),
    Multiple(Vec<T>),
}

impl<T> Selection<T> {
    /// Number of chosen items.
    pub fn len(&self) -> usize {
        match self {
            Selection::Single(_) => 1,
            Selection::Multiple(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into a vector, regardless of arity.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Selection::Single(item) => vec![item],
            Selection::Multiple(items) => items,
        }
    }
}

/// Interactive selector backed by an external fuzzy-finder process.
///
/// Each call spawns one finder process and blocks until the user is done.
/// The prompt itself holds no per-call state, so a single instance can be
/// reused for any number of selections.
#[derive(Debug, Clone)]
pub struct FzfPrompt {
    command: PathBuf,
    default_options: Options,
    delimiter: Delimiter,
}

impl FzfPrompt {
    /// Locate the stock `fzf` on PATH.
    pub fn new() -> Result<Self> {
        let command = which::which(DEFAULT_FINDER)
            .map_err(|_| PickError::FinderNotFound(DEFAULT_FINDER.to_string()))?;
        Ok(Self::with_command(command))
    }

    /// Use an explicit finder executable.
    ///
    /// The path is taken as-is; a bad path surfaces as a launch error on the
    /// first selection.
    pub fn with_command(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            default_options: Options::new(),
            delimiter: Delimiter::default(),
        }
    }

    /// Resolve the finder executable and default options from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let name = config.finder();
        let command = which::which(&name).map_err(|_| PickError::FinderNotFound(name))?;
        Ok(Self::with_command(command).default_options(config.default_options()))
    }

    /// Flags passed on every invocation, before per-call options. When the
    /// finder resolves conflicting flags, the per-call ones win.
    pub fn default_options(mut self, options: Options) -> Self {
        self.default_options = options;
        self
    }

    /// Label separator used on the finder's stdin and stdout.
    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Interactive selection with the arity policy of interactive use: a
    /// lone choice comes back as [`Selection::Single`], anything else
    /// (cancellation included) as [`Selection::Multiple`].
    pub fn prompt<T, I>(&self, items: I, options: &Options) -> Result<Selection<T>>
    where
        T: Display,
        I: IntoIterator<Item = T>,
    {
        let mut chosen = self.select(items, options)?;
        if chosen.len() == 1
            && let Some(item) = chosen.pop()
        {
            return Ok(Selection::Single(item));
        }
        Ok(Selection::Multiple(chosen))
    }

    /// Let the user choose among `items`, labelled by their `Display` form.
    ///
    /// Always returns a sequence: empty when the user cancelled or nothing
    /// matched, in finder output order otherwise.
    pub fn select<T, I>(&self, items: I, options: &Options) -> Result<Vec<T>>
    where
        T: Display,
        I: IntoIterator<Item = T>,
    {
        self.select_with(items, options, |item| item.to_string())
    }

    /// [`FzfPrompt::select`] with an explicit label function.
    ///
    /// `label` must produce a distinct string per item for the mapping back
    /// to be unambiguous. On a collision the item constructed last wins and
    /// earlier ones are dropped.
    pub fn select_with<T, I, F>(&self, items: I, options: &Options, label: F) -> Result<Vec<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> String,
    {
        let mut labels = Vec::new();
        let mut table: HashMap<String, T> = HashMap::new();
        for item in items {
            let text = label(&item);
            labels.push(text.clone());
            table.insert(text, item);
        }

        let chosen = self.invoke(&labels, options)?;

        // Every chosen label must resolve; a miss means the finder printed
        // something it was never given.
        chosen
            .into_iter()
            .map(|label| match table.remove(&label) {
                Some(item) => Ok(item),
                None => Err(PickError::UnknownSelection(label)),
            })
            .collect()
    }

    /// Let the user choose at most one of `items`.
    ///
    /// Single-select mode is forced on the finder, so more than one choice
    /// is impossible by construction. `None` means the user cancelled or
    /// nothing matched.
    pub fn select_one<T, I>(&self, items: I, options: &Options) -> Result<Option<T>>
    where
        T: Display,
        I: IntoIterator<Item = T>,
    {
        self.select_one_with(items, options, |item| item.to_string())
    }

    /// [`FzfPrompt::select_one`] with an explicit label function.
    pub fn select_one_with<T, I, F>(
        &self,
        items: I,
        options: &Options,
        label: F,
    ) -> Result<Option<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> String,
    {
        // Appended last, so it wins over any --multi in the defaults or the
        // per-call options.
        let options = options.clone().flag("no-multi");
        let mut chosen = self.select_with(items, &options, label)?;
        Ok(chosen.pop())
    }

    /// One round trip: spawn the finder, stream the labels, collect the
    /// chosen ones.
    fn invoke(&self, labels: &[String], options: &Options) -> Result<Vec<String>> {
        let mut command = Command::new(&self.command);
        command
            .args(self.default_options.args())
            .args(options.args())
            .args(self.delimiter.finder_flags())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped());

        debug!(
            command = %self.command.display(),
            candidates = labels.len(),
            "launching finder"
        );

        let mut child = command.spawn().map_err(|source| PickError::Launch {
            command: self.command.display().to_string(),
            source,
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            let sep = [self.delimiter.byte()];
            for label in labels {
                let written = stdin
                    .write_all(label.as_bytes())
                    .and_then(|()| stdin.write_all(&sep));
                match written {
                    Ok(()) => {}
                    // The user may confirm before every label is written;
                    // the finder closing its end is not an error.
                    Err(err) if err.kind() == io::ErrorKind::BrokenPipe => break,
                    Err(err) => return Err(err.into()),
                }
            }
        }

        let output = child.wait_with_output()?;

        // 0: something was chosen, 1: nothing matched, 130: user cancelled.
        // Anything else is a real failure.
        match output.status.code() {
            Some(0) | Some(1) | Some(130) => {}
            _ => {
                return Err(PickError::FinderFailed {
                    command: self.command.display().to_string(),
                    status: output.status,
                });
            }
        }

        let stdout = String::from_utf8(output.stdout)?;
        let sep = char::from(self.delimiter.byte());
        let chosen: Vec<String> = stdout
            .split(sep)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();

        debug!(
            chosen = chosen.len(),
            status = ?output.status.code(),
            "finder returned"
        );

        Ok(chosen)
    }
}
