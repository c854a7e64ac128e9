//! Rebuild on change
//!
//! A polling watcher observes the directory of every token source. Events touching a source start a
//! debounce window; once no further event arrives within it, the whole pipeline runs again. Runs
//! never overlap because they happen on the same thread that drains the event channel. A failing
//! run is logged and watching goes on.

use crate::pipeline::{self, BuildError};
use notify::{Config, Event, PollWatcher, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use swatch_config::SwatchConfig;
use tracing::{debug, error, info, warn};

/// Files whose changes trigger a rebuild, and the directories to poll for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTargets {
    files: BTreeSet<PathBuf>,
    directories: BTreeSet<PathBuf>,
}

impl WatchTargets {
    pub fn new<'a>(sources: impl IntoIterator<Item = &'a PathBuf>) -> Self {
        let mut files = BTreeSet::new();
        let mut directories = BTreeSet::new();
        for source in sources {
            let directory = match source.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let directory = directory.canonicalize().unwrap_or(directory);
            if let Some(name) = source.file_name() {
                files.insert(directory.join(name));
            }
            directories.insert(directory);
        }
        Self { files, directories }
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    /// Whether the event touches one of the sources
    pub fn is_relevant(&self, event: &Event) -> bool {
        event.paths.iter().any(|path| self.files.contains(path))
    }
}

/// Build once, then rebuild on every settled change until the watcher goes away
pub fn run(config: &SwatchConfig) -> Result<(), BuildError> {
    rebuild(config);

    let (tx, rx) = channel();
    let mut watcher = PollWatcher::new(
        tx,
        Config::default().with_poll_interval(config.watch.poll_interval()),
    )
    .map_err(|source| BuildError::Watch {
        path: PathBuf::from("."),
        source,
    })?;

    let targets = WatchTargets::new(&config.sources);
    for directory in targets.directories() {
        watcher
            .watch(directory, RecursiveMode::NonRecursive)
            .map_err(|source| BuildError::Watch {
                path: directory.to_path_buf(),
                source,
            })?;
        debug!(directory = %directory.display(), "watching");
    }
    info!("watching for changes (press Ctrl+C to stop)...");

    loop {
        match rx.recv() {
            Ok(Ok(event)) if targets.is_relevant(&event) => {
                settle(&rx, config);
                info!("change detected, rebuilding...");
                rebuild(config);
            }
            Ok(Ok(_)) => continue,
            Ok(Err(err)) => warn!("watch error: {}", err),
            Err(_) => break,
        }
    }

    Ok(())
}

/// Swallow events until none arrives for a full debounce window
fn settle(rx: &Receiver<notify::Result<Event>>, config: &SwatchConfig) {
    loop {
        match rx.recv_timeout(config.watch.debounce()) {
            Ok(_) => continue,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}

fn rebuild(config: &SwatchConfig) {
    if let Err(err) = pipeline::build(config) {
        error!("build failed: {}", err);
    }
}
