//! Wrapper functions for logging routing table events.
//!
//! Each function corresponds to one kind of event and is called from inside
//! the table as it changes. Events are only recorded once a subscriber is
//! installed, either by [`init_events`] or by the embedding program.

use std::{
    fs::{create_dir_all, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{event, Level};
use tracing_subscriber::FmtSubscriber;

use crate::{Ipv4Address, Route};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Could not open log file {path:?}: {source}")]
    File { path: PathBuf, source: io::Error },
    #[error("A global subscriber is already installed")]
    AlreadyInitialized(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs a global JSON subscriber that appends to
/// `dir/debug-<timestamp>.log`. Should be called once, at startup.
///
/// Returns the path of the log file.
pub fn init_events(dir: &Path) -> Result<PathBuf, LoggingError> {
    let file_path = dir.join(format!(
        "debug-{}.log",
        chrono::offset::Local::now().format("%y-%m-%d_%H-%M-%S")
    ));
    let file = create_dir_all(dir)
        .and_then(|_| {
            OpenOptions::new()
                .write(true)
                .append(true)
                .create(true)
                .open(&file_path)
        })
        .map_err(|source| LoggingError::File {
            path: file_path.clone(),
            source,
        })?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(Arc::new(file))
        .json()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(file_path)
}

/// A route was stored in an empty trie node.
pub fn route_added_event(route: &Route) {
    event!(Level::DEBUG, route = %route, "added route");
}

/// A route replaced the gateway of another route with the same prefix.
pub fn route_overwrite_event(route: &Route, previous: Ipv4Address) {
    event!(
        Level::WARN,
        network = %route.masked(),
        prefix = route.prefix(),
        previous = %previous,
        gateway = %route.gateway(),
        "overwriting route"
    );
}

/// The gateway stored for a route's prefix was cleared.
pub fn route_dropped_event(route: &Route, gateway: Ipv4Address) {
    event!(
        Level::DEBUG,
        network = %route.masked(),
        prefix = route.prefix(),
        gateway = %gateway,
        "dropped route"
    );
}

/// Every route still pointing at `gateway` was cleared.
pub fn gateway_dropped_event(gateway: Ipv4Address, count: usize) {
    event!(
        Level::INFO,
        gateway = %gateway,
        count,
        "dropped all routes to gateway"
    );
}
