//! Location-fragment state shared between the router, the application
//! loop, and view-held handles.
//!
//! `Location` plays the role a browser's `location.hash` plays for a
//! single-page app: a single mutable fragment cell plus a change signal
//! that navigation observers subscribe to. Writing the fragment never
//! dispatches directly; dispatch happens when a subscriber observes the
//! change, so navigation requests issued mid-dispatch queue instead of
//! re-entering the dispatcher.

use tokio::sync::watch;

use crate::router::pattern;

/// Shared hash-fragment cell with change notification.
///
/// The stored fragment is either empty (root) or `#/segment[/...]`.
/// Writing an identical fragment is a no-op and does not notify.
#[derive(Clone)]
pub struct Location {
    tx: watch::Sender<String>,
}

impl Location {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(String::new());
        Self { tx }
    }

    /// Current raw fragment, `""` for the root.
    pub fn fragment(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Replace the fragment, notifying subscribers if it changed.
    pub fn set_fragment(&self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        self.tx.send_if_modified(|current| {
            if *current != fragment {
                *current = fragment;
                true
            } else {
                false
            }
        });
    }

    /// Subscribe to fragment changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

/// The router reference handed to view factories.
///
/// Cheap to clone and safe for a view to retain: it can request
/// navigation and read the current fragment, nothing more.
#[derive(Clone)]
pub struct RouterHandle {
    location: Location,
}

impl RouterHandle {
    pub(crate) fn new(location: Location) -> Self {
        Self { location }
    }

    /// Request navigation to `path`.
    ///
    /// The path is normalized and written into the location fragment;
    /// dispatch happens asynchronously when the change is observed.
    /// `""` and `"/"` map to the empty fragment, not `#/`.
    pub fn navigate(&self, path: &str) {
        self.location.set_fragment(pattern::fragment_for(path));
    }

    /// Current raw fragment.
    pub fn fragment(&self) -> String {
        self.location.fragment()
    }
}
