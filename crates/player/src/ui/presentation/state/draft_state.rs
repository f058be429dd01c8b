//! Draft session state shared through Dioxus context
//!
//! The session itself is UI-agnostic: it notifies its observers after
//! every action. This wrapper subscribes once and bumps a version
//! signal in that callback, so components that read through `with`
//! re-render exactly when the session changes.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::{DraftSession, PointSetStore};
use crate::ports::outbound::PlatformPort;
use crate::state::PlatformStorageAdapter;

type Session = DraftSession<PlatformStorageAdapter>;

/// Context wrapper around one drafting session
#[derive(Clone)]
pub struct DraftState {
    session: Rc<RefCell<Session>>,
    version: Signal<u64>,
}

impl DraftState {
    /// Rebuild the session from platform storage and wire its change
    /// notification into Dioxus reactivity.
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        let store = PointSetStore::new(PlatformStorageAdapter::new(platform));
        let session = Rc::new(RefCell::new(DraftSession::new(store)));
        let version = Signal::new(0u64);
        session.borrow_mut().on_change(move || {
            let mut version = version;
            let next = *version.peek() + 1;
            version.set(next);
        });
        Self { session, version }
    }

    /// Read access that subscribes the calling scope to session changes.
    pub fn with<R>(&self, read: impl FnOnce(&Session) -> R) -> R {
        let _ = self.version.read();
        read(&self.session.borrow())
    }

    /// Run one mutating action. Observers fire synchronously, so the
    /// version bump lands before this returns.
    pub fn act(&self, action: impl FnOnce(&mut Session)) {
        action(&mut self.session.borrow_mut());
    }
}
