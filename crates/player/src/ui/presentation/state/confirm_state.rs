//! Pending-confirmation state for destructive actions
//!
//! Destructive actions (currently only point-set deletion) route
//! through a shared confirm dialog instead of firing immediately. The
//! pending request holds the action as a callback; it runs only when
//! the user confirms.

use std::rc::Rc;

use dioxus::prelude::*;

/// A destructive action awaiting user confirmation
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    action: Rc<dyn Fn()>,
}

/// Shared slot for at most one pending confirmation
#[derive(Clone, Copy)]
pub struct ConfirmState {
    pending: Signal<Option<ConfirmRequest>>,
}

impl ConfirmState {
    pub fn new() -> Self {
        Self {
            pending: Signal::new(None),
        }
    }

    pub fn pending(&self) -> Option<ConfirmRequest> {
        self.pending.read().clone()
    }

    /// Stage an action behind the confirm dialog. A newer request
    /// replaces any pending one.
    pub fn request(
        &mut self,
        title: String,
        body: String,
        confirm_label: &str,
        action: impl Fn() + 'static,
    ) {
        self.pending.set(Some(ConfirmRequest {
            title,
            body,
            confirm_label: confirm_label.to_string(),
            action: Rc::new(action),
        }));
    }

    /// Close the dialog, running the staged action when confirmed.
    pub fn resolve(&mut self, confirmed: bool) {
        let request = self.pending.write().take();
        if confirmed {
            if let Some(request) = request {
                (request.action)();
            }
        }
    }
}

impl Default for ConfirmState {
    fn default() -> Self {
        Self::new()
    }
}
