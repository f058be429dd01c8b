//! Toast notification state
//!
//! Severity-tagged, auto-dismissing notifications. Dismissal runs
//! through the platform sleep port so the timer works identically on
//! desktop and wasm.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::ports::outbound::PlatformPort;

/// How long a toast stays on screen before auto-dismissal
pub const TOAST_DISMISS_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One on-screen notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub title: String,
    pub body: String,
}

/// Shared toast queue, newest last
#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    /// Show a toast and schedule its auto-dismissal.
    pub fn notify(
        &mut self,
        platform: &Arc<dyn PlatformPort>,
        severity: Severity,
        title: &str,
        body: &str,
    ) {
        let id = self.push(severity, title, body);
        let mut toasts = *self;
        let platform = platform.clone();
        spawn(async move {
            platform.sleep_ms(TOAST_DISMISS_MS).await;
            toasts.dismiss(id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, severity: Severity, title: &str, body: &str) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            severity,
            title: title.to_string(),
            body: body.to_string(),
        });
        id
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}
