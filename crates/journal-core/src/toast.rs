//! Transient user notifications.

use std::time::{Duration, Instant};

use serde::Serialize;

/// How long a toast stays visible after it is raised.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warn,
}

impl ToastKind {
    /// Lowercase label, used as a CSS class and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warn => "warn",
        }
    }
}

/// A single auto-dismissing notification. Only one exists at a time; a new
/// toast replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub raised_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warn, message)
    }

    /// Whether the toast is still on screen at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) < TOAST_TTL
    }
}
