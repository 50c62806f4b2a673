use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

const SUCCESS_TTL: Duration = Duration::from_secs(2);
const FAILURE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Failure,
}

/// Transient notification shown in the status line.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub style: ToastStyle,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub shown_at: Instant,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastStyle::Success, title.into(), message.into())
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ToastStyle::Failure, title.into(), message.into())
    }

    fn new(style: ToastStyle, title: String, message: String) -> Self {
        Self {
            style,
            title,
            message,
            timestamp: Local::now(),
            shown_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        let ttl = match self.style {
            ToastStyle::Success => SUCCESS_TTL,
            ToastStyle::Failure => FAILURE_TTL,
        };
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}
