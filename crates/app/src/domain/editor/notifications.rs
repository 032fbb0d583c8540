//! Admin notifications.

use mockall::automock;
use tracing::{info, warn};

/// How prominently a notification is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Neutral confirmation.
    #[default]
    Default,

    /// Something went wrong.
    Destructive,
}

/// A short message shown to the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Headline, e.g. "Product created".
    pub title: String,

    /// Detail line, usually the error text.
    pub description: Option<String>,

    /// Styling of the notification.
    pub variant: Variant,
}

impl Notification {
    /// Confirmation with a title only.
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: Variant::Default,
        }
    }

    /// Destructive notification carrying the failure detail.
    #[must_use]
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: Variant::Destructive,
        }
    }
}

/// Where the editor reports outcomes.
#[automock]
pub trait Notifier: Send + Sync {
    /// Show `notification` to the admin.
    fn notify(&self, notification: Notification);
}

/// Notifier that writes every notification to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let description = notification.description.unwrap_or_default();

        match notification.variant {
            Variant::Default => info!(title = %notification.title, "{description}"),
            Variant::Destructive => warn!(title = %notification.title, "{description}"),
        }
    }
}
