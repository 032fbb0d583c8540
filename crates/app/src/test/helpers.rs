//! Test Helpers

use std::sync::Mutex;

use rust_decimal::Decimal;

use crate::{
    domain::{
        editor::{Notification, Notifier, Variant},
        products::models::{Product, ProductId},
        uploads::ImageFile,
    },
    rest::RestError,
};

pub(crate) fn make_product(id: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        description: None,
        base_price: Decimal::from(100),
        transport_cost: Decimal::from(10),
        images: Vec::new(),
        is_available: true,
        created_at: None,
    }
}

pub(crate) fn rejected(status: u16) -> RestError {
    RestError::Rejected {
        status,
        message: "unavailable".to_string(),
    }
}

pub(crate) fn image(file_name: &str) -> ImageFile {
    ImageFile {
        file_name: file_name.to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

/// Notifier that remembers everything it was asked to show.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub(crate) fn all(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|notifications| notifications.clone())
            .unwrap_or_default()
    }

    pub(crate) fn destructive(&self) -> Vec<Notification> {
        self.all()
            .into_iter()
            .filter(|notification| notification.variant == Variant::Destructive)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
