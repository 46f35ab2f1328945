//! Defines the outbound notification and the seam through which it
//! is published.

use crate::conf::Settings;
use anyhow::{Context, Result};
use aws_sdk_sns::Client;
use std::future::Future;

/// The message sent to the topic on every upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub topic_arn: String,
    pub subject: String,
    pub message: String,
}

impl Notification {
    /// Build the notification from the settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Notification {
            topic_arn: settings.notification_topic_arn.clone(),
            subject: settings.notification_subject.clone(),
            message: settings.notification_message.clone(),
        }
    }
}

/// Something that can deliver a notification to its topic. Resolves
/// to the message id assigned by the service, if any.
pub trait Publisher {
    fn publish(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}

impl Publisher for Client {
    async fn publish(&self, notification: &Notification) -> Result<Option<String>> {
        let response = Client::publish(self)
            .topic_arn(&notification.topic_arn)
            .subject(&notification.subject)
            .message(&notification.message)
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to publish notification to topic {:?}",
                    notification.topic_arn
                )
            })?;
        Ok(response.message_id().map(String::from))
    }
}
