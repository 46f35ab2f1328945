//! Defines configuration as read from the environment.

use serde::Deserialize;

/// Topic that receives upload notifications unless overridden.
pub const DEFAULT_TOPIC_ARN: &str = "arn:aws:sns:ap-south-1:327719058135:mailwithlambda";

/// Subject of the upload notification unless overridden.
pub const DEFAULT_SUBJECT: &str = "SomeThing Uploaded in S3";

/// Body of the upload notification unless overridden.
pub const DEFAULT_MESSAGE: &str =
    "Hi Himanshu, Go and Check the S3 Bucket. Something Uploaded by someone";

/// Default `notification_topic_arn` value.
fn default_topic_arn() -> String {
    String::from(DEFAULT_TOPIC_ARN)
}

/// Default `notification_subject` value.
fn default_subject() -> String {
    String::from(DEFAULT_SUBJECT)
}

/// Default `notification_message` value.
fn default_message() -> String {
    String::from(DEFAULT_MESSAGE)
}

/// The notifier publishes the same message to the same topic on
/// every upload. Each part of it may be overridden through
/// environment variables; none of them is derived from the event.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// The ARN of the SNS topic that receives the notification.
    #[serde(default = "default_topic_arn")]
    pub notification_topic_arn: String,

    /// The subject line of the notification.
    #[serde(default = "default_subject")]
    pub notification_subject: String,

    /// The body of the notification.
    #[serde(default = "default_message")]
    pub notification_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let settings: Settings =
            envy::from_iter(vec![(String::from("PATH"), String::from("/usr/bin"))]).unwrap();
        assert_eq!(settings.notification_topic_arn, DEFAULT_TOPIC_ARN);
        assert_eq!(settings.notification_subject, DEFAULT_SUBJECT);
        assert_eq!(settings.notification_message, DEFAULT_MESSAGE);
    }

    #[test]
    fn overrides_replace_defaults() {
        let settings: Settings = envy::from_iter(vec![
            (
                String::from("NOTIFICATION_TOPIC_ARN"),
                String::from("arn:aws:sns:us-east-1:000000000000:uploads"),
            ),
            (
                String::from("NOTIFICATION_SUBJECT"),
                String::from("New object"),
            ),
        ])
        .unwrap();
        assert_eq!(
            settings.notification_topic_arn,
            "arn:aws:sns:us-east-1:000000000000:uploads"
        );
        assert_eq!(settings.notification_subject, "New object");
        assert_eq!(settings.notification_message, DEFAULT_MESSAGE);
    }
}
