//! Defines a _trigger_, a summary of one upload record found in the
//! invocation payload. Triggers are only traced; the notification
//! doesn't depend on them.

use aws_lambda_events::event::s3::S3Event;
use serde_json::Value;

/// An uploaded object, as described by an S3 event record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub event_name: Option<String>,
    pub bucket: Option<String>,
    pub key: Option<String>,
}

impl Trigger {
    /// Builds a vector of triggers from the records inside an S3
    /// event. Payloads that aren't S3 events yield no triggers.
    pub fn from(payload: &Value) -> Vec<Self> {
        serde_json::from_value::<S3Event>(payload.clone())
            .map(|event| {
                event
                    .records
                    .into_iter()
                    .map(|record| Trigger {
                        event_name: record.event_name,
                        bucket: record.s3.bucket.name,
                        key: record.s3.object.key,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
