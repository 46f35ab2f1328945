//! Defines the read-only application state and the upload event
//! handler.

use crate::conf::Settings;
use crate::notification::{Notification, Publisher};
use crate::trigger::Trigger;
use anyhow::{anyhow, Result};
use envy::from_env;
use lambda_runtime::LambdaEvent;
use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// The line logged after each published notification.
pub const PUBLISHED_LOG_LINE: &str = "Upload notification published";

/// An App is an initialized application state, derived from
/// settings.
pub struct App {
    /// The original settings.
    pub settings: Settings,

    /// The notification published on every invocation.
    pub notification: Notification,
}

impl App {
    /// Initialize an App instance given a settings struct. Consumes
    /// the settings struct.
    pub fn new(settings: Settings) -> Self {
        let notification = Notification::from_settings(&settings);
        App {
            settings,
            notification,
        }
    }

    /// Handle an upload event by publishing the notification. The
    /// event is only traced, so any payload produces the same
    /// publish call. Publishing errors are returned as-is.
    #[instrument(skip_all, fields(request_id = %event.context.request_id))]
    pub async fn handle<P: Publisher>(
        &self,
        event: LambdaEvent<Value>,
        publisher: &P,
    ) -> Result<()> {
        for trigger in Trigger::from(&event.payload) {
            debug!(?trigger, "Upload record received");
        }
        let message_id = publisher.publish(&self.notification).await?;
        debug!(?message_id, "Publish call returned");
        info!("{}", PUBLISHED_LOG_LINE);
        Ok(())
    }
}

/// Global App instance.
static CURRENT: OnceCell<App> = OnceCell::new();

/// Initialize the global App instance.
pub fn init() -> Result<()> {
    let settings = from_env()?;
    let app = App::new(settings);
    CURRENT
        .set(app)
        .map_err(|_| anyhow!("app::CURRENT was already initialized"))
}

/// Get the current App instance, or panic if it hasn't been
/// initialized.
pub fn current() -> &'static App {
    CURRENT.get().expect("app is not initialized")
}
