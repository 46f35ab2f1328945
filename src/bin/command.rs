use anyhow::{Context, Result};
use lambda_runtime::LambdaEvent;
use s3_upload_notifier::{app, client};
use serde_json::Value;

/// Publish the upload notification once, outside of Lambda.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;

    let event = LambdaEvent::new(Value::Null, Default::default());
    app::current()
        .handle(event, client::current())
        .await
        .context("Failed to publish the upload notification")?;

    Ok(())
}
