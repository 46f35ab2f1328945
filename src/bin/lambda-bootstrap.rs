use anyhow::{anyhow, Context, Result};
use lambda_runtime::{run, service_fn, LambdaEvent};
use s3_upload_notifier::{app, client};
use serde_json::Value;

/// Publish the upload notification for an S3 event.
async fn function_handler(event: LambdaEvent<Value>) -> Result<()> {
    let request_id = event.context.request_id.clone();
    app::current()
        .handle(event, client::current())
        .await
        .with_context(|| format!("Failed to handle invocation {:?}", request_id))
}

/// Run an AWS Lambda function that listens to S3 upload events and
/// publishes a notification to an SNS topic for each invocation.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;

    run(service_fn(function_handler))
        .await
        .map_err(|e| anyhow!("{:?}", e))
}
