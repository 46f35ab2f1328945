//! Defines the global SNS client.

use anyhow::{anyhow, Result};
use aws_config::meta::region::RegionProviderChain;
use aws_config::{from_env, SdkConfig};
use aws_sdk_sns::Client;
use once_cell::sync::OnceCell;
use std::env;

/// Global SNS client instance.
static CURRENT: OnceCell<Client> = OnceCell::new();

/// Prefix a scheme to an endpoint given without one.
fn endpoint_with_scheme(endpoint_url: String) -> String {
    if endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://") {
        endpoint_url
    } else {
        format!("https://{}", endpoint_url)
    }
}

/// Load the SDK configuration, pointed at `endpoint_url` if
/// given. The region is still taken from the environment, since SNS
/// signs with it; `us-east-1` is used only when none is configured.
pub async fn sdk_config(endpoint_url: Option<String>) -> SdkConfig {
    if let Some(endpoint_url) = endpoint_url {
        from_env()
            .endpoint_url(endpoint_with_scheme(endpoint_url))
            .region(RegionProviderChain::default_provider().or_else("us-east-1"))
            .load()
            .await
    } else {
        from_env().load().await
    }
}

/// Initialize the global SNS client.
pub async fn init() -> Result<()> {
    let sns_config = sdk_config(env::var("AWS_ENDPOINT_URL").ok()).await;
    let client = Client::new(&sns_config);
    CURRENT
        .set(client)
        .map_err(|_| anyhow!("client::CURRENT was already initialized"))
}

/// Get the current SNS client instance, or panic if it hasn't been initialized.
pub fn current() -> &'static Client {
    CURRENT.get().expect("client is not initialized")
}
