//! JSON loading over HTTP(S).

use reqwest::Client;
use serde_json::Value;

use crate::error::FetchError;
use crate::model::Target;

/// Fetch `target` with a single GET and parse the response body as JSON.
///
/// The body is buffered in full before parsing: chunks are concatenated in
/// arrival order and nothing is parsed until the stream ends. The response
/// status is not inspected, so an error document with a JSON body is
/// delivered like any other. No timeout is imposed here; configure one on
/// the [`Client`] if the transport defaults are not enough.
pub async fn load_json(client: &Client, target: &Target) -> Result<Value, FetchError> {
    let url = target.url();
    tracing::debug!(%url, "requesting JSON document");

    let response = client.get(&url).send().await?;
    let body = response.text().await?;

    Ok(serde_json::from_str(&body)?)
}
