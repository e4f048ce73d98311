use gloo_net::http::Request;

use crate::error::ApiError;
use crate::models::{Channel, Message};

fn channels_url(api_base: &str) -> String {
    format!("{api_base}/api/channels")
}

fn messages_url(api_base: &str, channel_id: i64) -> String {
    format!("{api_base}/api/messages/{channel_id}")
}

/// Fetches the channel listing.
///
/// HTTP status codes are never inspected: any resolved response goes
/// straight to the JSON decoder, and a non-JSON error body surfaces as
/// [`ApiError::Decode`].
pub async fn fetch_channels(api_base: &str) -> Result<Vec<Channel>, ApiError> {
    let resp = Request::get(&channels_url(api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    resp.json::<Vec<Channel>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetches every message in a channel, in the order the server sent them.
pub async fn fetch_messages(api_base: &str, channel_id: i64) -> Result<Vec<Message>, ApiError> {
    let resp = Request::get(&messages_url(api_base, channel_id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    resp.json::<Vec<Message>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Posts a message to a channel.
///
/// The response body and status are ignored; a request that resolves at
/// all counts as delivered.
pub async fn post_message(
    api_base: &str,
    channel_id: i64,
    message: &Message,
) -> Result<(), ApiError> {
    Request::post(&messages_url(api_base, channel_id))
        .json(message)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_listing_url() {
        assert_eq!(
            channels_url("http://localhost:3001"),
            "http://localhost:3001/api/channels"
        );
    }

    #[test]
    fn message_urls_interpolate_the_channel_id_as_decimal() {
        assert_eq!(
            messages_url("http://localhost:3001", 2),
            "http://localhost:3001/api/messages/2"
        );
        assert_eq!(
            messages_url("http://localhost:3001", 1234567),
            "http://localhost:3001/api/messages/1234567"
        );
    }
}
