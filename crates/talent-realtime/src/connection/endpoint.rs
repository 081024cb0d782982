//! Chat socket URL derivation.

use url::Url;

use talent_core::AppError;
use talent_core::result::AppResult;
use talent_core::types::RoomId;

/// Build the socket URL for a room from the HTTP API origin.
///
/// `http` becomes `ws` and `https` becomes `wss`; any path prefix of the
/// origin is kept. The token is form-urlencoded into the `token` query
/// parameter. A relative or non-HTTP origin is a configuration error.
pub fn ws_url(origin: &str, room: RoomId, token: &str) -> AppResult<String> {
    let parsed = Url::parse(origin)?;
    let scheme = match parsed.scheme() {
        "http" => "ws",
        "https" => "wss",
        other => {
            return Err(AppError::configuration(format!(
                "API origin must be http or https, got '{other}'"
            )));
        }
    };

    let rest = origin
        .split_once("://")
        .map(|(_, rest)| rest.trim_end_matches('/'))
        .unwrap_or_default();
    let token: String = url::form_urlencoded::byte_serialize(token.as_bytes()).collect();

    Ok(format!("{scheme}://{rest}/chat/ws/{room}?token={token}"))
}
