//! Share link encoding.
//!
//! A share link is the sheet page URL with `?share=<token>` appended to its
//! fragment route. The token is the lz-string "encoded URI component"
//! compression of the character JSON.

use serde_json::{Map, Value};
use url::{form_urlencoded, Url};

use mrsheet_domain::CharacterRecord;

use super::error::ShareLinkError;

const SHARE_PARAM: &str = "share";
const DEFAULT_ROUTE: &str = "#/";

/// The record as a JSON object, minus top-level keys starting with `_` or `$`.
pub fn shareable_state(record: &CharacterRecord) -> Result<Map<String, Value>, ShareLinkError> {
    let Value::Object(mut state) = serde_json::to_value(record)? else {
        return Ok(Map::new());
    };
    state.retain(|key, _| !key.starts_with('_') && !key.starts_with('$'));
    Ok(state)
}

/// `<origin><path><route>?share=<token>` for the page at `base`.
///
/// `<route>` is the part of `base`'s fragment before any `?`, `#/` if empty.
pub fn build_share_url(record: &CharacterRecord, base: &str) -> Result<String, ShareLinkError> {
    let base = Url::parse(base)?;
    let route = base
        .fragment()
        .and_then(|fragment| fragment.split('?').next())
        .filter(|route| !route.is_empty())
        .map(|route| format!("#{route}"))
        .unwrap_or_else(|| DEFAULT_ROUTE.to_string());

    let json = serde_json::to_string(&shareable_state(record)?)?;
    let token = lz_str::compress_to_encoded_uri_component(json.as_str());

    Ok(format!(
        "{}{}{route}?{SHARE_PARAM}={token}",
        base.origin().ascii_serialization(),
        base.path()
    ))
}

fn share_token(hash: &str) -> Option<String> {
    let (_, query) = hash.split_once('?')?;
    // Query text after a second '?' is ignored.
    let query = query.split('?').next().unwrap_or_default();
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

/// `true` if the fragment carries a non-empty `share` parameter.
pub fn has_share_param(hash: &str) -> bool {
    share_token(hash).is_some()
}

/// Decodes the character carried by a share fragment.
///
/// Returns `None` if there is no `share` parameter or it does not decode to a
/// character. The result is normalized with [`CharacterRecord::restored`].
pub fn extract_share_character(hash: &str) -> Option<CharacterRecord> {
    let token = share_token(hash)?;
    // Form decoding turns the token's '+' into ' '.
    let token = token.replace(' ', "+");

    let Some(utf16) = lz_str::decompress_from_encoded_uri_component(token.as_str()) else {
        tracing::warn!("Share link token does not decompress");
        return None;
    };
    let json = match String::from_utf16(&utf16) {
        Ok(json) if !json.is_empty() => json,
        Ok(_) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "Share link payload is not valid text");
            return None;
        }
    };
    match serde_json::from_str::<CharacterRecord>(&json) {
        Ok(record) => Some(record.restored()),
        Err(e) => {
            tracing::warn!(error = %e, "Share link payload is not a character");
            None
        }
    }
}
