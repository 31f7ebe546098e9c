//! Expiry-claim extraction from an encoded bearer token.
//!
//! The functions here decode the token payload WITHOUT verifying any
//! signature. The result is used only to decide when to refresh
//! proactively; it must never feed an authorization decision. The server
//! is the sole authority on token validity.

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Buffer before expiry that triggers a refresh (5 minutes).
/// Avoids a request being rejected mid-flight by a token that expires
/// between the validity check and its actual use.
pub const REFRESH_MARGIN_SECS: i64 = 300;

#[derive(Deserialize)]
struct Claims {
    exp: i64,
}

/// Extract the `exp` claim (Unix seconds) from an encoded token.
///
/// Fails on anything that is not a three-segment token with a base64url
/// JSON payload carrying an `exp` claim. Callers treat failure as
/// "assume expired".
pub fn decode_expiry(token: &str) -> Result<i64> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| anyhow!("Token has no payload segment"))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .context("Token payload is not valid base64url")?;

    let claims: Claims =
        serde_json::from_slice(&bytes).context("Token payload carries no expiry claim")?;

    Ok(claims.exp)
}

/// Seconds of validity remaining beyond the refresh margin.
///
/// Positive means the token is still comfortably usable; zero or negative
/// means it is inside the margin, already expired, or undecodable.
pub fn seconds_past_margin(token: &str, now: i64) -> i64 {
    match decode_expiry(token) {
        Ok(exp) => exp - now - REFRESH_MARGIN_SECS,
        Err(_) => i64::MIN,
    }
}

#[cfg(test)]
pub(crate) fn make_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
    format!("{}.{}.sig", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_expiry() {
        let token = make_token(1_900_000_000);
        assert_eq!(decode_expiry(&token).unwrap(), 1_900_000_000);
    }

    #[test]
    fn test_decode_rejects_malformed_tokens() {
        assert!(decode_expiry("").is_err());
        assert!(decode_expiry("not-a-token").is_err());
        assert!(decode_expiry("a.!!!.c").is_err());

        // Valid base64 but no exp claim
        let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"1"}"#);
        assert!(decode_expiry(&format!("h.{}.s", payload)).is_err());
    }

    #[test]
    fn test_seconds_past_margin() {
        let now = 1_800_000_000;
        let fresh = make_token(now + 3600);
        let expiring = make_token(now + 60);
        let expired = make_token(now - 60);

        assert_eq!(seconds_past_margin(&fresh, now), 3600 - REFRESH_MARGIN_SECS);
        assert!(seconds_past_margin(&expiring, now) < 0);
        assert!(seconds_past_margin(&expired, now) < 0);
        assert!(seconds_past_margin("garbage", now) < 0);
    }
}
