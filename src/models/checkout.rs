use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment mode accepted by the checkout-session endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// Recurring monthly billing
    Subscription,
    /// One-time charge
    Payment,
}

impl CheckoutMode {
    pub fn toggle(&self) -> Self {
        match self {
            CheckoutMode::Subscription => CheckoutMode::Payment,
            CheckoutMode::Payment => CheckoutMode::Subscription,
        }
    }
}

impl fmt::Display for CheckoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckoutMode::Subscription => write!(f, "monthly subscription"),
            CheckoutMode::Payment => write!(f, "one-time payment"),
        }
    }
}

/// A hosted-checkout session minted by the payment endpoint.
///
/// The session id is consumed by the payment provider's hosted page; this
/// client hands the user a URL to open rather than redirecting a browser.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "stripePublicKey")]
    pub public_key: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Base URL of the payment provider's hosted checkout page.
const HOSTED_CHECKOUT_BASE: &str = "https://checkout.stripe.com/c/pay";

impl CheckoutSession {
    /// URL of the hosted checkout page for this session.
    pub fn hosted_url(&self) -> String {
        format!("{}/{}", HOSTED_CHECKOUT_BASE, self.session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checkout_session() {
        let json = r#"{
            "sessionId": "cs_test_a1B2c3",
            "stripePublicKey": "pk_test_abcdef",
            "mode": "subscription"
        }"#;

        let session: CheckoutSession =
            serde_json::from_str(json).expect("Failed to parse checkout session");
        assert_eq!(session.session_id, "cs_test_a1B2c3");
        assert_eq!(
            session.hosted_url(),
            "https://checkout.stripe.com/c/pay/cs_test_a1B2c3"
        );
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CheckoutMode::Subscription).unwrap(),
            "\"subscription\""
        );
        assert_eq!(
            serde_json::to_string(&CheckoutMode::Payment).unwrap(),
            "\"payment\""
        );
    }
}
