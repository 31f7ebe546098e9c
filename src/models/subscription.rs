use serde::{Deserialize, Serialize};

use super::Plan;

/// A user's subscription to a plan, as returned by the subscription endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub plan: Option<Plan>,
    // The backend serializes this field as "currencey"
    #[serde(rename = "currencey", default)]
    pub currency: String,
    #[serde(default)]
    pub amount: f64,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub canceled_at: Option<String>,
    pub status: Option<String>,
    pub source_id: Option<String>,
}

impl Subscription {
    pub fn plan_name(&self) -> &str {
        self.plan.as_ref().map(|p| p.name.as_str()).unwrap_or("No plan")
    }

    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }
}

/// Result of fetching the current user's subscription.
///
/// The endpoint answers 200 in both cases, using a `has_subscription: false`
/// flag rather than a 404 when no subscription exists.
#[derive(Debug, Clone)]
pub enum SubscriptionStatus {
    None,
    Active(Subscription),
}

impl SubscriptionStatus {
    /// Parse the subscription endpoint's response body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        #[derive(Deserialize)]
        struct NoSubscription {
            has_subscription: bool,
        }

        if let Ok(flag) = serde_json::from_str::<NoSubscription>(body) {
            if !flag.has_subscription {
                return Ok(SubscriptionStatus::None);
            }
        }

        serde_json::from_str::<Subscription>(body).map(SubscriptionStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absent_subscription() {
        let body = r#"{"detail": "No subscription found.", "has_subscription": false}"#;
        let status = SubscriptionStatus::from_json(body).expect("Failed to parse flag body");
        assert!(matches!(status, SubscriptionStatus::None));
    }

    #[test]
    fn test_parse_active_subscription() {
        let body = r#"{
            "id": 7,
            "user": 3,
            "plan": {"id": 2, "name": "Pro", "price": "49.00", "max_users": 10},
            "currencey": "usd",
            "amount": 49.0,
            "started_at": "2025-11-02T09:30:00Z",
            "ended_at": null,
            "canceled_at": null,
            "status": "active",
            "source_id": "sub_1QXo2e"
        }"#;

        let status = SubscriptionStatus::from_json(body).expect("Failed to parse subscription");
        match status {
            SubscriptionStatus::Active(sub) => {
                assert_eq!(sub.plan_name(), "Pro");
                assert_eq!(sub.currency, "usd");
                assert_eq!(sub.display_status(), "active");
            }
            SubscriptionStatus::None => panic!("Expected an active subscription"),
        }
    }
}
