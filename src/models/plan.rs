use serde::{Deserialize, Serialize};

/// A subscription plan offered by the service.
///
/// `price` is a decimal string as serialized by the backend ("49.00");
/// it is formatted for display rather than parsed into a float.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub max_users: u32,
}

impl Plan {
    pub fn display_price(&self) -> String {
        format!("${}/mo", self.price)
    }

    pub fn display_max_users(&self) -> String {
        match self.max_users {
            1 => "1 user".to_string(),
            n => format!("up to {} users", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_list() {
        let json = r#"[
            {"id": 1, "name": "Free", "price": "0.00", "max_users": 1},
            {"id": 2, "name": "Pro", "price": "49.00", "max_users": 10}
        ]"#;

        let plans: Vec<Plan> = serde_json::from_str(json).expect("Failed to parse plan list");
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1].name, "Pro");
        assert_eq!(plans[1].display_price(), "$49.00/mo");
        assert_eq!(plans[0].display_max_users(), "1 user");
        assert_eq!(plans[1].display_max_users(), "up to 10 users");
    }
}
