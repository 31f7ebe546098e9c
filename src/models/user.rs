use serde::{Deserialize, Serialize};

/// Identity snapshot captured from the login response.
///
/// This is what the session store persists alongside the tokens. It is not
/// re-fetched automatically; the dashboard fetches the full `Profile` when
/// it needs current data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub user_id: i64,
    pub email: String,
    pub username: Option<String>,
}

/// Full account profile as returned by the profile endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    pub date_joined: Option<String>,
    pub image: Option<String>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

/// Editable subset of the profile sent to the edit-profile endpoint.
/// Email is read-only server-side and deliberately absent here.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_falls_back_to_email() {
        let profile = Profile {
            email: "sam@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "sam@example.com");

        let named = Profile {
            first_name: "Sam".to_string(),
            last_name: "Rivera".to_string(),
            ..Default::default()
        };
        assert_eq!(named.full_name(), "Sam Rivera");
    }
}
