use serde::{Deserialize, Serialize};

/// Permission level of a signed-in user within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// Payload of `UPDATE_USER`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "ROLE")]
    pub role: Role,
    pub email: String,
    pub name: String,
    pub org_id: String,
    pub org_name: String,
    #[serde(rename = "profilePictureURL")]
    pub profile_picture_url: String,
    pub user_id: String,
}

impl UserProfile {
    /// Profile record the store holds once nobody is signed in.
    pub fn signed_out() -> Self {
        Self::default()
    }
}

/// Payload of `UPDATE_USER_ORG_ROLE`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrgRole {
    pub org: Option<Vec<Organization>>,
    pub role: Option<Role>,
}

/// Payload of `UPDATE_USER_ACCESS_REFRESH_ACCESS_TOKEN`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    pub access_jwt: String,
    pub refresh_jwt: String,
}

/// Payload of `LOGGED_IN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedIn {
    pub is_logged_in: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signed_out_profile_wire_shape() {
        let value = serde_json::to_value(UserProfile::signed_out()).unwrap();
        assert_eq!(
            value,
            json!({
                "ROLE": "VIEWER",
                "email": "",
                "name": "",
                "orgId": "",
                "orgName": "",
                "profilePictureURL": "",
                "userId": "",
            })
        );
    }

    #[test]
    fn test_empty_org_role_serializes_nulls() {
        let value = serde_json::to_value(OrgRole::default()).unwrap();
        assert_eq!(value, json!({ "org": null, "role": null }));
    }

    #[test]
    fn test_role_parses_upper_case() {
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(serde_json::to_value(Role::Viewer).unwrap(), "VIEWER");
    }
}
