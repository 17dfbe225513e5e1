//! User API group payload types.

use serde::{Deserialize, Serialize};

/// A user record as the server reports it. Any field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "imgUrl")]
    pub img_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_with_missing_fields() {
        let user: User = serde_json::from_str(r#"{"id":1,"username":"a"}"#).unwrap();
        assert_eq!(user.id, Some(1));
        assert_eq!(user.username.as_deref(), Some("a"));
        assert!(user.email.is_none());
        assert!(user.img_url.is_none());
    }

    #[test]
    fn test_img_url_wire_name() {
        let user: User =
            serde_json::from_str(r#"{"imgUrl":"https://example.com/img.jpg"}"#).unwrap();
        assert_eq!(user.img_url.as_deref(), Some("https://example.com/img.jpg"));

        let encoded = serde_json::to_string(&user).unwrap();
        assert!(encoded.contains("\"imgUrl\""));
    }
}
