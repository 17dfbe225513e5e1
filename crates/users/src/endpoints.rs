//! Endpoint values for the user API group.

use std::collections::HashMap;

use bytes::Bytes;
use serde_json::{Map, Value};
use wirecall_client::{Endpoint, HttpMethod, MultipartPart};

/// One variant per supported user call.
#[derive(Debug, Clone)]
pub enum UserEndpoint {
    GetAllUsers,
    GetUser { id: i64 },
    SetCurrentUserData,
    UploadProfileImage { image: Bytes },
}

impl Endpoint for UserEndpoint {
    fn base_url(&self) -> &str {
        "https://first-group-example.com/api/"
    }

    fn path(&self) -> String {
        match self {
            Self::GetAllUsers => "/users".to_string(),
            Self::GetUser { id } => format!("/user/{id}/"),
            Self::SetCurrentUserData => "/user/update/".to_string(),
            Self::UploadProfileImage { .. } => "/user/update/photo/".to_string(),
        }
    }

    fn method(&self) -> HttpMethod {
        match self {
            Self::GetAllUsers | Self::GetUser { .. } => HttpMethod::Get,
            Self::SetCurrentUserData | Self::UploadProfileImage { .. } => HttpMethod::Post,
        }
    }

    fn headers(&self) -> Option<HashMap<String, String>> {
        let mut headers = HashMap::from([(
            "Content-Type".to_string(),
            "application/json; charset=UTF-8".to_string(),
        )]);

        match self {
            Self::SetCurrentUserData | Self::UploadProfileImage { .. } => {
                // Mutations require an authenticated caller.
                headers.insert("Authorization".to_string(), "Bearer YourAuthTokenHere".to_string());
            }
            _ => {}
        }

        Some(headers)
    }

    fn query_params(&self) -> Option<Map<String, Value>> {
        match self {
            Self::GetAllUsers => {
                let mut params = Map::new();
                params.insert("sources".to_string(), Value::from("abc-news"));
                params.insert("limit".to_string(), Value::from(50));
                Some(params)
            }
            _ => None,
        }
    }

    fn multipart_parts(&self) -> Option<Vec<MultipartPart>> {
        match self {
            Self::UploadProfileImage { image } => Some(vec![MultipartPart::new(
                "profile_image",
                "profile_image.jpg",
                image.clone(),
            )]),
            _ => None,
        }
    }
}
