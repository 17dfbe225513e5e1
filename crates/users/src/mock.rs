//! In-memory double for the user API.

use std::sync::Mutex;

use bytes::Bytes;
use wirecall_client::{ApiEnvelope, Result};

use crate::service::UserApi;
use crate::types::User;

/// Serves canned user data through the [`UserApi`] contract.
///
/// Useful for tests and UI previews: no network, no dispatcher. The mutable
/// "current user" lives behind a mutex so the mock satisfies the same
/// shared-reference call surface as the real service.
#[derive(Debug)]
pub struct MockUserService {
    current_user: Mutex<User>,
    users: Vec<User>,
}

fn mock_user(id: i64, username: &str) -> User {
    User {
        id: Some(id),
        username: Some(username.to_string()),
        email: Some(format!("{username}@example.com")),
        img_url: Some(format!("https://example.com/{username}.jpg")),
    }
}

impl Default for MockUserService {
    fn default() -> Self {
        Self {
            current_user: Mutex::new(mock_user(1, "currentUser")),
            users: vec![
                mock_user(1, "user1"),
                mock_user(2, "user2"),
                mock_user(3, "user3"),
            ],
        }
    }
}

impl MockUserService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserApi for MockUserService {
    async fn get_all_users(&self) -> Result<ApiEnvelope<Vec<User>>> {
        Ok(ApiEnvelope::success("All Users", self.users.clone()))
    }

    async fn get_user(&self, _id: i64) -> Result<ApiEnvelope<User>> {
        let current = self.current_user.lock().unwrap().clone();
        Ok(ApiEnvelope::success("The User", current))
    }

    async fn set_current_user_data(&self) -> Result<ApiEnvelope<User>> {
        let updated = mock_user(999, "mockuser999");
        *self.current_user.lock().unwrap() = updated.clone();
        Ok(ApiEnvelope::success("Current user data updated", updated))
    }

    async fn upload_profile_image(&self, _image: Bytes) -> Result<ApiEnvelope<User>> {
        let mut current = self.current_user.lock().unwrap();
        current.img_url = Some("https://example.com/newMockimg.jpg".to_string());
        Ok(ApiEnvelope::success(
            "Current user profile image updated",
            current.clone(),
        ))
    }
}
