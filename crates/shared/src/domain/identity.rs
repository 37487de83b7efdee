use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};

/// Identity published by the auth gate for the rest of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub user_id: i32,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl CurrentUser {
    pub fn require_admin(&self, action: &str) -> Result<(), ServiceError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(format!(
                "only admins are allowed to {action}"
            )))
        }
    }
}
