/**
 * Room API Types
 *
 * Request bodies (validated before dispatch) and response bodies for the
 * room, call and user endpoints.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::{require_non_empty, SharedError};

/// `POST /api/rooms` body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("name", &self.name)
    }

    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or("")
    }

    pub fn is_public(&self) -> bool {
        self.public.unwrap_or(false)
    }
}

/// `POST /api/rooms/{roomId}/invite` body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InviteRequest {
    pub user_id: String,
}

impl InviteRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("user_id", &self.user_id)
    }
}

/// `GET /api/users` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSearchQuery {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoomsResponse {
    pub rooms: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoomCreatedResponse {
    pub room_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CallResponse {
    pub call_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_room_defaults() {
        let request: CreateRoomRequest = serde_json::from_str(r#"{"name": "Test"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.topic(), "");
        assert!(!request.is_public());
    }

    #[test]
    fn test_create_room_accepts_nulls() {
        let request: CreateRoomRequest =
            serde_json::from_str(r#"{"name": "Test", "topic": null, "public": null}"#).unwrap();
        assert_eq!(request.topic(), "");
        assert!(!request.is_public());
    }

    #[test]
    fn test_create_room_requires_name() {
        let missing: Result<CreateRoomRequest, _> = serde_json::from_str(r#"{"topic": "x"}"#);
        assert!(missing.is_err());

        let blank: CreateRoomRequest = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_invite_requires_user_id() {
        let request: InviteRequest = serde_json::from_str(r#"{"user_id": ""}"#).unwrap();
        assert!(request.validate().is_err());

        let request: InviteRequest =
            serde_json::from_str(r#"{"user_id": "@bob:example.org"}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}
