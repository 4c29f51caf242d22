/**
 * Homeserver Wire Types
 *
 * Request and response bodies exchanged with the Matrix client-server API
 * (r0). Only the fields the bridge reads or writes are modelled; listings
 * are relayed as raw JSON.
 */

use serde::{Deserialize, Serialize};

/// Login type used when logging in as an application service user
pub const APPSERVICE_LOGIN_TYPE: &str = "m.login.application_service";

/// Number of users requested from the user directory
pub const USER_DIRECTORY_LIMIT: u32 = 50;

/// Homeserver address and credential, read from settings per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homeserver {
    pub base_url: String,
    pub app_token: String,
}

/// `POST /login` body
#[derive(Debug, Serialize)]
pub struct LoginBody<'a> {
    #[serde(rename = "type")]
    pub login_type: &'a str,
    pub user: &'a str,
}

/// `POST /login` response; only the token matters
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomVisibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomPreset {
    PublicChat,
    PrivateChat,
}

/// `POST /createRoom` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRoomBody {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub topic: String,
    pub visibility: RoomVisibility,
    pub preset: RoomPreset,
}

impl CreateRoomBody {
    pub fn new(name: impl Into<String>, topic: impl Into<String>, is_public: bool) -> Self {
        let (visibility, preset) = if is_public {
            (RoomVisibility::Public, RoomPreset::PublicChat)
        } else {
            (RoomVisibility::Private, RoomPreset::PrivateChat)
        };
        Self {
            name: name.into(),
            topic: topic.into(),
            visibility,
            preset,
        }
    }
}

/// `POST /createRoom` response
#[derive(Debug, Deserialize)]
pub struct CreateRoomResponse {
    pub room_id: String,
}

/// `POST /rooms/{roomId}/invite` body
#[derive(Debug, Serialize)]
pub struct InviteBody<'a> {
    pub user_id: &'a str,
}

/// `POST /user_directory/search` body
#[derive(Debug, Serialize)]
pub struct UserSearchBody<'a> {
    pub search_term: &'a str,
    pub limit: u32,
}
