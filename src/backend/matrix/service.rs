/**
 * Matrix Service
 *
 * Maps host users onto Matrix users and forwards each operation to the
 * homeserver through a `MatrixApi`. Settings are read on every call so a
 * configuration change takes effect on the next request.
 */

use std::sync::Arc;

use serde_json::Value;

use crate::backend::error::BackendError;
use crate::backend::matrix::client::MatrixApi;
use crate::backend::matrix::types::{CreateRoomBody, Homeserver};
use crate::backend::middleware::SessionUser;
use crate::backend::settings::ConfigService;

/// Matrix user id for a host user: `@{uid}:{server_name}`
pub fn matrix_user_id(uid: &str, server_name: &str) -> String {
    format!("@{}:{}", uid, server_name)
}

#[derive(Clone)]
pub struct MatrixService {
    config: ConfigService,
    api: Arc<dyn MatrixApi>,
}

impl MatrixService {
    pub fn new(config: ConfigService, api: Arc<dyn MatrixApi>) -> Self {
        Self { config, api }
    }

    /// Homeserver target plus the Matrix id `user` acts as
    async fn resolve(&self, user: &SessionUser) -> Result<(Homeserver, String), BackendError> {
        let settings = self.config.snapshot().await?;
        let user_id = matrix_user_id(&user.uid, &settings.matrix_server_name);
        let homeserver = Homeserver {
            base_url: settings.matrix_server_url,
            app_token: settings.matrix_app_token,
        };
        Ok((homeserver, user_id))
    }

    /// Exchange the host session for a Matrix access token
    pub async fn authenticate(&self, user: &SessionUser) -> Result<String, BackendError> {
        let (hs, user_id) = self.resolve(user).await?;
        tracing::info!("Logging {} in to {}", user_id, hs.base_url);

        let token = self.api.login(&hs, &user_id).await?;
        tracing::info!("Obtained Matrix access token for {}", user_id);
        Ok(token)
    }

    pub async fn user_rooms(&self, user: &SessionUser) -> Result<Value, BackendError> {
        let (hs, user_id) = self.resolve(user).await?;
        Ok(self.api.joined_rooms(&hs, &user_id).await?)
    }

    pub async fn create_room(
        &self,
        user: &SessionUser,
        name: &str,
        topic: &str,
        is_public: bool,
    ) -> Result<String, BackendError> {
        let (hs, user_id) = self.resolve(user).await?;
        let body = CreateRoomBody::new(name, topic, is_public);

        let room_id = self.api.create_room(&hs, &user_id, &body).await?;
        tracing::info!("{} created room {}", user_id, room_id);
        Ok(room_id)
    }

    pub async fn join_room(&self, user: &SessionUser, room_id: &str) -> Result<(), BackendError> {
        let (hs, user_id) = self.resolve(user).await?;
        self.api.join_room(&hs, &user_id, room_id).await?;
        tracing::info!("{} joined {}", user_id, room_id);
        Ok(())
    }

    pub async fn leave_room(&self, user: &SessionUser, room_id: &str) -> Result<(), BackendError> {
        let (hs, user_id) = self.resolve(user).await?;
        self.api.leave_room(&hs, &user_id, room_id).await?;
        tracing::info!("{} left {}", user_id, room_id);
        Ok(())
    }

    /// Directory search for `search_term`
    ///
    /// A blank term searches for the server name instead, which every local
    /// user id contains, so the result lists the homeserver's users.
    pub async fn known_users(&self, user: &SessionUser, search_term: &str) -> Result<Value, BackendError> {
        let (hs, user_id) = self.resolve(user).await?;
        let term = match search_term.trim() {
            "" => self.config.matrix_server_name().await?,
            term => term.to_string(),
        };
        Ok(self.api.search_users(&hs, &user_id, &term).await?)
    }

    pub async fn invite_user(
        &self,
        user: &SessionUser,
        room_id: &str,
        invitee: &str,
    ) -> Result<(), BackendError> {
        let (hs, user_id) = self.resolve(user).await?;
        self.api.invite_user(&hs, &user_id, room_id, invitee).await?;
        tracing::info!("{} invited {} to {}", user_id, invitee, room_id);
        Ok(())
    }
}
