/**
 * Homeserver Client
 *
 * The `MatrixApi` trait is the seam between the bridge and the Matrix
 * homeserver. `HttpMatrixApi` implements it with one `reqwest` call per
 * operation: no retries, no timeouts beyond the transport defaults.
 *
 * # Authentication
 *
 * Every call carries the application service token as a bearer token.
 * Calls made on behalf of a user add the `user_id` query parameter
 * (application service identity assertion).
 */

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::matrix::error::MatrixError;
use crate::backend::matrix::types::{
    CreateRoomBody, CreateRoomResponse, Homeserver, InviteBody, LoginBody, LoginResponse,
    UserSearchBody, APPSERVICE_LOGIN_TYPE, USER_DIRECTORY_LIMIT,
};

/// Path prefix of the client-server API
const CLIENT_API_PREFIX: [&str; 3] = ["_matrix", "client", "r0"];

/// Operations the bridge forwards to the homeserver
#[async_trait]
pub trait MatrixApi: Send + Sync {
    /// Log `matrix_user_id` in and return the access token
    async fn login(&self, hs: &Homeserver, matrix_user_id: &str) -> Result<String, MatrixError>;

    /// Rooms joined by `acting_as`, as returned by the homeserver
    async fn joined_rooms(&self, hs: &Homeserver, acting_as: &str) -> Result<Value, MatrixError>;

    /// Create a room and return its id
    async fn create_room(
        &self,
        hs: &Homeserver,
        acting_as: &str,
        body: &CreateRoomBody,
    ) -> Result<String, MatrixError>;

    async fn join_room(&self, hs: &Homeserver, acting_as: &str, room_id: &str) -> Result<(), MatrixError>;

    async fn leave_room(&self, hs: &Homeserver, acting_as: &str, room_id: &str) -> Result<(), MatrixError>;

    async fn invite_user(
        &self,
        hs: &Homeserver,
        acting_as: &str,
        room_id: &str,
        invitee: &str,
    ) -> Result<(), MatrixError>;

    /// User directory search results, as returned by the homeserver
    async fn search_users(
        &self,
        hs: &Homeserver,
        acting_as: &str,
        search_term: &str,
    ) -> Result<Value, MatrixError>;
}

/// `MatrixApi` over HTTP
#[derive(Debug, Clone, Default)]
pub struct HttpMatrixApi {
    http: reqwest::Client,
}

impl HttpMatrixApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{base_url}/_matrix/client/r0/{segments...}[?user_id=...]`
    fn endpoint(hs: &Homeserver, segments: &[&str], acting_as: Option<&str>) -> Result<Url, MatrixError> {
        let mut url = Url::parse(&hs.base_url).map_err(|e| {
            tracing::error!("Invalid homeserver URL '{}': {}", hs.base_url, e);
            MatrixError::invalid_url(&hs.base_url)
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Homeserver URL '{}' cannot take a path", hs.base_url);
                MatrixError::invalid_url(&hs.base_url)
            })?
            .pop_if_empty()
            .extend(CLIENT_API_PREFIX)
            .extend(segments);

        if let Some(user_id) = acting_as {
            url.query_pairs_mut().append_pair("user_id", user_id);
        }

        Ok(url)
    }

    /// Send the request; anything but a 2xx is an error
    async fn dispatch(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, MatrixError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Homeserver request to {} failed: {}", endpoint, e);
            MatrixError::request(endpoint, None, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Homeserver returned {} for {}: {}", status, endpoint, detail);
            return Err(MatrixError::request(endpoint, Some(status.as_u16()), detail));
        }

        tracing::debug!("Homeserver returned {} for {}", status, endpoint);
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T, MatrixError> {
        response.json::<T>().await.map_err(|e| {
            tracing::error!("Malformed homeserver response from {}: {}", endpoint, e);
            MatrixError::invalid_response(endpoint, e.to_string())
        })
    }

    /// Take one field out of a JSON object response
    fn take_field(value: Value, field: &str, endpoint: &str) -> Result<Value, MatrixError> {
        match value {
            Value::Object(mut map) => map.remove(field).ok_or_else(|| {
                tracing::error!("Homeserver response from {} lacks '{}'", endpoint, field);
                MatrixError::invalid_response(endpoint, format!("missing field '{}'", field))
            }),
            _ => Err(MatrixError::invalid_response(endpoint, "expected a JSON object")),
        }
    }

    async fn post_empty(&self, hs: &Homeserver, url: Url) -> Result<(), MatrixError> {
        let endpoint = url.path().to_string();
        let request = self
            .http
            .post(url)
            .bearer_auth(&hs.app_token)
            .json(&serde_json::json!({}));
        self.dispatch(request, &endpoint).await?;
        Ok(())
    }
}

#[async_trait]
impl MatrixApi for HttpMatrixApi {
    async fn login(&self, hs: &Homeserver, matrix_user_id: &str) -> Result<String, MatrixError> {
        let url = Self::endpoint(hs, &["login"], None)?;
        let endpoint = url.path().to_string();
        let body = LoginBody {
            login_type: APPSERVICE_LOGIN_TYPE,
            user: matrix_user_id,
        };

        let request = self.http.post(url).bearer_auth(&hs.app_token).json(&body);
        let response = self.dispatch(request, &endpoint).await?;

        let login: LoginResponse = Self::decode(response, &endpoint)
            .await
            .map_err(|_| MatrixError::Authentication)?;

        login
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                tracing::error!("Login for {} returned no access token", matrix_user_id);
                MatrixError::Authentication
            })
    }

    async fn joined_rooms(&self, hs: &Homeserver, acting_as: &str) -> Result<Value, MatrixError> {
        let url = Self::endpoint(hs, &["joined_rooms"], Some(acting_as))?;
        let endpoint = url.path().to_string();

        let request = self.http.get(url).bearer_auth(&hs.app_token);
        let response = self.dispatch(request, &endpoint).await?;
        let body: Value = Self::decode(response, &endpoint).await?;

        Self::take_field(body, "joined_rooms", &endpoint)
    }

    async fn create_room(
        &self,
        hs: &Homeserver,
        acting_as: &str,
        body: &CreateRoomBody,
    ) -> Result<String, MatrixError> {
        let url = Self::endpoint(hs, &["createRoom"], Some(acting_as))?;
        let endpoint = url.path().to_string();

        let request = self.http.post(url).bearer_auth(&hs.app_token).json(body);
        let response = self.dispatch(request, &endpoint).await?;
        let created: CreateRoomResponse = Self::decode(response, &endpoint).await?;

        Ok(created.room_id)
    }

    async fn join_room(&self, hs: &Homeserver, acting_as: &str, room_id: &str) -> Result<(), MatrixError> {
        let url = Self::endpoint(hs, &["join", room_id], Some(acting_as))?;
        self.post_empty(hs, url).await
    }

    async fn leave_room(&self, hs: &Homeserver, acting_as: &str, room_id: &str) -> Result<(), MatrixError> {
        let url = Self::endpoint(hs, &["rooms", room_id, "leave"], Some(acting_as))?;
        self.post_empty(hs, url).await
    }

    async fn invite_user(
        &self,
        hs: &Homeserver,
        acting_as: &str,
        room_id: &str,
        invitee: &str,
    ) -> Result<(), MatrixError> {
        let url = Self::endpoint(hs, &["rooms", room_id, "invite"], Some(acting_as))?;
        let endpoint = url.path().to_string();

        let request = self
            .http
            .post(url)
            .bearer_auth(&hs.app_token)
            .json(&InviteBody { user_id: invitee });
        self.dispatch(request, &endpoint).await?;
        Ok(())
    }

    async fn search_users(
        &self,
        hs: &Homeserver,
        acting_as: &str,
        search_term: &str,
    ) -> Result<Value, MatrixError> {
        let url = Self::endpoint(hs, &["user_directory", "search"], Some(acting_as))?;
        let endpoint = url.path().to_string();

        let request = self.http.post(url).bearer_auth(&hs.app_token).json(&UserSearchBody {
            search_term,
            limit: USER_DIRECTORY_LIMIT,
        });
        let response = self.dispatch(request, &endpoint).await?;
        let body: Value = Self::decode(response, &endpoint).await?;

        Self::take_field(body, "results", &endpoint)
    }
}
