//! REST implementation of the backend traits.
//!
//! Talks to the hosted persistence service: record CRUD over
//! `rest/v1/tours` and `rest/v1/tour_images`, binary object storage with
//! public-URL retrieval under `storage/v1`, and session primitives under
//! `auth/v1`. Every request carries the public API key; record and
//! storage requests additionally carry the session's bearer token.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;

use panotour_models::{Tour, TourId, TourImage, UserId};

use crate::backend::{AuthBackend, AuthUser, Session, TourBackend};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::records::{ImageInsert, ImageRecord, TourInsert, TourPatch, TourRecord};

/// REST client for the hosted persistence service.
pub struct RestClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: RwLock<Option<Session>>,
}

impl RestClient {
    /// Creates a client with the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: RwLock::new(None),
        }
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    fn rest_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, collection)
    }

    fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base_url, endpoint)
    }

    fn storage_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.base_url, self.config.bucket, key
        )
    }

    /// Public URL for an object previously uploaded under `key`.
    pub fn public_object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.base_url, self.config.bucket, key
        )
    }

    /// Bearer token for record/storage requests: the session token when
    /// signed in, the public key otherwise.
    async fn bearer(&self) -> String {
        let session = self.session.read().await;
        session
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_else(|| self.config.api_key.clone())
    }

    fn authed(&self, request: reqwest::RequestBuilder, bearer: &str) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }

    /// Turns a non-success response into an [`ClientError::Api`] carrying
    /// the upstream body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        Self::check(response).await
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn open_session(&self, payload: AuthPayload) -> Result<Session> {
        let session = Session {
            access_token: payload.access_token,
            user: AuthUser {
                id: payload.user.id,
                email: payload.user.email,
                name: payload.user.user_metadata.name,
            },
        };
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }
}

/// Session payload returned by the auth endpoints.
#[derive(Debug, Deserialize)]
struct AuthPayload {
    access_token: String,
    user: WireUser,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: UserId,
    email: String,
    #[serde(default)]
    user_metadata: WireUserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct WireUserMetadata {
    name: Option<String>,
}

#[async_trait]
impl TourBackend for RestClient {
    async fn tours_for_user(&self, user: &UserId) -> Result<Vec<Tour>> {
        let bearer = self.bearer().await;
        let request = self
            .http
            .get(self.rest_url("tours"))
            .query(&[
                ("user_id", format!("eq.{}", user)),
                ("select", "*,tour_images(*)".to_string()),
                ("order", "created_at.desc".to_string()),
            ]);
        let response = self.send(self.authed(request, &bearer)).await?;
        let records: Vec<TourRecord> = Self::json_body(response).await?;

        debug!(count = records.len(), "fetched tour records");
        records.into_iter().map(TourRecord::into_tour).collect()
    }

    async fn insert_tour(&self, insert: TourInsert) -> Result<Tour> {
        let bearer = self.bearer().await;
        let request = self
            .http
            .post(self.rest_url("tours"))
            .header("Prefer", "return=representation")
            .json(&insert);
        let response = self.send(self.authed(request, &bearer)).await?;
        let mut records: Vec<TourRecord> = Self::json_body(response).await?;

        records
            .pop()
            .ok_or_else(|| ClientError::Parse("insert returned no record".to_string()))?
            .into_tour()
    }

    async fn update_tour(&self, id: &TourId, patch: &TourPatch) -> Result<()> {
        let bearer = self.bearer().await;
        let request = self
            .http
            .patch(self.rest_url("tours"))
            .query(&[("id", format!("eq.{}", id))])
            .json(patch);
        self.send(self.authed(request, &bearer)).await?;
        Ok(())
    }

    async fn delete_tour(&self, id: &TourId) -> Result<()> {
        let bearer = self.bearer().await;
        let request = self
            .http
            .delete(self.rest_url("tours"))
            .query(&[("id", format!("eq.{}", id))]);
        self.send(self.authed(request, &bearer)).await?;
        Ok(())
    }

    async fn insert_image(&self, insert: ImageInsert) -> Result<TourImage> {
        let bearer = self.bearer().await;
        let request = self
            .http
            .post(self.rest_url("tour_images"))
            .header("Prefer", "return=representation")
            .json(&insert);
        let response = self.send(self.authed(request, &bearer)).await?;
        let mut records: Vec<ImageRecord> = Self::json_body(response).await?;

        records
            .pop()
            .ok_or_else(|| ClientError::Parse("insert returned no record".to_string()))?
            .into_image()
    }

    async fn upload_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        let bearer = self.bearer().await;
        let request = self
            .http
            .post(self.storage_url(key))
            .header("Content-Type", content_type)
            .body(bytes);
        self.send(self.authed(request, &bearer)).await?;

        Ok(self.public_object_url(key))
    }
}

#[async_trait]
impl AuthBackend for RestClient {
    async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Session> {
        let request = self.http.post(self.auth_url("signup")).json(&json!({
            "email": email,
            "password": password,
            "data": { "name": name },
        }));
        let request = request.header("apikey", &self.config.api_key);
        let response = self.send(request).await?;
        let payload: AuthPayload = Self::json_body(response).await?;
        self.open_session(payload).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let request = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));
        let request = request.header("apikey", &self.config.api_key);
        let response = self.send(request).await?;
        let payload: AuthPayload = Self::json_body(response).await?;
        self.open_session(payload).await
    }

    async fn sign_out(&self) -> Result<()> {
        let bearer = {
            let session = self.session.read().await;
            match session.as_ref() {
                Some(s) => s.access_token.clone(),
                None => return Ok(()),
            }
        };
        let request = self.http.post(self.auth_url("logout"));
        self.send(self.authed(request, &bearer)).await?;
        *self.session.write().await = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>> {
        let session = self.session.read().await;
        Ok(session.as_ref().map(|s| s.user.clone()))
    }
}
