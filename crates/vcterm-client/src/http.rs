//! HTTP client for the management endpoint

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use url::{ParseError, Url};

use vcterm_api::{
    AboutInfo, ChildCollection, EntityKind, ObjectContent, ObjectRef, TaskInfo, TaskRef, ViewRef,
    requests::{
        CollectPropertiesRequest, CreateViewRequest, RenameRequest, RetrieveChildrenRequest,
        RetrievePropertiesRequest,
    },
    responses::{ChildrenResponse, LoginResponse},
};

use crate::error::{ClientError, Result};
use crate::traits::{Connector, Credentials, InventoryClient};

/// Header carrying the session token after login
pub const SESSION_HEADER: &str = "x-session-id";

/// Transport settings for new sessions
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Accept self-signed or otherwise invalid certificates
    pub insecure: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Build the endpoint URL from what the operator typed as hostname
///
/// A bare host or `host:port` is assumed to be served over HTTPS.
///
/// # Errors
/// Returns an error if the result is not a valid URL.
pub fn endpoint_url(host: &str) -> Result<Url> {
    let host = host.trim();
    let url = if host.contains("://") {
        Url::parse(host)?
    } else {
        Url::parse(&format!("https://{host}"))?
    };
    Ok(url)
}

fn send_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Http(err)
    }
}

/// URL of an API endpoint below `base`
///
/// Keeps any path prefix of `base` and percent-encodes each segment, so ids
/// containing `/`, `?` or `#` stay inside their segment.
///
/// # Errors
/// Returns an error if `base` cannot carry a path.
pub fn api_url(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| ClientError::Url(ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push("api")
        .extend(segments);
    Ok(url)
}

/// Decode a JSON response body
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = check(response).await?.bytes().await.map_err(send_error)?;
    Ok(serde_json::from_slice(&body)?)
}

/// Turn non-success statuses into client errors
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized(message));
    }
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Authenticated HTTP session
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: Client,
    base_url: Url,
    session_id: String,
}

impl HttpInventoryClient {
    /// Log in and create a session
    ///
    /// # Errors
    /// Returns an error if the endpoint is unreachable or rejects the credentials.
    ///
    /// # Example
    /// ```no_run
    /// # use vcterm_client::{HttpInventoryClient, endpoint_url};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let url = endpoint_url("vc01.lab.local")?;
    /// let session = HttpInventoryClient::login(reqwest::Client::new(), url, "admin", "secret").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(client, password), fields(url = %base_url))]
    pub async fn login(client: Client, base_url: Url, user: &str, password: &str) -> Result<Self> {
        let url = api_url(&base_url, &["session"])?;
        let response = client
            .post(url)
            .basic_auth(user, Some(password))
            .send()
            .await
            .map_err(send_error)?;
        let login: LoginResponse = decode(response).await?;
        if login.session_id.is_empty() {
            return Err(ClientError::InvalidResponse(
                "login returned an empty session id".to_string(),
            ));
        }

        info!(user = %user, "session established");

        Ok(Self {
            client,
            base_url,
            session_id: login.session_id,
        })
    }

    /// Session token issued by the server
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        api_url(&self.base_url, segments)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(SESSION_HEADER, &self.session_id)
    }

    /// Perform a GET request and deserialize the response
    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.url(segments)?;
        let response = self
            .authorized(self.client.get(url))
            .send()
            .await
            .map_err(send_error)?;
        decode(response).await
    }

    /// Perform a POST request with JSON body
    async fn post<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: impl serde::Serialize,
    ) -> Result<T> {
        let url = self.url(segments)?;
        let response = self
            .authorized(self.client.post(url).json(&body))
            .send()
            .await
            .map_err(send_error)?;
        decode(response).await
    }

    /// Perform a DELETE request
    async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.url(segments)?;
        let response = self
            .authorized(self.client.delete(url))
            .send()
            .await
            .map_err(send_error)?;
        check(response).await?;
        Ok(())
    }
}

fn owned_paths(path_set: &[&str]) -> Vec<String> {
    path_set.iter().map(|p| (*p).to_string()).collect()
}

#[async_trait]
impl InventoryClient for HttpInventoryClient {
    async fn about(&self) -> Result<AboutInfo> {
        self.get(&["about"]).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn create_view(&self, kind: EntityKind) -> Result<ViewRef> {
        self.post(&["views"], CreateViewRequest { kind }).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn collect_properties(
        &self,
        view: &ViewRef,
        kind: EntityKind,
        path_set: &[&str],
        include_refs: bool,
    ) -> Result<Vec<ObjectContent>> {
        let request = CollectPropertiesRequest {
            kind,
            path_set: owned_paths(path_set),
            include_refs,
        };
        let objects: Vec<ObjectContent> = self
            .post(&["views", view.view.as_str(), "properties"], request)
            .await?;
        debug!(count = objects.len(), "properties collected");
        Ok(objects)
    }

    #[instrument(skip(self), level = "debug")]
    async fn destroy_view(&self, view: &ViewRef) -> Result<()> {
        self.delete(&["views", view.view.as_str()]).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn retrieve_properties(
        &self,
        obj: &ObjectRef,
        path_set: &[&str],
    ) -> Result<ObjectContent> {
        let request = RetrievePropertiesRequest {
            path_set: owned_paths(path_set),
        };
        self.post(&["objects", obj.kind.as_str(), obj.id.as_str(), "properties"], request)
            .await
    }

    #[instrument(skip(self), level = "debug")]
    async fn retrieve_children(
        &self,
        obj: &ObjectRef,
        collection: ChildCollection,
        path_set: &[&str],
    ) -> Result<Option<Vec<ObjectContent>>> {
        let request = RetrieveChildrenRequest {
            collection,
            path_set: owned_paths(path_set),
        };
        let response: ChildrenResponse = self
            .post(&["objects", obj.kind.as_str(), obj.id.as_str(), "children"], request)
            .await?;

        Ok(response.supported.then_some(response.items))
    }

    #[instrument(skip(self))]
    async fn rename(&self, obj: &ObjectRef, new_name: &str) -> Result<TaskRef> {
        let request = RenameRequest {
            new_name: new_name.to_string(),
        };
        let task: TaskRef = self
            .post(&["objects", obj.kind.as_str(), obj.id.as_str(), "rename"], request)
            .await?;
        info!(task = %task.task, "rename task started");
        Ok(task)
    }

    async fn task_info(&self, task: &TaskRef) -> Result<TaskInfo> {
        self.get(&["tasks", task.task.as_str()]).await
    }

    #[instrument(skip(self))]
    async fn disconnect(&self) -> Result<()> {
        self.delete(&["session"]).await?;
        info!("session closed");
        Ok(())
    }
}

/// Opens [`HttpInventoryClient`] sessions
#[derive(Debug, Clone, Default)]
pub struct HttpConnector {
    settings: ClientSettings,
}

impl HttpConnector {
    #[must_use]
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<Client> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(self.settings.timeout)
            .danger_accept_invalid_certs(self.settings.insecure)
            .build()?;
        Ok(client)
    }
}

#[async_trait]
impl Connector for HttpConnector {
    async fn connect(&self, credentials: &Credentials) -> Result<Arc<dyn InventoryClient>> {
        let base_url = endpoint_url(&credentials.host)?;
        let client = self.build_client()?;
        let session = HttpInventoryClient::login(
            client,
            base_url,
            &credentials.user,
            &credentials.password,
        )
        .await?;
        Ok(Arc::new(session))
    }
}
