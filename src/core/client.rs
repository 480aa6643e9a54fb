use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::core::request::{RequestBody, RequestOptions};
use crate::features::auth::dtos::{LoginGrant, LoginRequest};
use crate::features::auth::session::Session;
use crate::shared::constants::{DASHBOARD_SUMMARY_PATH, LOGIN_PATH, LOGOUT_PATH};

const JSON_MEDIA_TYPE: &str = "application/json";
const GENERIC_API_ERROR: &str = "API error";

/// Builds authenticated requests against the directory API and interprets
/// the response envelope. Knows nothing about entity shapes.
pub struct SessionClient {
    config: ApiConfig,
    http_client: reqwest::Client,
    session: Arc<Session>,
}

impl SessionClient {
    pub fn new(config: ApiConfig, session: Arc<Session>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.is_authenticated().await
    }

    /// Headers a request to `path` goes out with.
    ///
    /// Multipart bodies get no `Content-Type` here; the transport writes it
    /// together with the boundary.
    pub async fn build_headers(&self, path: &str, options: &RequestOptions) -> Result<HeaderMap> {
        let token = self.attached_token(path).await;
        compose_headers(options, token.as_deref())
    }

    /// Token a request to `path` carries; never the login path
    async fn attached_token(&self, path: &str) -> Option<String> {
        if is_login_path(path) {
            return None;
        }
        self.session.token().await
    }

    /// Send one request and return the parsed body.
    ///
    /// 401 tears down the session the request was sent under and fails
    /// with `Unauthorized`; other non-2xx statuses fail with `Http`; a 2xx
    /// envelope reporting `status: "error"` fails with `Api`.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let url = self.url_for(path);
        let token = self.attached_token(path).await;
        let headers = compose_headers(&options, token.as_deref())?;
        let method = options.method.clone();

        tracing::debug!("API request: {} {}", method, url);

        let builder = self.http_client.request(method.clone(), &url).headers(headers);
        let builder = match options.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(payload) => builder.multipart(payload.into_form()?),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!("API request failed: {} {}: {}", method, url, e);
            AppError::from(e)
        })?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            match self.session.invalidate(token.as_deref()).await {
                Ok(true) => tracing::warn!("API returned 401 for {} {}, session cleared", method, url),
                Ok(false) => tracing::warn!(
                    "API returned 401 for {} {}, session already replaced",
                    method,
                    url
                ),
                Err(e) => tracing::error!("Failed to clear persisted session: {}", e),
            }
            return Err(AppError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("API error: HTTP {} - {}", status, body);
            return Err(AppError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read API response body: {}", e);
            AppError::from(e)
        })?;

        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!("Failed to parse API response from {}: {}", url, e);
            AppError::Decode(format!("Invalid JSON from {}: {}", path, e))
        })?;

        if body.get("status").and_then(Value::as_str) == Some("error") {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_API_ERROR);
            tracing::warn!("API reported error for {}: {}", path, message);
            return Err(AppError::Api(message.to_string()));
        }

        Ok(body)
    }

    /// Exchange credentials for a bearer token, persist it and start
    /// attaching it. A failure leaves the session anonymous.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<LoginGrant> {
        self.session.begin_login().await;

        let request = LoginRequest::new(self.config.login_field, identifier, password);
        tracing::debug!(
            "Logging in by {} as {}",
            self.config.login_field,
            identifier
        );

        let grant = match self.exchange_credentials(&request).await {
            Ok(grant) => grant,
            Err(e) => {
                self.session.abort_login().await;
                tracing::warn!("Login failed: {}", e);
                return Err(e);
            }
        };

        self.session
            .establish(grant.token(), grant.user_marker())
            .await?;
        tracing::info!("Logged in as {}", identifier);
        Ok(grant)
    }

    async fn exchange_credentials(&self, request: &LoginRequest) -> Result<LoginGrant> {
        let body = self
            .request(LOGIN_PATH, RequestOptions::post(RequestBody::json(request)?))
            .await?;
        LoginGrant::parse(&body)
    }

    /// Best-effort server logout; the local session is cleared no matter
    /// what the server says.
    pub async fn logout(&self) {
        if let Err(e) = self
            .request(LOGOUT_PATH, RequestOptions::post(RequestBody::Empty))
            .await
        {
            tracing::warn!("Logout API error: {}", e);
        }

        if let Err(e) = self.session.clear().await {
            tracing::error!("Failed to clear persisted session on logout: {}", e);
        }
        tracing::info!("Logged out");
    }

    /// Check that a restored token is still accepted by the dashboard
    pub async fn verify(&self) -> Result<()> {
        self.request(DASHBOARD_SUMMARY_PATH, RequestOptions::get())
            .await
            .map(|_| ())
    }
}

fn compose_headers(options: &RequestOptions, token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
    for (name, value) in options.headers.iter() {
        headers.insert(name.clone(), value.clone());
    }

    if options.body.is_multipart() {
        headers.remove(CONTENT_TYPE);
    } else {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
    }

    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            AppError::Storage("Held token is not a valid header value".to_string())
        })?;
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

fn is_login_path(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path);
    path.trim_end_matches('/') == LOGIN_PATH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::MultipartPayload;
    use crate::features::auth::store::{MemorySessionStore, StoredSession};
    use serde_json::json;

    async fn client_with_token(token: Option<&str>) -> SessionClient {
        let store = match token {
            Some(token) => MemorySessionStore::with_session(StoredSession {
                token: token.to_string(),
                user: json!("admin"),
            }),
            None => MemorySessionStore::new(),
        };
        let session = Session::restore(Arc::new(store)).await.unwrap();
        SessionClient::new(
            ApiConfig::with_base_url("http://localhost:9/api"),
            Arc::new(session),
        )
        .unwrap()
    }

    #[test]
    fn test_is_login_path() {
        assert!(is_login_path("/login"));
        assert!(is_login_path("/login/"));
        assert!(is_login_path("/login?next=dashboard"));
        assert!(!is_login_path("/dashboard/logout"));
        assert!(!is_login_path("/dashboard/categories"));
    }

    #[tokio::test]
    async fn test_url_for_concatenates_base() {
        let client = client_with_token(None).await;
        assert_eq!(
            client.url_for("/categories"),
            "http://localhost:9/api/categories"
        );
    }

    #[tokio::test]
    async fn test_json_headers_with_token() {
        let client = client_with_token(Some("tok")).await;
        let headers = client
            .build_headers("/dashboard/categories", &RequestOptions::post(json!({"name": "x"})))
            .await
            .unwrap();

        assert_eq!(headers[ACCEPT], "application/json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[AUTHORIZATION], "Bearer tok");
    }

    #[tokio::test]
    async fn test_multipart_headers_have_no_content_type() {
        let client = client_with_token(Some("tok")).await;
        let options = RequestOptions::post(MultipartPayload::new().text("name", "x"))
            .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let headers = client
            .build_headers("/dashboard/categories", &options)
            .await
            .unwrap();

        assert!(headers.get(CONTENT_TYPE).is_none());
        assert_eq!(headers[AUTHORIZATION], "Bearer tok");
    }

    #[tokio::test]
    async fn test_login_path_never_carries_token() {
        let client = client_with_token(Some("tok")).await;
        let headers = client
            .build_headers("/login", &RequestOptions::post(json!({})))
            .await
            .unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_anonymous_requests_carry_no_token() {
        let client = client_with_token(None).await;
        let headers = client
            .build_headers("/categories", &RequestOptions::get())
            .await
            .unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_caller_headers_are_merged() {
        let client = client_with_token(None).await;
        let options = RequestOptions::get()
            .with_header(ACCEPT, HeaderValue::from_static("application/vnd.api+json"));
        let headers = client.build_headers("/offers", &options).await.unwrap();
        assert_eq!(headers[ACCEPT], "application/vnd.api+json");
    }
}
