//! Test helpers for integration tests
//!
//! Spawns in-process API servers on the in-memory backing and provides a
//! thin HTTP client around them.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tagchat_api::{create_app, create_app_state};
use tagchat_common::{
    AppConfig, AppSettings, Backing, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, RedisConfig, ServerConfig, SnowflakeConfig,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{AuthResponse, RegisterRequest};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the default test configuration
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0: let the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a bodyless POST request with auth token
    pub async fn post_auth_empty(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Register a fresh user and return the parsed auth response
    pub async fn register_user(&self) -> Result<AuthResponse> {
        let request = RegisterRequest::unique();
        let response = self.post("/api/v1/auth/register", &request).await?;
        assert_json(response, StatusCode::CREATED).await
    }
}

/// Test configuration on the in-memory backing
///
/// HTTP-level rate limits are set high so functional tests never trip them;
/// the application-level budgets keep their defaults.
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "tagchat-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        redis: RedisConfig {
            url: "redis://unused".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            token_expiry: 86_400,
        },
        rate_limit: RateLimitConfig {
            messages_per_minute: 10,
            friend_requests_per_day: 20,
            requests_per_second: 1_000,
            burst: 2_000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
        snowflake: SnowflakeConfig { worker_id: 0 },
        backing: Backing::Memory,
    }
}

/// Test configuration with custom application-level budgets
pub fn test_config_with_limits(messages_per_minute: u32, friend_requests_per_day: u32) -> AppConfig {
    let mut config = test_config();
    config.rate_limit.messages_per_minute = messages_per_minute;
    config.rate_limit.friend_requests_per_day = friend_requests_per_day;
    config
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert an error response carries the expected status and error code
pub async fn assert_error(
    response: Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> Result<()> {
    let status = response.status();
    let body: serde_json::Value = response.json().await?;
    if status != expected_status {
        anyhow::bail!("Expected status {}, got {}. Body: {}", expected_status, status, body);
    }
    let code = body
        .pointer("/error/code")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if code != expected_code {
        anyhow::bail!("Expected error code {}, got {}. Body: {}", expected_code, code, body);
    }
    Ok(())
}
