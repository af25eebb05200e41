//! Blocking JSON GET over a shared async HTTP client.
//!
//! Uses async reqwest internally, driven by one shared tokio runtime,
//! but presents a sync interface so the pipeline reads top to bottom.

use std::sync::LazyLock;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("citeline/", env!("CARGO_PKG_VERSION"));

/// Shared async HTTP client with connection pooling.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(4)
        .build()
        .expect("failed to build HTTP client")
});

/// Get shared HTTP client.
pub fn http_client() -> &'static reqwest::Client {
    &SHARED_CLIENT
}

/// Shared tokio runtime for HTTP operations.
pub static SHARED_RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
});

/// Send a prepared request and decode a 2xx JSON body into `T`.
///
/// Non-2xx responses become [`ApiError::Http`] with the status code,
/// transport failures become [`ApiError::Http`] without one, and a body
/// that does not match `T` becomes [`ApiError::Decode`].
///
/// Must not be called from inside an async context.
pub fn get_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let (status, body) = SHARED_RUNTIME.handle().block_on(async {
        let response = request.send().await.map_err(ApiError::from_reqwest)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from_reqwest)?;
        Ok::<_, ApiError>((status, body))
    })?;

    if !status.is_success() {
        return Err(ApiError::from_status(status.as_u16(), &body));
    }
    Ok(serde_json::from_str(&body)?)
}

/// Join a configured base URL and a path segment with exactly one slash.
///
/// The path is appended verbatim, so DOIs keep their inner `/`.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
