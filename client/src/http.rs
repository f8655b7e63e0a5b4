//! HTTP client for the Employee Management Service API

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult, Session};
use shared::ApiResponse;
use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, UploadedFile};

/// Typed HTTP client
///
/// Holds no authentication state; every protected call takes a
/// [`Session`] and refuses to send once it has expired.
#[derive(Debug, Clone)]
pub struct EmsClient {
    client: Client,
    base_url: String,
}

impl EmsClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fail fast on an expired session, before any network round trip
    fn check_session(session: &Session) -> ClientResult<()> {
        if session.is_expired() {
            return Err(ClientError::SessionExpired);
        }
        Ok(())
    }

    fn bearer(session: &Session) -> String {
        format!("Bearer {}", session.token)
    }

    /// Handle the HTTP response, unwrapping the envelope
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Error bodies carry the envelope; fall back to raw text
            let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
                .map(|r| r.message)
                .unwrap_or(text);

            tracing::debug!(status = %status, message = %message, "Request failed");

            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Authenticated GET
    async fn get<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<ApiResponse<T>> {
        Self::check_session(session)?;
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Authenticated POST with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse<T>> {
        Self::check_session(session)?;
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Authenticated PUT with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse<T>> {
        Self::check_session(session)?;
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Authenticated DELETE
    async fn delete<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> ClientResult<ApiResponse<T>> {
        Self::check_session(session)?;
        let response = self
            .client
            .delete(self.url(path))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    fn require_data<T>(envelope: ApiResponse<T>) -> ClientResult<T> {
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
    }

    // ========== Auth API ==========

    /// Login with username and password, producing a [`Session`]
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&request)
            .send()
            .await?;

        let envelope: ApiResponse<LoginResponse> = Self::handle_response(response).await?;
        Ok(Session::from(Self::require_data(envelope)?))
    }

    /// Get current user information
    pub async fn me(&self, session: &Session) -> ClientResult<UserInfo> {
        Self::require_data(self.get(session, "/api/auth/me", &[]).await?)
    }

    /// Logout
    pub async fn logout(&self, session: &Session) -> ClientResult<()> {
        self.post::<serde_json::Value, _>(session, "/api/auth/logout", &serde_json::json!({}))
            .await?;
        Ok(())
    }

    // ========== Employee API ==========

    /// List employees, optionally filtered by a search term
    pub async fn list_employees(
        &self,
        session: &Session,
        q: Option<&str>,
    ) -> ClientResult<Vec<Employee>> {
        let query: Vec<(&str, &str)> = q.map(|term| vec![("q", term)]).unwrap_or_default();
        Self::require_data(self.get(session, "/api/employees", &query).await?)
    }

    /// Get one employee by id
    pub async fn get_employee(&self, session: &Session, id: &str) -> ClientResult<Employee> {
        Self::require_data(
            self.get(session, &format!("/api/employees/{}", id), &[])
                .await?,
        )
    }

    /// Create an employee (admin only)
    pub async fn create_employee(
        &self,
        session: &Session,
        payload: &EmployeeCreate,
    ) -> ClientResult<Employee> {
        Self::require_data(self.post(session, "/api/employees", payload).await?)
    }

    /// Update an employee (admin only)
    pub async fn update_employee(
        &self,
        session: &Session,
        id: &str,
        payload: &EmployeeUpdate,
    ) -> ClientResult<Employee> {
        Self::require_data(
            self.put(session, &format!("/api/employees/{}", id), payload)
                .await?,
        )
    }

    /// Delete an employee (admin only)
    pub async fn delete_employee(&self, session: &Session, id: &str) -> ClientResult<bool> {
        Self::require_data(
            self.delete(session, &format!("/api/employees/{}", id))
                .await?,
        )
    }

    // ========== Upload API ==========

    /// Upload a file with the server's default type/size limits
    pub async fn upload_file(
        &self,
        session: &Session,
        filename: &str,
        data: Vec<u8>,
    ) -> ClientResult<UploadedFile> {
        self.upload_file_with_options(session, filename, data, None, None)
            .await
    }

    /// Upload a file, optionally overriding the allowed types and size cap
    pub async fn upload_file_with_options(
        &self,
        session: &Session,
        filename: &str,
        data: Vec<u8>,
        allowed_types: Option<&[&str]>,
        max_size: Option<u64>,
    ) -> ClientResult<UploadedFile> {
        Self::check_session(session)?;

        let part = reqwest::multipart::Part::bytes(data).file_name(filename.to_string());
        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(types) = allowed_types {
            form = form.text("allowedTypes", types.join(","));
        }
        if let Some(max) = max_size {
            form = form.text("maxSize", max.to_string());
        }

        let response = self
            .client
            .post(self.url("/api/upload"))
            .multipart(form)
            .header(reqwest::header::AUTHORIZATION, Self::bearer(session))
            .send()
            .await?;

        let envelope: ApiResponse<UploadedFile> = Self::handle_response(response).await?;
        Self::require_data(envelope)
    }

    /// Download a stored file by its public URL path (no auth required)
    pub async fn download(&self, url_path: &str) -> ClientResult<Vec<u8>> {
        let response = self.client.get(self.url(url_path)).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn expired_session() -> Session {
        Session {
            token: "tok".to_string(),
            expires_at: Utc::now().timestamp() - 1,
            user: UserInfo {
                id: "user:1".to_string(),
                username: "admin".to_string(),
                display_name: "Administrator".to_string(),
                role: "admin".to_string(),
                is_active: true,
            },
        }
    }

    #[tokio::test]
    async fn test_expired_session_fails_before_network() {
        // Unroutable base URL: a network attempt would error differently
        let client = EmsClient::new(&ClientConfig::new("http://192.0.2.1:9"));
        let session = expired_session();

        match client.list_employees(&session, None).await {
            Err(ClientError::SessionExpired) => {}
            other => panic!("expected SessionExpired, got {:?}", other),
        }
    }

    #[test]
    fn test_url_joining() {
        let client = EmsClient::new(&ClientConfig::new("http://localhost:3000/"));
        assert_eq!(
            client.url("/api/employees"),
            "http://localhost:3000/api/employees"
        );
        assert_eq!(
            client.url("uploads/a.png"),
            "http://localhost:3000/uploads/a.png"
        );
    }
}
