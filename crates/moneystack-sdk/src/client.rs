use moneystack_logging::{log_request, log_response};
use moneystack_types::DEFAULT_REFERRAL_CODE;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// Header carrying the referral code on every request
pub const REFERRAL_HEADER: &str = "X-Referral-Code";

/// Authenticated JSON client for one service base URL
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    referral_code: String,
    verbose: bool,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
            referral_code: DEFAULT_REFERRAL_CODE.to_string(),
            verbose: false,
        }
    }

    pub fn with_referral_code(mut self, referral_code: impl Into<String>) -> Self {
        self.referral_code = referral_code.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn referral_code(&self) -> &str {
        &self.referral_code
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.api_key)
            .header(REFERRAL_HEADER, &self.referral_code)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        log_request("GET", &self.url(path), None, AUTHORIZATION.as_str(), &self.api_key, self.verbose);
        self.execute(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(Method::POST, path, body).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(Method::PUT, path, body).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        if self.verbose {
            let logged = serde_json::to_value(body).ok();
            log_request(
                method.as_str(),
                &self.url(path),
                logged.as_ref(),
                AUTHORIZATION.as_str(),
                &self.api_key,
                true,
            );
        }
        self.execute(self.request(method, path).json(body)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        log_response(status, &body, self.verbose);

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        // Some endpoints answer with an empty body
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ServiceClient::new("https://wallet.example/api/v1/", "key");
        assert_eq!(client.base_url(), "https://wallet.example/api/v1");
        assert_eq!(client.url("/wallets"), "https://wallet.example/api/v1/wallets");
        assert_eq!(client.url("wallets/w1/balances"), "https://wallet.example/api/v1/wallets/w1/balances");
        assert_eq!(client.referral_code(), "STARTER");
    }
}
