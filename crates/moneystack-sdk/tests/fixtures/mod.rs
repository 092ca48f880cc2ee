use moneystack_sdk::ServiceClient;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_REFERRAL: &str = "REF42";

/// Mock server standing in for one service
pub struct ServiceMockServer {
    server: MockServer,
}

impl ServiceMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        format!("{}/api/v1", self.server.uri())
    }

    pub fn client(&self) -> ServiceClient {
        ServiceClient::new(self.uri(), TEST_API_KEY).with_referral_code(TEST_REFERRAL)
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Respond to an authenticated request carrying the referral header
    pub async fn mock_json(&self, http_method: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(format!("/api/v1{}", route)))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .and(header("x-referral-code", TEST_REFERRAL))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_text(&self, http_method: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(http_method))
            .and(path(format!("/api/v1{}", route)))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}
