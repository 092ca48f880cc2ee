use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// Mock server utilities for testing the Anthropic client
pub struct LlmMockServer {
    server: MockServer,
}

impl LlmMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful reply whose content blocks are `content`
    pub async fn mock_anthropic_reply(&self, request_partial: Value, content: Value, stop_reason: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", TEST_API_KEY))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_partial_json(request_partial))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_test123",
                "type": "message",
                "role": "assistant",
                "content": content,
                "model": "claude-3-5-sonnet-20241022",
                "stop_reason": stop_reason,
                "stop_sequence": null,
                "usage": {
                    "input_tokens": 10,
                    "output_tokens": 20
                }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock Anthropic API error response
    pub async fn mock_anthropic_error(&self, status: u16, error_type: &str, error_message: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "type": "error",
                "error": {
                    "type": error_type,
                    "message": error_message
                }
            })))
            .mount(&self.server)
            .await;
    }
}
