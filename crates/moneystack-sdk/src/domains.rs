use async_trait::async_trait;
use moneystack_types::{DnsRecord, DomainAvailability, OwnedDomain, Registration};
use serde::Serialize;

use crate::client::ServiceClient;
use crate::error::ApiError;

/// Registration parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub domain: String,
    pub years: u32,
    pub auto_renew: bool,
    pub privacy: bool,
}

impl RegisterRequest {
    /// One year with auto-renew and privacy on
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            years: 1,
            auto_renew: true,
            privacy: true,
        }
    }
}

#[async_trait]
pub trait DomainsApi: Send + Sync {
    /// Empty `tlds` lets the service pick its default set
    async fn search(&self, name: &str, tlds: &[String]) -> Result<Vec<DomainAvailability>, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<Registration, ApiError>;
    async fn list_domains(&self) -> Result<Vec<OwnedDomain>, ApiError>;
    async fn renew(&self, domain: &str, years: u32) -> Result<Registration, ApiError>;
    async fn set_dns(&self, domain: &str, records: &[DnsRecord]) -> Result<(), ApiError>;
}

pub struct DomainsClient {
    client: ServiceClient,
}

impl DomainsClient {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DomainsApi for DomainsClient {
    async fn search(&self, name: &str, tlds: &[String]) -> Result<Vec<DomainAvailability>, ApiError> {
        let mut query = vec![("name", name.to_string())];
        if !tlds.is_empty() {
            query.push(("tlds", tlds.join(",")));
        }
        self.client.get("/domains/search", &query).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Registration, ApiError> {
        self.client.post("/domains/register", request).await
    }

    async fn list_domains(&self) -> Result<Vec<OwnedDomain>, ApiError> {
        self.client.get("/domains", &[]).await
    }

    async fn renew(&self, domain: &str, years: u32) -> Result<Registration, ApiError> {
        self.client
            .post(
                &format!("/domains/{}/renew", domain),
                &serde_json::json!({ "years": years }),
            )
            .await
    }

    async fn set_dns(&self, domain: &str, records: &[DnsRecord]) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .client
            .put(
                &format!("/domains/{}/dns", domain),
                &serde_json::json!({ "records": records }),
            )
            .await?;
        Ok(())
    }
}
