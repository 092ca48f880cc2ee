use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAvailability {
    pub domain: String,
    pub available: bool,
    /// Yearly price, only meaningful when available
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub domain: String,
    pub expires_at: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

fn default_ttl() -> u32 {
    300
}

impl DnsRecord {
    pub fn a(name: &str, ip: &str) -> Self {
        Self {
            record_type: "A".to_string(),
            name: name.to_string(),
            value: ip.to_string(),
            ttl: default_ttl(),
        }
    }

    /// Apex and `www` A records pointing at one address
    pub fn point_to(ip: &str) -> Vec<Self> {
        vec![Self::a("@", ip), Self::a("www", ip)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedDomain {
    pub domain: String,
    pub days_until_expiry: i64,
}

impl OwnedDomain {
    pub fn expires_within(&self, days: i64) -> bool {
        self.days_until_expiry < days
    }
}

/// Names of available domains, in the order the service listed them
pub fn available_names(results: &[DomainAvailability], limit: usize) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.available)
        .take(limit)
        .map(|r| r.domain.clone())
        .collect()
}
