//! External API service descriptors.

use serde::{Deserialize, Serialize};

/// Descriptor for an external HTTP service.
///
/// The host framework's pass-through network tools (`api_get`,
/// `fetch_file`) resolve a service by name at call time; this layer only
/// registers the descriptor, it never performs HTTP itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiService {
    /// Name the pass-through tools resolve.
    pub name: String,

    /// Base URL requests are joined onto.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Retry budget for failed requests.
    pub max_retries: u32,
}

impl ApiService {
    /// Create a new service descriptor.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        timeout_secs: u64,
        max_retries: u32,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            timeout_secs,
            max_retries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_new() {
        let service = ApiService::new("devops", "https://api.example.com", 10, 2);
        assert_eq!(service.name, "devops");
        assert_eq!(service.base_url, "https://api.example.com");
        assert_eq!(service.timeout_secs, 10);
        assert_eq!(service.max_retries, 2);
    }

    #[test]
    fn test_service_roundtrip() {
        let service = ApiService::new("devops", "https://api.example.com", 10, 2);
        let json = serde_json::to_string(&service).unwrap();
        let back: ApiService = serde_json::from_str(&json).unwrap();
        assert_eq!(back, service);
    }
}
