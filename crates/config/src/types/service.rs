//! External service integration configuration.
//!
//! Every named downstream integration (audit, jaeger, loki, tempo,
//! prometheus, redis) shares the same `ExternalService` shape; per-service
//! defaults live on `ServiceKind`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_JAEGER_HOST, DEFAULT_LOKI_HOST, DEFAULT_REDIS_HOST, DEFAULT_TEMPO_HOST,
};

/// Named downstream integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Audit,
    Jaeger,
    Loki,
    Tempo,
    Prometheus,
    Redis,
}

impl ServiceKind {
    /// All service kinds, in configuration order.
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Audit,
        ServiceKind::Jaeger,
        ServiceKind::Loki,
        ServiceKind::Tempo,
        ServiceKind::Prometheus,
        ServiceKind::Redis,
    ];

    /// Default host for the service. Empty when there is no conventional
    /// endpoint to fall back to.
    pub fn default_host(self) -> &'static str {
        match self {
            ServiceKind::Audit => "",
            ServiceKind::Jaeger => DEFAULT_JAEGER_HOST,
            ServiceKind::Loki => DEFAULT_LOKI_HOST,
            ServiceKind::Tempo => DEFAULT_TEMPO_HOST,
            ServiceKind::Prometheus => "",
            ServiceKind::Redis => DEFAULT_REDIS_HOST,
        }
    }

    /// Environment variable prefix for the service.
    pub fn env_prefix(self) -> &'static str {
        match self {
            ServiceKind::Audit => "AUDIT",
            ServiceKind::Jaeger => "JAEGER",
            ServiceKind::Loki => "LOKI",
            ServiceKind::Tempo => "TEMPO",
            ServiceKind::Prometheus => "PROMETHEUS",
            ServiceKind::Redis => "REDIS",
        }
    }
}

/// Settings for one external service integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalService {
    /// Whether the integration is active.
    pub enabled: bool,
    /// Service endpoint.
    pub host: String,
    /// Access token, for services that require one.
    pub token: String,
}

impl ExternalService {
    /// Service settings carrying only the kind's built-in defaults.
    pub fn defaults_for(kind: ServiceKind) -> Self {
        Self {
            enabled: false,
            host: kind.default_host().to_string(),
            token: String::new(),
        }
    }
}
