//! Rate limiting middleware using the token bucket algorithm.

use anyhow::{Result, anyhow};
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::config::Config;

/// Per-IP key that honors forwarding headers only behind a trusted proxy.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl ClientIpKeyExtractor {
    pub fn new(behind_proxy: bool) -> Self {
        Self { behind_proxy }
    }
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }
}

pub type LoginRateLimitLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates the rate limiter for login submissions.
///
/// # Limits
///
/// - **Rate**: `LOGIN_RATE_PER_SECOND` tokens replenished per second
/// - **Burst**: `LOGIN_BURST_SIZE` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// The socket peer address, or `X-Forwarded-For` / `X-Real-IP` /
/// `Forwarded` when `BEHIND_PROXY` is set.
///
/// # Errors
///
/// Returns an error if the rate or burst is zero.
pub fn login_layer(config: &Config) -> Result<LoginRateLimitLayer> {
    if config.login_rate_per_second == 0 {
        anyhow::bail!("invalid login rate limit: rate must be non-zero");
    }

    // The builder takes the interval between replenished tokens.
    let replenish_ms = (1000 / config.login_rate_per_second).max(1);

    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor::new(config.behind_proxy))
        .per_millisecond(replenish_ms)
        .burst_size(config.login_burst_size)
        .finish()
        .ok_or_else(|| anyhow!("invalid login rate limit: burst must be non-zero"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_from_proxy() -> Request<Body> {
        Request::builder()
            .uri("/login")
            .header("x-forwarded-for", "203.0.113.7")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_forwarded_ip_used_behind_proxy() {
        let key = ClientIpKeyExtractor::new(true)
            .extract(&request_from_proxy())
            .unwrap();

        assert_eq!(key, "203.0.113.7".parse::<IpAddr>().unwrap());
    }

    fn limits(rate: u64, burst: u32) -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            session_api_url: "http://localhost:3001/api/v1".to_string(),
            session_api_timeout_ms: 5000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            login_rate_per_second: rate,
            login_burst_size: burst,
            secure_cookies: false,
        }
    }

    #[test]
    fn test_login_layer_rejects_zero_limits() {
        assert!(login_layer(&limits(0, 10)).is_err());
        assert!(login_layer(&limits(5, 0)).is_err());
        assert!(login_layer(&limits(5, 10)).is_ok());
    }

    #[test]
    fn test_forwarded_ip_ignored_without_proxy() {
        // No ConnectInfo on a bare request, so only the peer lookup can fail.
        assert!(
            ClientIpKeyExtractor::new(false)
                .extract(&request_from_proxy())
                .is_err()
        );
    }
}
