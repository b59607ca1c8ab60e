//! CORS adapter.
//!
//! Turns [`CorsSettings`] into a tower-http layer. Enforcement is done by
//! the layer itself.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::constants::{CORS_ALLOWED_HEADERS, ENV_FRONTEND_ORIGIN, WILDCARD};
use crate::error::{ConfigError, ConfigResult};
use crate::settings::CorsSettings;

impl CorsSettings {
    /// Build a `CorsLayer` allowing exactly the configured origins.
    ///
    /// Each origin must be `scheme://host[:port]` with no path, and must be a
    /// valid header value.
    pub fn layer(&self) -> ConfigResult<CorsLayer> {
        // AllowOrigin::list panics on "*", so the wildcard gets its own arm
        let allow_origin = if self.allowed_origins.iter().any(|o| o == WILDCARD) {
            AllowOrigin::any()
        } else {
            let origins = self
                .allowed_origins
                .iter()
                .map(|origin| origin_header(origin))
                .collect::<ConfigResult<Vec<_>>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([
                Method::DELETE,
                Method::GET,
                Method::OPTIONS,
                Method::PATCH,
                Method::POST,
                Method::PUT,
            ])
            .allow_headers(
                CORS_ALLOWED_HEADERS
                    .iter()
                    .copied()
                    .map(HeaderName::from_static)
                    .collect::<Vec<_>>(),
            ))
    }
}

fn origin_header(origin: &str) -> ConfigResult<HeaderValue> {
    let Some((scheme, rest)) = origin.split_once("://") else {
        return Err(ConfigError::invalid(
            ENV_FRONTEND_ORIGIN,
            format!("{:?} has no scheme", origin),
        ));
    };
    if scheme.is_empty() || rest.is_empty() || rest.contains('/') {
        return Err(ConfigError::invalid(
            ENV_FRONTEND_ORIGIN,
            format!("{:?} must be scheme://host[:port] with no path", origin),
        ));
    }

    HeaderValue::from_str(origin).map_err(|e| {
        ConfigError::invalid(
            ENV_FRONTEND_ORIGIN,
            format!("{:?} is not a valid header value ({})", origin, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cors(origins: &[&str]) -> CorsSettings {
        CorsSettings {
            allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[test]
    fn test_layer_accepts_plain_origin() {
        assert!(cors(&["https://x.com"]).layer().is_ok());
        assert!(cors(&["http://localhost:5173"]).layer().is_ok());
    }

    #[test]
    fn test_layer_accepts_wildcard() {
        assert!(cors(&["*"]).layer().is_ok());
    }

    #[test]
    fn test_layer_rejects_path() {
        let err = cors(&["https://x.com/"]).layer().unwrap_err();
        assert_eq!(err.key(), Some("FRONTEND_ORIGIN"));
    }

    #[test]
    fn test_layer_rejects_missing_scheme() {
        assert!(cors(&["x.com"]).layer().is_err());
    }

    #[test]
    fn test_layer_rejects_control_characters() {
        assert!(cors(&["https://x.com\n"]).layer().is_err());
    }
}
