//! HTTP server settings loaded via OrthoConfig.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use helpdesk::domain::ShapePolicy;

/// Address the server listens on when none is configured.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 3000);

/// Listener and validation settings.
///
/// Loaded from `HELPDESK_*` environment variables, CLI flags or a
/// configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HELPDESK")]
pub struct ServerSettings {
    /// Socket address to bind.
    pub bind_addr: Option<SocketAddr>,
    /// Reject user names and e-mails that fail the shape checks.
    #[ortho_config(default = false)]
    pub strict_shapes: bool,
}

impl ServerSettings {
    /// Configured bind address or [`DEFAULT_BIND_ADDR`].
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    #[must_use]
    pub const fn shape_policy(&self) -> ShapePolicy {
        ShapePolicy::from_strict(self.strict_shapes)
    }
}
