//! Transport timeout configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use stf_core::{ConnectorError, ConnectorResult};

/// Timeouts applied by the [`RestInvoker`](super::RestInvoker): one bound on
/// connection establishment, one on the whole read. The socket default is
/// deliberately long; the backend can take minutes to process large files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub socket: Duration,
}

impl TimeoutConfig {
    pub const DEFAULT_CONNECT: Duration = Duration::from_secs(30);
    pub const DEFAULT_SOCKET: Duration = Duration::from_secs(900);

    pub fn new(connect: Duration, socket: Duration) -> Self {
        Self { connect, socket }
    }

    pub fn validate(&self) -> ConnectorResult<()> {
        if self.connect.is_zero() {
            return Err(ConnectorError::invalid_config(
                "connect timeout must be greater than zero",
            ));
        }
        if self.socket.is_zero() {
            return Err(ConnectorError::invalid_config(
                "socket timeout must be greater than zero",
            ));
        }
        if self.connect > self.socket {
            return Err(ConnectorError::invalid_config(
                "connect timeout cannot be greater than socket timeout",
            ));
        }
        Ok(())
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONNECT, Self::DEFAULT_SOCKET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_transport_contract() {
        let config = TimeoutConfig::default();
        assert_eq!(config.connect, Duration::from_secs(30));
        assert_eq!(config.socket, Duration::from_secs(900));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let config = TimeoutConfig::new(Duration::ZERO, Duration::from_secs(10));
        assert!(config.validate().is_err());

        let config = TimeoutConfig::new(Duration::from_secs(10), Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn connect_longer_than_socket_is_rejected() {
        let config = TimeoutConfig::new(Duration::from_secs(60), Duration::from_secs(30));
        assert!(matches!(
            config.validate().unwrap_err(),
            ConnectorError::Configuration { .. }
        ));
    }
}
