//! Server configuration, fixed at startup.

/// Default listen address: every interface, port 8080.
pub const DEFAULT_LISTEN: &str = ":8080";

/// Default upload ceiling in mebibytes.
pub const DEFAULT_MAX_UPLOAD_MIB: u64 = 10;

/// Process-wide server settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// `host:port`, or `:port` for all interfaces.
    pub listen: String,
    /// Largest accepted POST body, in MiB.
    pub max_upload_mib: u64,
}

impl ServerConfig {
    pub fn new(listen: impl Into<String>, max_upload_mib: u64) -> Self {
        Self {
            listen: listen.into(),
            max_upload_mib,
        }
    }

    /// The upload ceiling in bytes (`MiB << 20`, saturating).
    pub fn max_upload_bytes(&self) -> usize {
        let bytes = self.max_upload_mib.saturating_mul(1 << 20);
        usize::try_from(bytes).unwrap_or(usize::MAX)
    }

    /// The address handed to the listener. A bare `:port` binds every
    /// IPv4 interface.
    pub fn bind_address(&self) -> String {
        if self.listen.starts_with(':') {
            format!("0.0.0.0{}", self.listen)
        } else {
            self.listen.clone()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LISTEN, DEFAULT_MAX_UPLOAD_MIB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.listen, ":8080");
        assert_eq!(config.max_upload_mib, 10);
        assert_eq!(config.max_upload_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn bare_port_binds_all_interfaces() {
        assert_eq!(ServerConfig::default().bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn explicit_host_is_kept() {
        let config = ServerConfig::new("127.0.0.1:9000", 1);
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn zero_ceiling() {
        assert_eq!(ServerConfig::new(":0", 0).max_upload_bytes(), 0);
    }

    #[test]
    fn huge_ceiling_saturates() {
        let config = ServerConfig::new(":0", u64::MAX);
        assert_eq!(config.max_upload_bytes(), usize::MAX);
    }
}
