//! Network allow-list policy.
//!
//! Decides whether a client may perform a gated action (login, clocking in
//! or out) based on its IPv4 address, the configured allow-list and the
//! caller's role.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Role;

use super::ip::{in_range, ip_to_int};

const ALLOWED_LOCATION: &str = "Bureau Principal";
const DENIED_LOCATION: &str = "Localisation non autorisée";

/// The allow-list configuration.
///
/// Entries are either a single address (`"192.168.1.100"`) or an inclusive
/// range (`"192.168.1.1-192.168.1.254"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Whether the allow-list is enforced.
    #[serde(default)]
    pub enforce: bool,
    /// Allowed addresses and ranges.
    #[serde(default)]
    pub allowed: Vec<String>,
}

/// A partial update of a [`NetworkConfig`]; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfigUpdate {
    /// New enforcement flag.
    #[serde(default)]
    pub enforce: Option<bool>,
    /// New allow-list, replacing the old one.
    #[serde(default)]
    pub allowed: Option<Vec<String>>,
}

impl NetworkConfig {
    /// Merges `update` into this configuration.
    pub fn apply(&mut self, update: NetworkConfigUpdate) {
        if let Some(enforce) = update.enforce {
            self.enforce = enforce;
        }
        if let Some(allowed) = update.allowed {
            self.allowed = allowed;
        }
    }

    /// Returns the entries that can never match any address.
    pub fn invalid_entries(&self) -> Vec<&str> {
        self.allowed
            .iter()
            .map(String::as_str)
            .filter(|entry| !entry_is_valid(entry))
            .collect()
    }

    /// Returns true if `ip` matches at least one allow-list entry.
    pub fn permits(&self, ip: &str) -> bool {
        let ip = ip.trim();
        self.allowed.iter().any(|entry| {
            if entry.contains('-') {
                in_range(ip, entry)
            } else {
                entry.trim() == ip
            }
        })
    }
}

fn entry_is_valid(entry: &str) -> bool {
    match entry.split_once('-') {
        Some((start, end)) => ip_to_int(start).is_ok() && ip_to_int(end).is_ok(),
        None => ip_to_int(entry).is_ok(),
    }
}

/// Returns true if a client at `ip` with `role` may proceed.
///
/// Privileged roles bypass the allow-list; when enforcement is off every
/// client is allowed.
///
/// # Examples
///
/// ```
/// use timetrack_engine::access::{is_allowed, NetworkConfig};
/// use timetrack_engine::models::Role;
///
/// let config = NetworkConfig { enforce: true, allowed: vec![] };
/// assert!(is_allowed("10.1.2.3", &config, &Role::Admin));
/// assert!(!is_allowed("10.1.2.3", &config, &Role::Employee));
/// ```
pub fn is_allowed(ip: &str, config: &NetworkConfig, role: &Role) -> bool {
    if role.is_privileged() {
        return true;
    }
    if !config.enforce {
        return true;
    }
    config.permits(ip)
}

/// The outcome of an access check, for display and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether the action may proceed.
    pub allowed: bool,
    /// Whether the caller's role bypassed the allow-list.
    pub privileged: bool,
    /// The client address the decision was made for, if known.
    pub ip: Option<String>,
    /// Human-readable location label.
    pub location: String,
}

/// Evaluates access and describes the outcome.
///
/// An unknown client address matches no allow-list entry.
pub fn check_access(ip: Option<&str>, config: &NetworkConfig, role: &Role) -> AccessDecision {
    let privileged = role.is_privileged();
    let allowed = match ip {
        Some(ip) => is_allowed(ip, config, role),
        None => privileged || !config.enforce,
    };

    if !allowed {
        warn!(ip = ip.unwrap_or("unknown"), role = %role, "Network access denied");
    }

    AccessDecision {
        allowed,
        privileged,
        ip: ip.map(str::to_string),
        location: (if allowed { ALLOWED_LOCATION } else { DENIED_LOCATION }).to_string(),
    }
}

/// Supplies the current client's IP address.
pub trait ClientIpSource: Send + Sync {
    /// Returns the client IP, or `None` if it cannot be determined.
    fn current_ip(&self) -> Option<String>;
}

/// A [`ClientIpSource`] that always reports the same address.
#[derive(Debug, Clone)]
pub struct FixedClientIp(pub String);

impl ClientIpSource for FixedClientIp {
    fn current_ip(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// A [`ClientIpSource`] that never knows the address.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClientIp;

impl ClientIpSource for NoClientIp {
    fn current_ip(&self) -> Option<String> {
        None
    }
}
