//! Network-based access gating.
//!
//! Privileged roles always pass. Everyone else passes when enforcement is
//! off, or when their IPv4 address matches an allow-list entry. Malformed
//! entries never match.

mod ip;
mod policy;

pub use ip::{in_range, ip_to_int};
pub use policy::{
    AccessDecision, ClientIpSource, FixedClientIp, NetworkConfig, NetworkConfigUpdate, NoClientIp,
    check_access, is_allowed,
};
