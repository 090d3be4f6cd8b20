//! Target resolution.
//!
//! Literal IPv4 addresses are taken as-is. Everything else goes through a
//! [`NameResolver`], which makes it possible to swap DNS for a stub in tests
//! or for a batched implementation later.

use crate::output;
use crate::types::{Target, TargetError};
use async_trait::async_trait;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// Resolves hostnames to IPv4 addresses.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Look up the first IPv4 address for `host`.
    async fn lookup_ipv4(&self, host: &str) -> Result<Ipv4Addr, TargetError>;
}

/// DNS-backed resolver using the system configuration.
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    /// Build a resolver from `/etc/resolv.conf` (or the platform equivalent),
    /// falling back to the library defaults if that cannot be read.
    pub fn new() -> Self {
        let inner = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
            debug!("system resolver config unavailable ({}), using defaults", e);
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        });
        Self { inner }
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameResolver for DnsResolver {
    async fn lookup_ipv4(&self, host: &str) -> Result<Ipv4Addr, TargetError> {
        let response = self.inner.lookup_ip(host).await.map_err(|e| {
            TargetError::NameResolutionFailure {
                host: host.to_string(),
                reason: e.to_string(),
            }
        })?;

        response
            .iter()
            .find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| TargetError::NameResolutionFailure {
                host: host.to_string(),
                reason: "no IPv4 address found".to_string(),
            })
    }
}

/// Turn one line of input into a [`Target`].
///
/// Resolution failures are reported as a warning and produce an invalid
/// target; they never abort the run.
pub async fn resolve_target(input: &str, resolver: &dyn NameResolver) -> Target {
    if let Some(target) = Target::parse_literal(input) {
        return target;
    }

    match resolver.lookup_ipv4(input).await {
        Ok(addr) => {
            debug!("resolved {} to {}", input, addr);
            Target::hostname(input, Some(addr))
        }
        Err(e) => {
            output::print_warning(&e.to_string());
            Target::hostname(input, None)
        }
    }
}
