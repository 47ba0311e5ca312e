use super::types::Denial;

/// Header carrying the proxy chain, client first: `client, proxy1, proxy2`.
pub const FORWARDED_FOR: &str = "x-forwarded-for";
/// Every route under this prefix is gated.
pub const PROTECTED_PREFIX: &str = "/api/";

/// Resolves the client IP from the forwarding chain, falling back to the
/// connection peer. Returns empty text when neither yields anything.
pub fn resolve_client_ip(forwarded_for: Option<&str>, peer_ip: Option<&str>) -> String {
    let first = forwarded_for
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .unwrap_or_default();

    if !first.is_empty() {
        return first.to_string();
    }

    peer_ip.map(str::trim).unwrap_or_default().to_string()
}

/// Exact-match list of client IPs allowed through the gate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Allowlist {
    ips: Vec<String>,
}

impl Allowlist {
    pub fn new<I, S>(ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ips: ips.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a comma-separated list. Blank entries are dropped.
    pub fn parse(raw: &str) -> Self {
        Self::new(
            raw.split(',')
                .map(str::trim)
                .filter(|ip| !ip.is_empty()),
        )
    }

    /// An empty IP is never allowed, even if the list holds an empty entry.
    pub fn allows(&self, ip: &str) -> bool {
        !ip.is_empty() && self.ips.iter().any(|allowed| allowed == ip)
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ips.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Allow,
    Deny(Denial),
}

/// IP allowlist check in front of the protected routes.
#[derive(Debug, Clone)]
pub struct AccessGate {
    allowlist: Allowlist,
    protected_prefix: String,
}

impl AccessGate {
    pub fn new(allowlist: Allowlist) -> Self {
        Self {
            allowlist,
            protected_prefix: PROTECTED_PREFIX.to_string(),
        }
    }

    pub fn protects(&self, path: &str) -> bool {
        path.starts_with(&self.protected_prefix)
    }

    pub fn check(&self, path: &str, forwarded_for: Option<&str>, peer_ip: Option<&str>) -> GateDecision {
        if !self.protects(path) {
            return GateDecision::Allow;
        }

        let ip = resolve_client_ip(forwarded_for, peer_ip);
        if self.allowlist.allows(&ip) {
            GateDecision::Allow
        } else {
            GateDecision::Deny(Denial::forbidden(ip))
        }
    }
}
