use serde::{Deserialize, Serialize};

pub const DENIAL_STATUS: u16 = 403;
pub const DENIAL_REASON: &str = "Forbidden";

/// Outcome of a rejected request: status, reason and the IP the decision
/// was made on. Nothing else about the request is exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Denial {
    pub status: u16,
    pub reason: &'static str,
    pub ip: String,
}

impl Denial {
    pub fn forbidden(ip: String) -> Self {
        Self {
            status: DENIAL_STATUS,
            reason: DENIAL_REASON,
            ip,
        }
    }
}

/// Body of a denial response.
#[derive(Debug, Serialize, Deserialize)]
pub struct DenialResponse {
    pub error: String,
    pub ip: String,
}

impl From<&Denial> for DenialResponse {
    fn from(denial: &Denial) -> Self {
        Self {
            error: denial.reason.to_string(),
            ip: denial.ip.clone(),
        }
    }
}
