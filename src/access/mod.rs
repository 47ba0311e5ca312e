//! Access Gate Module
//!
//! Network-layer allowlist in front of every `/api/` route.
//!
//! The client IP is the first entry of `x-forwarded-for`, or the socket peer when
//! the header is absent. It must match an allowlist entry exactly; there is no
//! CIDR matching and no IPv6 normalization. An unresolvable IP is always denied.
//!
//! ## Submodules
//! - **`gate`**: IP resolution and the allow/deny decision (pure).
//! - **`middleware`**: The axum middleware that applies the decision.
//! - **`types`**: The denial result and its JSON body.

pub mod gate;
pub mod middleware;
pub mod types;
