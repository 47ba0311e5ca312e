//! Lexicon Gate Library
//!
//! A read-only search endpoint over a glossary ("lexicon") stored in Airtable,
//! guarded by an IP allowlist. The binary (`main.rs`) only loads configuration
//! and serves the router built here.
//!
//! ## Modules
//! - **`access`**: The access gate. Resolves the client IP from forwarding headers
//!   and rejects requests to `/api/` routes that are not on the allowlist.
//! - **`lexicon`**: Cell normalization, query tokenization and the weighted
//!   multi-field ranking of glossary rows.
//! - **`store`**: The Airtable REST client that fetches candidate rows.
//! - **`app`**: Router assembly and shared request state.
//! - **`config`**: Environment configuration.
//! - **`error`**: Error types.

pub mod access;
pub mod app;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;
