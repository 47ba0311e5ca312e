//! Lexicon Search Module
//!
//! Ranks glossary rows fetched from the row store against a free-text query.
//!
//! ## Pipeline
//! 1. **Fetch**: Rows are pulled from the store, optionally pre-filtered server-side.
//! 2. **Normalize**: Every cell is collapsed to plain text.
//! 3. **Rank**: Rows are scored per field and term, then sorted by descending score.
//! 4. **Project**: The score is dropped and only the display fields are returned.
//!
//! ## Submodules
//! - **`engine`**: Weighted multi-field scoring and ranking.
//! - **`handlers`**: HTTP handlers for the Axum web server.
//! - **`normalize`**: Cell value model and text normalization.
//! - **`tokenizer`**: Query tokenization.
//! - **`types`**: Entries, field weights and response DTOs.

pub mod engine;
pub mod handlers;
pub mod normalize;
pub mod tokenizer;
pub mod types;
