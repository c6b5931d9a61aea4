//! Homoglyph-aware banned-word filtering.
//!
//! Messages and banned words are folded through the same byte-level
//! [`normalize`] step (lowercase, noise stripped, Cyrillic look-alikes mapped to
//! Latin) and then compared by literal substring search.

pub mod config;
pub mod error;
pub mod filter;
pub mod homoglyph;
pub mod matcher;
pub mod normalize;
pub mod shared;
pub mod store;

pub use config::{FilterConfig, WordsConfig};
pub use error::FilterError;
pub use filter::{MessageFilter, Verdict};
pub use normalize::{normalize, NormalizedText};
pub use shared::SharedFilter;
pub use store::BannedWords;
