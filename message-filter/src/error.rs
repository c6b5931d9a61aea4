use thiserror::Error;

/// Errors raised by [`MessageFilter`](crate::MessageFilter) mutations.
///
/// `check`/`evaluate` never fail; only `ban` and `unban` validate their input,
/// and a rejected call leaves the banned-word set untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Zero-length word, rejected before normalization runs.
    #[error("word cannot be empty")]
    EmptyInput,

    /// The word consists solely of noise or dropped characters. Storing it
    /// would leave an empty key behind, so `ban` refuses it.
    #[error("word {word:?} is empty after normalization")]
    NormalizesToEmpty { word: String },
}
