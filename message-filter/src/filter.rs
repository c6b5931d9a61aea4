use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::matcher;
use crate::normalize::normalize;
use crate::store::BannedWords;

/// Outcome of [`MessageFilter::evaluate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub flagged: bool,
    /// Normalized banned words found in the message, sorted.
    #[serde(default)]
    pub matched: Vec<String>,
}

/// Banned-word filter. Each instance owns an independent word set.
///
/// Words and messages go through [`normalize`] before they are stored or
/// scanned, so `B.A.D`, `b a d` and Cyrillic look-alikes all hit a ban on `bad`.
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    banned: BannedWords,
}

impl MessageFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter seeded with every word `cfg` lists inline or in word files.
    ///
    /// Words that normalize to nothing (e.g. `"---"`) are skipped with a warning;
    /// anything else that `ban` rejects aborts the load.
    pub fn from_config(cfg: &FilterConfig) -> anyhow::Result<Self> {
        let mut filter = Self::new();
        for word in cfg.collect_words()? {
            match filter.ban(&word) {
                Ok(()) => {}
                Err(FilterError::NormalizesToEmpty { word }) => {
                    tracing::warn!(%word, "skipping configured word with no content");
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("banning configured word {word:?}"));
                }
            }
        }
        tracing::debug!(count = filter.len(), "filter seeded from config");
        Ok(filter)
    }

    /// Add `word` to the banned set. Re-banning an existing word is a no-op.
    ///
    /// # Errors
    /// * [`FilterError::EmptyInput`] if `word` is empty.
    /// * [`FilterError::NormalizesToEmpty`] if nothing survives normalization.
    pub fn ban(&mut self, word: impl AsRef<[u8]>) -> Result<(), FilterError> {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(FilterError::EmptyInput);
        }
        let normalized = normalize(word);
        if normalized.is_empty() {
            return Err(FilterError::NormalizesToEmpty {
                word: String::from_utf8_lossy(word).into_owned(),
            });
        }
        tracing::debug!(word = %normalized, "ban");
        self.banned.insert(normalized);
        Ok(())
    }

    /// Ban each word in order, stopping at the first rejected one.
    /// Words before the failure stay banned.
    pub fn ban_all<I, W>(&mut self, words: I) -> Result<(), FilterError>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        for word in words {
            self.ban(word)?;
        }
        Ok(())
    }

    /// Remove `word` from the banned set. Unknown words are ignored.
    ///
    /// # Errors
    /// * [`FilterError::EmptyInput`] if `word` is empty.
    pub fn unban(&mut self, word: impl AsRef<[u8]>) -> Result<(), FilterError> {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(FilterError::EmptyInput);
        }
        let normalized = normalize(word);
        let removed = self.banned.remove(normalized.as_bytes());
        tracing::debug!(word = %normalized, removed, "unban");
        Ok(())
    }

    /// `true` if any banned word occurs in the normalized `message`.
    pub fn check(&self, message: impl AsRef<[u8]>) -> bool {
        let message = message.as_ref();
        if message.is_empty() || self.banned.is_empty() {
            return false;
        }
        let normalized = normalize(message);
        matcher::first_match(normalized.as_bytes(), self.banned.iter()).is_some()
    }

    /// Like [`check`](Self::check) but reports which banned words matched.
    pub fn evaluate(&self, message: impl AsRef<[u8]>) -> Verdict {
        let message = message.as_ref();
        if message.is_empty() || self.banned.is_empty() {
            return Verdict::default();
        }
        let normalized = normalize(message);
        let mut matched: Vec<String> =
            matcher::all_matches(normalized.as_bytes(), self.banned.iter())
                .into_iter()
                .map(|w| String::from_utf8_lossy(w).into_owned())
                .collect();
        matched.sort();
        Verdict {
            flagged: !matched.is_empty(),
            matched,
        }
    }

    /// Whether `word`, once normalized, is currently banned.
    pub fn is_banned(&self, word: impl AsRef<[u8]>) -> bool {
        let normalized = normalize(word);
        self.banned.contains(normalized.as_bytes())
    }

    /// Currently banned words in normalized form, sorted.
    ///
    /// Lossy: a key that is not valid UTF-8 renders with U+FFFD and may look
    /// identical to another key. Words banned from `&str` input always list
    /// exactly.
    pub fn banned_words(&self) -> Vec<String> {
        self.banned.to_sorted_strings()
    }

    /// Currently banned keys as raw bytes, sorted bytewise. Each entry can be
    /// passed back to [`unban`](Self::unban) to remove exactly that key.
    pub fn banned_words_bytes(&self) -> Vec<Vec<u8>> {
        self.banned.to_sorted_bytes()
    }

    pub fn len(&self) -> usize {
        self.banned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banned.is_empty()
    }

    pub fn clear(&mut self) {
        self.banned.clear();
    }
}
