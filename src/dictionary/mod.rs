//! Dictionary validation.
//!
//! Word legality is decided by an external collaborator behind the
//! [`Dictionary`] trait. The engine treats every failure of that
//! collaborator as a rejection: [`check_words`] folds transport and parse
//! errors into a verdict carrying [`VALIDATION_FAILED_MARKER`].

pub mod command;
pub mod word_list;

use std::io;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

pub use command::CommandDictionary;
pub use word_list::WordList;

/// Placed in `invalid_words` when the validator could not give an answer.
pub const VALIDATION_FAILED_MARKER: &str = "could not validate";

/// Errors raised while talking to a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read word list {}: {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("validator transport failed: {0}")]
    Transport(#[from] io::Error),

    #[error("validator exited unsuccessfully: {0}")]
    ValidatorFailed(String),

    #[error("unparsable validator response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Answer of a dictionary for a batch of words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    #[serde(alias = "valid")]
    pub all_valid: bool,
    #[serde(default)]
    pub invalid_words: Vec<String>,
}

impl Verdict {
    pub fn accepted() -> Self {
        Verdict { all_valid: true, invalid_words: Vec::new() }
    }

    pub fn rejected(invalid_words: Vec<String>) -> Self {
        Verdict { all_valid: false, invalid_words }
    }

    /// The fail-closed verdict used when no answer could be obtained.
    pub fn unavailable() -> Self {
        Verdict::rejected(vec![VALIDATION_FAILED_MARKER.to_string()])
    }
}

/// A word validator reached over a request/response boundary.
pub trait Dictionary {
    /// Checks every word; `all_valid` must only be true if each one is accepted.
    fn validate(&self, words: &[String]) -> Result<Verdict, DictionaryError>;

    /// False for validators that do not actually check anything.
    fn is_trusted(&self) -> bool {
        true
    }

    /// Short name for logs and the handshake.
    fn name(&self) -> &str;
}

/// Accepts every word. Reduced-trust mode for running without a dictionary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchecked;

impl Dictionary for Unchecked {
    fn validate(&self, words: &[String]) -> Result<Verdict, DictionaryError> {
        warn!("dictionary check skipped for {} word(s): no dictionary configured", words.len());
        Ok(Verdict::accepted())
    }

    fn is_trusted(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "unchecked"
    }
}

/// Asks the dictionary about `words`, failing closed.
///
/// Errors become [`Verdict::unavailable`]. A verdict that claims success
/// while listing invalid words is treated as a rejection, and a rejection
/// with no words listed gets the failure marker so callers always have
/// something to report.
pub fn check_words(dictionary: &dyn Dictionary, words: &[String]) -> Verdict {
    if words.is_empty() {
        return Verdict::accepted();
    }

    let mut verdict = match dictionary.validate(words) {
        Ok(v) => v,
        Err(e) => {
            warn!("{} dictionary failed, rejecting move: {}", dictionary.name(), e);
            return Verdict::unavailable();
        }
    };

    if verdict.all_valid && !verdict.invalid_words.is_empty() {
        warn!(
            "{} dictionary returned an inconsistent verdict, rejecting move",
            dictionary.name()
        );
        verdict.all_valid = false;
    }
    if !verdict.all_valid && verdict.invalid_words.is_empty() {
        verdict.invalid_words.push(VALIDATION_FAILED_MARKER.to_string());
    }
    verdict
}
