//! Engine configuration.
//!
//! Loaded from a TOML file and overridden by command-line flags:
//!
//! ```toml
//! seed = 42
//! pass_limit = 6
//!
//! [dictionary]
//! kind = "word_list"
//! path = "words.txt"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::dictionary::{CommandDictionary, Dictionary, DictionaryError, Unchecked, WordList};
use crate::game::DEFAULT_PASS_LIMIT;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("pass_limit must be at least 1")]
    InvalidPassLimit,

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Where word legality comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DictionaryConfig {
    /// Accept every word. Reduced-trust mode.
    #[default]
    Unchecked,

    /// Plain-text word list, one word per line.
    WordList { path: PathBuf },

    /// External validator speaking JSON over stdin/stdout.
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl DictionaryConfig {
    /// Builds the configured dictionary.
    pub fn build(&self) -> Result<Box<dyn Dictionary>, DictionaryError> {
        let dictionary: Box<dyn Dictionary> = match self {
            DictionaryConfig::Unchecked => Box::new(Unchecked),
            DictionaryConfig::WordList { path } => Box::new(WordList::load(path)?),
            DictionaryConfig::Command { program, args } => {
                info!("validating words with external program {}", program);
                Box::new(CommandDictionary::new(program.clone(), args.clone()))
            }
        };
        Ok(dictionary)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// RNG seed for bag shuffles. Entropy is used when absent.
    pub seed: Option<u64>,
    /// Consecutive passes or swaps that end the game.
    pub pass_limit: u32,
    pub dictionary: DictionaryConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            seed: None,
            pass_limit: DEFAULT_PASS_LIMIT,
            dictionary: DictionaryConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = EngineConfig::from_toml_str(&content)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pass_limit == 0 {
            return Err(ConfigError::InvalidPassLimit);
        }
        Ok(())
    }
}
