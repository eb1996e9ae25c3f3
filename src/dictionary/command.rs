//! Dictionary backed by an external validator process.
//!
//! Each validation spawns the configured program, writes one JSON request
//! on its stdin and reads one JSON verdict from its stdout:
//!
//! ```text
//! request:  {"words":["CAT","AT"]}
//! response: {"allValid":false,"invalidWords":["AT"]}
//! ```
//!
//! A spawn failure, non-zero exit, or malformed response is an error;
//! [`super::check_words`] turns it into a rejection.

use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;
use serde::Serialize;

use super::{Dictionary, DictionaryError, Verdict};

#[derive(Debug, Serialize)]
struct Request<'a> {
    words: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDictionary {
    program: String,
    args: Vec<String>,
}

impl CommandDictionary {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandDictionary { program: program.into(), args }
    }
}

impl Dictionary for CommandDictionary {
    fn validate(&self, words: &[String]) -> Result<Verdict, DictionaryError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let request = serde_json::to_vec(&Request { words })?;
        // The child is reaped even when it stops reading early.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(&request).and_then(|()| stdin.write_all(b"\n")),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(DictionaryError::ValidatorFailed(output.status.to_string()));
        }
        written?;

        let verdict: Verdict = serde_json::from_slice(&output.stdout)?;
        debug!("{} answered {:?}", self.program, verdict);
        Ok(verdict)
    }

    fn name(&self) -> &str {
        &self.program
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::dictionary::{check_words, VALIDATION_FAILED_MARKER};

    fn sh(script: &str) -> CommandDictionary {
        CommandDictionary::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    fn words() -> Vec<String> {
        vec!["CAT".to_string(), "XQ".to_string()]
    }

    #[test]
    fn parses_validator_verdict() {
        let dict = sh(r#"cat > /dev/null; echo '{"allValid":false,"invalidWords":["XQ"]}'"#);
        let v = dict.validate(&words()).unwrap();
        assert_eq!(v, Verdict::rejected(vec!["XQ".to_string()]));
    }

    #[test]
    fn request_is_json_on_stdin() {
        // Echo the request back inside the verdict to inspect it.
        let dict = sh(r#"read line; printf '{"allValid":false,"invalidWords":[%s]}' "$(printf '%s' "$line" | sed 's/.*\[\(.*\)\].*/\1/')""#);
        let v = dict.validate(&words()).unwrap();
        assert_eq!(v.invalid_words, words());
    }

    #[test]
    fn garbage_output_is_parse_error() {
        let dict = sh("cat > /dev/null; echo not-json");
        let err = dict.validate(&words()).unwrap_err();
        assert!(matches!(err, DictionaryError::Parse(_)));
        let v = check_words(&dict, &words());
        assert_eq!(v.invalid_words, vec![VALIDATION_FAILED_MARKER.to_string()]);
    }

    #[test]
    fn nonzero_exit_is_error() {
        let dict = sh("cat > /dev/null; exit 3");
        assert!(matches!(
            dict.validate(&words()),
            Err(DictionaryError::ValidatorFailed(_))
        ));
    }

    #[test]
    fn validator_exiting_before_reading_is_waited_on() {
        // Far more than a pipe buffer holds, so the write hits a closed pipe.
        let many: Vec<String> = (0..100_000).map(|i| format!("WORD{}", i)).collect();
        let dict = sh("exit 4");
        match dict.validate(&many) {
            Err(DictionaryError::ValidatorFailed(status)) => assert!(status.contains('4')),
            other => panic!("expected exit status error, got {:?}", other),
        }

        let dict = sh("exit 0");
        assert!(matches!(dict.validate(&many), Err(DictionaryError::Transport(_))));
        assert!(!check_words(&dict, &many).all_valid);
    }

    #[test]
    fn missing_program_is_transport_error() {
        let dict = CommandDictionary::new("/nonexistent/validator", Vec::new());
        assert!(matches!(dict.validate(&words()), Err(DictionaryError::Transport(_))));
        assert!(!check_words(&dict, &words()).all_valid);
    }
}
