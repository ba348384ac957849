//! Codec errors.

use thiserror::Error;

/// A descriptor or type name outside the accepted grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DescError {
    #[error("malformed descriptor `{input}` at offset {offset}: {reason}")]
    MalformedDescriptor {
        input: String,
        offset: usize,
        reason: &'static str,
    },
    #[error("malformed type name `{input}`: {reason}")]
    MalformedName { input: String, reason: &'static str },
}

impl DescError {
    pub(crate) fn descriptor(input: &str, offset: usize, reason: &'static str) -> Self {
        DescError::MalformedDescriptor {
            input: input.to_owned(),
            offset,
            reason,
        }
    }

    pub(crate) fn name(input: &str, reason: &'static str) -> Self {
        DescError::MalformedName {
            input: input.to_owned(),
            reason,
        }
    }
}
