use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CleanerError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("Input exceeds maximum length of {max} bytes: {length}")]
    TooLong { length: usize, max: usize },
}

/// Gatekeeper for submissions. It only accepts or rejects; the text that goes
/// on to the classifier and into the conversation is the text the user sent.
#[derive(Debug, Clone, Copy)]
pub struct Cleaner {
    max_length: usize,
}

impl Cleaner {
    pub const DEFAULT_MAX_LENGTH: usize = 10_000;

    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn validate<'a>(&self, input: &'a str) -> Result<&'a str, CleanerError> {
        if input.trim().is_empty() {
            return Err(CleanerError::EmptyInput);
        }

        if input.len() > self.max_length {
            return Err(CleanerError::TooLong {
                length: input.len(),
                max: self.max_length,
            });
        }

        Ok(input)
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LENGTH)
    }
}
