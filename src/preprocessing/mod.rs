pub mod cleaner;
pub mod kind;

pub use cleaner::{Cleaner, CleanerError};
pub use kind::SubmissionKind;

/// A submission that passed validation, with its detected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub kind: SubmissionKind,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Preprocessor {
    cleaner: Cleaner,
}

impl Preprocessor {
    pub fn new(cleaner: Cleaner) -> Self {
        Self { cleaner }
    }

    pub fn process(&self, input: &str) -> Result<Submission, CleanerError> {
        let text = self.cleaner.validate(input)?;

        Ok(Submission {
            text: text.to_string(),
            kind: SubmissionKind::detect(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected() {
        let preprocessor = Preprocessor::default();

        assert_eq!(preprocessor.process(""), Err(CleanerError::EmptyInput));
        assert_eq!(preprocessor.process(" \n\t "), Err(CleanerError::EmptyInput));
    }

    #[test]
    fn oversized_input_is_rejected() {
        let preprocessor = Preprocessor::new(Cleaner::new(8));

        assert_eq!(
            preprocessor.process("123456789"),
            Err(CleanerError::TooLong { length: 9, max: 8 })
        );
    }

    #[test]
    fn accepted_text_is_kept_verbatim() {
        let submission = Preprocessor::default()
            .process("  SHOCKING news!  ")
            .unwrap();

        assert_eq!(submission.text, "  SHOCKING news!  ");
        assert_eq!(submission.kind, SubmissionKind::Claim);
    }

    #[test]
    fn input_of_exactly_max_length_is_accepted() {
        let cleaner = Cleaner::new(8);

        assert_eq!(cleaner.validate("12345678"), Ok("12345678"));
        assert_eq!(
            cleaner.validate("123456789"),
            Err(CleanerError::TooLong { length: 9, max: 8 })
        );
    }
}
