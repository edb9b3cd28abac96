//! Output capability for reports and suggestions.
//!
//! The core never writes anywhere by itself; front-ends hand results to a
//! [`Presenter`].

use std::io::Write;

use secrecy::ExposeSecret;

use crate::error::PasswordError;
use crate::types::{StrengthReport, SuggestionBatch};

pub trait Presenter {
    fn show_report(&mut self, report: &StrengthReport) -> Result<(), PasswordError>;

    fn show_suggestions(&mut self, batch: &SuggestionBatch) -> Result<(), PasswordError>;
}

/// Plain-text presenter over any writer.
///
/// Suggestions are printed in clear: they are meant to be copied.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show_report(&mut self, report: &StrengthReport) -> Result<(), PasswordError> {
        writeln!(
            self.out,
            "Strength: {} ({}%)",
            report.label(),
            report.percent()
        )?;
        // A strong password has nothing to fix
        if !report.is_strong() {
            for error in report.errors() {
                writeln!(self.out, "  - {}", error)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_suggestions(&mut self, batch: &SuggestionBatch) -> Result<(), PasswordError> {
        writeln!(self.out, "Password Suggestions:")?;
        for password in batch {
            writeln!(self.out, "{}", password.expose_secret())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;
    use crate::generator::suggest;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use secrecy::SecretString;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn render_report(password: &str) -> String {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.show_report(&evaluate(&secret(password), 8)).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_show_report_weak() {
        let output = render_report("abcdefgh");
        assert_eq!(
            output,
            "Strength: Weak (40%)\n\
             \x20 - Password should contain at least one digit.\n\
             \x20 - Password should contain at least one uppercase letter.\n\
             \x20 - Password should contain at least one special character.\n"
        );
    }

    #[test]
    fn test_show_report_strong_has_no_errors() {
        assert_eq!(render_report("Abcdef1!"), "Strength: Very Strong (100%)\n");
    }

    #[test]
    fn test_show_suggestions() {
        let batch = suggest(3, 12, &mut SmallRng::seed_from_u64(11)).unwrap();
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.show_suggestions(&batch).unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Password Suggestions:");
        for (line, password) in lines[1..].iter().zip(batch.iter()) {
            assert_eq!(*line, password.expose_secret());
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut presenter = TextPresenter::new(FailingWriter);
        let result = presenter.show_report(&evaluate(&secret(""), 8));
        assert!(matches!(result, Err(PasswordError::Io(_))));
    }
}
