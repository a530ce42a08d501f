use std::io::{self, Write};

use crate::data::RequestOutcome;

/// Write the outcome as a single newline-terminated line and flush.
pub fn report<W: Write>(outcome: &RequestOutcome, out: &mut W) -> io::Result<()> {
    writeln!(out, "{outcome}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcome: &RequestOutcome) -> String {
        let mut buf = Vec::new();
        report(outcome, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_success() {
        assert_eq!(
            render(&RequestOutcome::success("application/json")),
            "We received Content-Type: application/json\n"
        );
    }

    #[test]
    fn test_report_is_one_line() {
        for outcome in [
            RequestOutcome::success("text/plain"),
            RequestOutcome::no_content_type(),
            RequestOutcome::transfer_failed(),
            RequestOutcome::init_failed(),
        ] {
            let line = render(&outcome);
            assert_eq!(line.matches('\n').count(), 1);
            assert!(line.ends_with('\n'));
        }
    }
}
