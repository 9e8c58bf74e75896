use std::io::Write;

use crate::record::Submission;

/// Receives finalized submissions. Delivery is fire-and-forget: the
/// session resets regardless of what the sink does with the record.
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission);
}

impl SubmissionSink for Vec<Submission> {
    fn submit(&mut self, submission: &Submission) {
        self.push(submission.clone());
    }
}

/// Writes each submission as one JSON line.
///
/// A failed write does not stop the session; it is logged, reported on
/// stderr and counted.
pub struct JsonSink<W: Write> {
    writer: W,
    failures: usize,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failures: 0,
        }
    }

    /// Submissions that could not be written.
    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, submission: &Submission) -> std::io::Result<()> {
        let line = serde_json::to_string(submission)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

impl<W: Write> SubmissionSink for JsonSink<W> {
    fn submit(&mut self, submission: &Submission) {
        if let Err(err) = self.write_line(submission) {
            self.failures += 1;
            tracing::warn!(error = %err, "failed to write submission");
            eprintln!("Warning: Failed to write submission: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Document, SelectedCountry};
    use crate::reference::RiskTier;

    fn canada() -> Submission {
        let country = SelectedCountry {
            name: "Canada".to_string(),
            risk: RiskTier::Normal,
        };
        Submission::new(&country, 20_000.0, Document::new("id.jpg", "image/jpeg", 512))
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn json_sink_writes_one_line_per_submission() {
        let submission = canada();
        let mut sink = JsonSink::new(Vec::new());
        sink.submit(&submission);
        sink.submit(&submission);
        assert_eq!(sink.failures(), 0);

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["country"], "Canada");
        assert_eq!(value["riskTier"], "Normal");
    }

    #[test]
    fn json_sink_counts_failed_writes() {
        let mut sink = JsonSink::new(BrokenWriter);
        sink.submit(&canada());
        sink.submit(&canada());
        assert_eq!(sink.failures(), 2);
    }
}
