//! The persisted meeting artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// The final artifact of a meeting run.
///
/// The body is byte-for-byte the final stage's output; the title and
/// optional disclaimer are prepended only when the report is rendered to
/// markdown. Created once at the end of a run and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// The H1 title of the document.
    pub title: String,
    /// Optional disclaimer paragraph, printed between title and body.
    pub disclaimer: Option<String>,
    /// The final stage's raw text output.
    pub body: String,
    /// When the run that produced this report finished.
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Creates a new report stamped with the current time.
    #[must_use]
    pub fn new(title: impl Into<String>, disclaimer: Option<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            disclaimer,
            body: body.into(),
            generated_at: Utc::now(),
        }
    }

    /// Renders the report as a markdown document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut doc = format!("# {}\n\n", self.title);
        if let Some(disclaimer) = &self.disclaimer {
            doc.push_str(&format!("**Disclaimer**: {disclaimer}\n\n"));
        }
        doc.push_str(&self.body);
        doc
    }

    /// Writes the rendered report to `destination`, creating or overwriting
    /// the file.
    ///
    /// The report itself is not consumed; if the write fails the caller can
    /// retry with a different destination.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error if the file cannot be written.
    pub fn write_to(&self, destination: impl AsRef<Path>) -> io::Result<()> {
        std::fs::write(destination, self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_without_disclaimer() {
        let report = Report::new("My Topic", None, "body text");
        assert_eq!(report.render(), "# My Topic\n\nbody text");
    }

    #[test]
    fn test_render_with_disclaimer() {
        let report = Report::new("T", Some("Fiction only.".to_string()), "body");
        assert_eq!(report.render(), "# T\n\n**Disclaimer**: Fiction only.\n\nbody");
    }

    #[test]
    fn test_body_survives_render_verbatim() {
        let body = "line one\n\n## a heading\n\ttabbed";
        let report = Report::new("T", None, body);
        assert!(report.render().ends_with(body));
    }

    #[test]
    fn test_write_overwrites_not_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");

        Report::new("T", None, "first").write_to(&path).unwrap();
        Report::new("T", None, "second").write_to(&path).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "# T\n\nsecond");
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let report = Report::new("T", None, "body");
        let result = report.write_to("/nonexistent-dir/report.md");
        assert!(result.is_err());
    }
}
