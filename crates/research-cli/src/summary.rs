use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use research_common::Result;

pub const REPORT_HEADER: &str = "# Daily Industry Research Report\n\n";

/// Append-only writer for the job summary artifact.
///
/// Writes go to the configured file path, or to stdout when none is
/// set. The file is opened and closed per call; the process is the
/// single writer so no locking is needed.
pub struct SummaryWriter {
    path: Option<PathBuf>,
}

impl SummaryWriter {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Append `text`, with the fixed report header prepended when
    /// `header` is set (first write of a run only). Non-empty text
    /// gains a trailing newline when missing, so consecutive writes
    /// never run together.
    pub async fn write(&self, text: &str, header: bool) -> Result<()> {
        let mut chunk = String::new();
        if header {
            chunk.push_str(REPORT_HEADER);
        }
        if !text.is_empty() {
            chunk.push_str(text);
            if !text.ends_with('\n') {
                chunk.push('\n');
            }
        }

        match &self.path {
            Some(path) => {
                let mut file = tokio::fs::OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .await?;
                file.write_all(chunk.as_bytes()).await?;
            }
            None => print!("{chunk}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn header_write_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        let writer = SummaryWriter::new(Some(path.clone()));

        writer.write("", true).await.unwrap();
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, REPORT_HEADER);
    }

    #[tokio::test]
    async fn appends_gain_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        let writer = SummaryWriter::new(Some(path.clone()));

        writer.write("", true).await.unwrap();
        writer.write("abc", false).await.unwrap();
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, format!("{REPORT_HEADER}abc\n"));

        writer.write("line\n", false).await.unwrap();
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.ends_with("abc\nline\n"));
    }

    #[tokio::test]
    async fn consecutive_writes_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        let writer = SummaryWriter::new(Some(path.clone()));

        writer.write("first", false).await.unwrap();
        writer.write("second", false).await.unwrap();
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
