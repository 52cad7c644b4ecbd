use crate::commands::{CmdMessage, CmdResult};
use crate::document::Document;
use crate::error::Result;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default output name for a batch, e.g. `bingo-2024-03-01_09-30-00.html`.
pub fn default_filename(now: DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!("bingo-{}.html", now.format("%Y-%m-%d_%H-%M-%S")))
}

pub fn write_document<W: Write>(writer: W, document: &Document) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writer.write_all(document.to_html().as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn run(document: &Document, path: &Path) -> Result<CmdResult> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_document(file, document)?;

    let mut result = CmdResult::default().with_written_to(path.to_path_buf());
    result.add_message(CmdMessage::success(format!("Wrote {}", path.display())));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::assemble;
    use crate::styles::StyleSheet;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn filename_is_timestamped() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(
            default_filename(now),
            PathBuf::from("bingo-2024-03-01_09-30-00.html")
        );
    }

    #[test]
    fn writes_document_to_buffer() {
        let doc = assemble(&[], &StyleSheet::new(), true);
        let mut buf = Vec::new();
        write_document(&mut buf, &doc).unwrap();
        let html = String::from_utf8(buf).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn run_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("sheets.html");
        let doc = assemble(&[], &StyleSheet::new(), true);

        let result = run(&doc, &path).unwrap();
        assert_eq!(result.written_to.as_deref(), Some(path.as_path()));
        assert!(std::fs::read_to_string(&path).unwrap().contains("<html>"));
    }
}
