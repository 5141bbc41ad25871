//! Spreadsheet export.
//!
//! Projects the post sequence into a 4-column table and serializes it as
//! a workbook or delimited text. Output is assembled fully in memory, so
//! a serialization failure never leaves a partial file behind.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use postline_core::domain::Post;

mod delimited;

mod workbook;

/// Column headers, in required order.
pub const HEADERS: [&str; 4] = ["Date & Time", "Platform", "Caption", "Status"];

/// Column widths in character units: stamp, platform, caption, status.
pub const COLUMN_WIDTHS: [f64; 4] = [20.0, 15.0, 50.0, 12.0];

/// Sheet name in the workbook variant.
pub const SHEET_NAME: &str = "Scheduled Posts";

const FILENAME_STEM: &str = "social-scheduler-posts";

/// Export serialization errors, surfaced to the caller as a user-visible
/// failure.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Workbook serialization failed: {0}")]
    Workbook(String),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("File write failed: {0}")]
    Io(String),
}

/// Target format. The two variants carry the same columns in the same
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Workbook,
    Csv,
}

impl ExportFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "xlsx" => Some(Self::Workbook),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Workbook => "xlsx",
            Self::Csv => "csv",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Workbook => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            Self::Csv => "text/csv; charset=utf-8",
        }
    }
}

/// One spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub date_time: String,
    pub platform: String,
    pub caption: String,
    pub status: String,
}

impl ExportRow {
    fn from_post(post: &Post) -> Self {
        Self {
            date_time: format!(
                "{} {}",
                post.scheduled_date.format("%Y-%m-%d"),
                post.scheduled_time.format("%H:%M")
            ),
            platform: post.platform.as_str().to_string(),
            caption: post.caption.clone(),
            status: post.status.label().to_string(),
        }
    }
}

/// A fully assembled export, ready to stream or write to disk.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Persist under `dir` via a temp file and rename, so a failed write
    /// leaves nothing partial behind. Returns the full path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.filename);
        let tmp = dir.join(format!(".{}.tmp", self.filename));

        std::fs::write(&tmp, &self.bytes).map_err(|err| ExportError::Io(err.to_string()))?;
        std::fs::rename(&tmp, &path).map_err(|err| ExportError::Io(err.to_string()))?;

        Ok(path)
    }
}

/// Serialize `posts` in `format`. `today` stamps the filename - the date
/// of export, not of any post.
pub fn export_posts(
    posts: &[Post],
    format: ExportFormat,
    today: NaiveDate,
) -> Result<ExportFile, ExportError> {
    let rows: Vec<ExportRow> = posts.iter().map(ExportRow::from_post).collect();

    let bytes = match format {
        ExportFormat::Workbook => workbook::serialize(&rows)?,
        ExportFormat::Csv => delimited::serialize(&rows)?,
    };

    Ok(ExportFile {
        filename: format!(
            "{FILENAME_STEM}-{}.{}",
            today.format("%Y-%m-%d"),
            format.extension()
        ),
        content_type: format.content_type(),
        bytes,
    })
}
