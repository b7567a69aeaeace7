//! Generated PDFs on local disk, addressed by file name.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;

const FILE_PREFIX: &str = "enhanced_resume_";
const FILE_EXTENSION: &str = ".pdf";

#[derive(Debug, Clone)]
pub struct PdfStorage {
    root: PathBuf,
}

impl PdfStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the output directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Writes `pdf` under a fresh unique name and returns that name.
    pub async fn save(&self, pdf: &[u8]) -> Result<String, AppError> {
        self.ensure_dir().await?;

        let filename = format!("{FILE_PREFIX}{}{FILE_EXTENSION}", Uuid::new_v4().simple());
        let path = self.root.join(&filename);
        tokio::fs::write(&path, pdf).await?;

        info!("Saved PDF {} ({} bytes)", path.display(), pdf.len());
        Ok(filename)
    }

    /// Reads a previously saved PDF. Names that could escape the output
    /// directory are treated as missing.
    pub async fn read(&self, filename: &str) -> Result<Bytes, AppError> {
        if !is_plain_filename(filename) {
            debug!("Rejected PDF file name {filename:?}");
            return Err(not_found());
        }

        match tokio::fs::read(self.root.join(filename)).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(e.into()),
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("PDF file not found".to_string())
}

fn is_plain_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}
