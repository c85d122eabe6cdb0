//! Local validation of files attached in chat mode.
//!
//! Files are listed for the user but never transmitted; validation only
//! checks the extension against the formats the analysis service reads.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".csv", ".xlsx", ".xls", ".json"];

/// An accepted attachment.
#[derive(Clone, Debug, PartialEq)]
pub struct FileInfo {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub selected_at: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("{name}: 不支持的文件格式")]
    Unsupported { name: String },
}

/// Result of validating one selection or drop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadBatch {
    pub accepted: Vec<FileInfo>,
    pub rejected: Vec<UploadError>,
}

/// Lowercased extension including the dot; a name without a dot is treated
/// as all extension.
pub fn extension_of(name: &str) -> String {
    let last = name.rsplit('.').next().unwrap_or(name);
    format!(".{}", last.to_lowercase())
}

/// # Errors
///
/// Returns [`UploadError::Unsupported`] for extensions outside
/// [`SUPPORTED_EXTENSIONS`].
pub fn validate_upload(name: &str) -> Result<(), UploadError> {
    if SUPPORTED_EXTENSIONS.contains(&extension_of(name).as_str()) {
        Ok(())
    } else {
        Err(UploadError::Unsupported { name: name.to_owned() })
    }
}

/// Split `(name, size, mime)` triples into accepted files and rejections.
pub fn partition_uploads(files: impl IntoIterator<Item = (String, u64, String)>, now_ms: f64) -> UploadBatch {
    let mut batch = UploadBatch::default();
    for (name, size, mime) in files {
        match validate_upload(&name) {
            Ok(()) => batch.accepted.push(FileInfo {
                id: uuid::Uuid::new_v4().to_string(),
                name,
                size,
                mime,
                selected_at: now_ms,
            }),
            Err(err) => batch.rejected.push(err),
        }
    }
    batch
}

/// Human-readable size: `512 B`, `1.5 KB`, `2.0 MB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}
