//! Receipt file-storage collaborator.

use std::fs;
use std::path::PathBuf;

use parchi_core::DomainError;
use uuid::Uuid;

use crate::error::StoreResult;

/// File types a payment receipt may be uploaded as.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Turns uploaded receipt bytes into a stable reference string.
///
/// The reference is stored verbatim on the record by `update_receipt`;
/// implementations must produce a fresh name per upload so saved files are
/// write-once (uploads for different records can never collide).
pub trait ReceiptStore: Send + Sync {
    fn save(&self, bytes: &[u8], filename_hint: &str) -> StoreResult<String>;
}

/// Writes receipts under a root directory.
#[derive(Debug, Clone)]
pub struct LocalReceiptStore {
    root: PathBuf,
}

impl LocalReceiptStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ReceiptStore for LocalReceiptStore {
    fn save(&self, bytes: &[u8], filename_hint: &str) -> StoreResult<String> {
        let extension = allowed_extension(filename_hint)?;
        fs::create_dir_all(&self.root)?;

        let fragment = Uuid::new_v4().simple().to_string();
        let name = format!("receipt_{}.{extension}", &fragment[..8]);
        let path = self.root.join(name);
        fs::write(&path, bytes)?;

        Ok(path.to_string_lossy().into_owned())
    }
}

fn allowed_extension(filename_hint: &str) -> Result<String, DomainError> {
    let extension = filename_hint
        .rsplit('.')
        .next()
        .filter(|ext| *ext != filename_hint)
        .map(str::to_lowercase)
        .ok_or_else(|| DomainError::validation("receipt filename has no extension"))?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DomainError::validation(format!(
            "receipt file type not allowed: {extension}"
        )));
    }
    Ok(extension)
}
