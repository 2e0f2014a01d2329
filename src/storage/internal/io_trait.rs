use std::ffi::OsString;
use std::path::Path;

use tokio::{fs, io};

/// The slice of filesystem metadata the store cares about; lets the
/// mock io build entries without real `std::fs::Metadata` values.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EntryMetadata {
    pub is_dir: bool,
    pub len: u64,
}

impl From<std::fs::Metadata> for EntryMetadata {
    fn from(meta: std::fs::Metadata) -> Self {
        EntryMetadata {
            is_dir: meta.is_dir(),
            len: meta.len(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct DirEntryMeta {
    pub name: OsString,
    pub is_file: bool,
}

pub(crate) trait DocumentStoreIo: Send + Sync {
    async fn metadata(&self, path: &Path) -> io::Result<EntryMetadata> {
        Ok(fs::metadata(path).await?.into())
    }

    async fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryMeta>> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(path).await?;
        while let Some(entry) = dir.next_entry().await? {
            let file_type = entry.file_type().await?;
            entries.push(
                DirEntryMeta {
                    name: entry.file_name(),
                    is_file: file_type.is_file(),
                }
            );
        }
        Ok(entries)
    }

    async fn open_file(
        &self,
        path: &Path,
    ) -> io::Result<(impl io::AsyncRead + Unpin + Send, u64)> {
        let file = fs::File::open(path).await?;
        let len = file.metadata().await?.len();
        Ok((file, len))
    }

    async fn write_file(&self, path: &Path, data: &str) -> io::Result<()> {
        fs::write(path, data).await
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }
}

pub struct ProductionDocumentStoreIo;
impl DocumentStoreIo for ProductionDocumentStoreIo {}
