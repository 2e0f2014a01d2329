use std::borrow::Cow;
use std::path::{Path, PathBuf};

use log::{error, warn};
use tokio::io;
use tokio::io::AsyncReadExt;

use crate::data::DocumentInfo;
use crate::document_name::DocumentName;
use crate::storage::errors::StorageError;
use crate::storage::internal::io_trait::DocumentStoreIo;

mod io_trait;

pub use io_trait::ProductionDocumentStoreIo;

const TMP_SUFFIX: &str = ".tmp";

pub type DocumentStore = DocumentStoreImpl<ProductionDocumentStoreIo>;

/// Flat-file document store over a single content directory. Every
/// operation resolves one validated name against the directory; nothing
/// else on the filesystem is reachable through it.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct DocumentStoreImpl<Io: DocumentStoreIo> {
    io: Io,
    content_dir: PathBuf,
    max_document_len: u64,
}

impl DocumentStore {
    pub async fn new(
        content_dir: impl Into<PathBuf>,
        max_document_len: u64,
    ) -> Result<DocumentStore, StorageError> {
        Self::new_internal(
            content_dir.into(),
            max_document_len,
            ProductionDocumentStoreIo,
        ).await
    }
}

#[allow(private_bounds)]
impl<Io: DocumentStoreIo> DocumentStoreImpl<Io> {
    async fn new_internal(
        content_dir: PathBuf,
        max_document_len: u64,
        io: Io,
    ) -> Result<DocumentStoreImpl<Io>, StorageError> {
        let meta = io.metadata(&content_dir).await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => StorageError::DirectoryDoesNotExist,
                _ => StorageError::Io(e),
            })?;
        if meta.is_dir {
            Ok(DocumentStoreImpl { io, content_dir, max_document_len })
        } else {
            Err(StorageError::DirectoryDoesNotExist)
        }
    }

    pub async fn list(&self) -> Result<Vec<DocumentInfo>, StorageError> {
        let mut documents = Vec::new();
        for entry in self.io.list_dir(&self.content_dir).await? {
            if !entry.is_file {
                continue;
            }
            let Some(name) = entry.name.to_str() else {
                warn!(
                    "skipping non-utf8 entry in {}",
                    self.content_dir.display(),
                );
                continue;
            };
            // names outside the accepted alphabet (dot-files, our own
            // temp files, spaces) are left alone but not listed, since
            // no route would accept them anyway
            match name.parse::<DocumentName>() {
                Ok(name) => documents.push(DocumentInfo::new(name)),
                Err(_) => warn!("skipping unaddressable entry {name:?}"),
            }
        }
        documents.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(documents)
    }

    pub async fn read(
        &self,
        name: &DocumentName,
    ) -> Result<String, StorageError> {
        let path = self.document_path(name);
        let (file, len) = self.io.open_file(&path).await
            .map_err(map_not_found)?;
        // the reported length is only a snapshot; the read itself
        // re-checks the limit in case the file grew in between
        if len > self.max_document_len {
            return Err(StorageError::TooBig);
        }
        read_limited_utf8_lossy(self.max_document_len, file).await
    }

    /// Creates the document if absent, otherwise replaces its content
    /// entirely. Goes through a temp file so a torn write never leaves
    /// a half-written document behind.
    pub async fn write(
        &self,
        name: &DocumentName,
        content: &str,
    ) -> Result<(), StorageError> {
        let path = self.document_path(name);
        let tmp_path = self.tmp_path(name);
        self.io.write_file(&tmp_path, content).await?;
        if let Err(e) = self.io.rename_file(&tmp_path, &path).await {
            if let Err(cleanup) = self.io.remove_file(&tmp_path).await {
                error!(
                    "failed to remove stale temp file {}: {}",
                    tmp_path.display(), cleanup,
                );
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// Creates an empty document; a taken name is a conflict, not an
    /// overwrite.
    pub async fn create(
        &self,
        name: &DocumentName,
    ) -> Result<(), StorageError> {
        if self.exists(name).await? {
            return Err(StorageError::AlreadyExists);
        }
        self.write(name, "").await
    }

    pub async fn delete(
        &self,
        name: &DocumentName,
    ) -> Result<(), StorageError> {
        self.io.remove_file(&self.document_path(name)).await
            .map_err(map_not_found)
    }

    pub async fn exists(
        &self,
        name: &DocumentName,
    ) -> Result<bool, StorageError> {
        match self.io.metadata(&self.document_path(name)).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn document_path(&self, name: &DocumentName) -> PathBuf {
        self.content_dir.join(name as &str)
    }

    // leading dot keeps in-flight writes invisible to list()
    fn tmp_path(&self, name: &DocumentName) -> PathBuf {
        self.content_dir.join(format!(".{}{}", name as &str, TMP_SUFFIX))
    }
}

fn map_not_found(e: io::Error) -> StorageError {
    match e.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound,
        _ => StorageError::Io(e),
    }
}

async fn read_limited_utf8_lossy<R: io::AsyncRead + Unpin>(
    limit: u64,
    reader: R,
) -> Result<String, StorageError> {
    let mut buf = Vec::new();
    io::BufReader::new(reader)
        .take(limit.saturating_add(1))
        .read_to_end(&mut buf)
        .await?;
    if buf.len() as u64 > limit {
        return Err(StorageError::TooBig);
    }
    Ok(
        match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(_) => unsafe { String::from_utf8_unchecked(buf) },
            owned @ Cow::Owned(_) => owned.into_owned(),
        }
    )
}
