//! Remote file reference resolution.
//!
//! Connectors receive file inputs as locator strings (`sldb:///<path>`). The
//! invocation layer only needs open, read fully, close semantics from the
//! collaborator that resolves them.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use stf_core::{ConnectorError, ConnectorResult};

/// Byte stream handed back by a [`RemoteFileStore`].
pub type FileStream = Box<dyn AsyncRead + Send + Unpin>;

/// Locator scheme for files managed by the hosting platform.
pub const SLDB_SCHEME: &str = "sldb://";

/// Resolves a remote file reference into a readable byte stream.
#[async_trait]
pub trait RemoteFileStore: Send + Sync {
    /// Open the file behind `reference`. Fails with
    /// [`ConnectorError::FileAccess`] when the reference is malformed or the
    /// file cannot be opened; no stream is left open on failure.
    async fn open(&self, reference: &str) -> ConnectorResult<FileStream>;
}

/// Filesystem-backed store mapping the `sldb:///` scheme onto a root
/// directory.
#[derive(Debug, Clone)]
pub struct SldbFileStore {
    root: PathBuf,
}

impl SldbFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, reference: &str) -> ConnectorResult<PathBuf> {
        let rest = reference.strip_prefix(SLDB_SCHEME).ok_or_else(|| {
            ConnectorError::FileAccess(format!("malformed file reference: {}", reference))
        })?;
        let relative = rest.trim_start_matches('/');
        if relative.is_empty() {
            return Err(ConnectorError::FileAccess(format!(
                "file reference has an empty path: {}",
                reference
            )));
        }
        // References must stay under the store root.
        if relative.split('/').any(|segment| segment == "..") {
            return Err(ConnectorError::FileAccess(format!(
                "file reference escapes the store root: {}",
                reference
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl RemoteFileStore for SldbFileStore {
    async fn open(&self, reference: &str) -> ConnectorResult<FileStream> {
        let path = self.resolve(reference)?;
        let file = tokio::fs::File::open(&path).await.map_err(|err| {
            ConnectorError::FileAccess(format!("cannot open {}: {}", reference, err))
        })?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn opens_and_reads_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("data.csv")).unwrap();
        file.write_all(b"id,name\n1,one\n").unwrap();

        let store = SldbFileStore::new(dir.path());
        let mut stream = store.open("sldb:///data.csv").await.unwrap();
        let mut content = Vec::new();
        stream.read_to_end(&mut content).await.unwrap();
        assert_eq!(content, b"id,name\n1,one\n");
    }

    #[tokio::test]
    async fn rejects_foreign_schemes() {
        let store = SldbFileStore::new("/tmp");
        let err = store.open("file:///etc/passwd").await.map(|_| ()).unwrap_err();
        assert!(matches!(err, ConnectorError::FileAccess(_)));
    }

    #[tokio::test]
    async fn rejects_an_empty_path() {
        let store = SldbFileStore::new("/tmp");
        let err = store.open("sldb:///").await.map(|_| ()).unwrap_err();
        assert!(matches!(err, ConnectorError::FileAccess(_)));
    }

    #[tokio::test]
    async fn rejects_parent_directory_segments() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("outside.txt"), b"secret").unwrap();
        let root = dir.path().join("store");
        std::fs::create_dir(&root).unwrap();

        let store = SldbFileStore::new(&root);
        let err = store.open("sldb:///../outside.txt").await.map(|_| ()).unwrap_err();
        assert!(matches!(err, ConnectorError::FileAccess(_)));
        assert!(err.to_string().contains("escapes the store root"));

        let err = store.open("sldb:///in/../../outside.txt").await.map(|_| ()).unwrap_err();
        assert!(matches!(err, ConnectorError::FileAccess(_)));
    }

    #[tokio::test]
    async fn missing_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SldbFileStore::new(dir.path());
        let err = store.open("sldb:///nope.csv").await.map(|_| ()).unwrap_err();
        assert!(matches!(err, ConnectorError::FileAccess(_)));
    }
}
