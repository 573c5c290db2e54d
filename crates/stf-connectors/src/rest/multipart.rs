//! Multipart upload building.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tokio::io::AsyncReadExt;

use stf_core::{ConnectorError, ConnectorResult};

use crate::remote::RemoteFileStore;

/// Entity carried by a request. File content is read fully up front so the
/// stream behind the reference is released before the transport runs, on
/// every path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityBody {
    /// A single file packaged as a named multipart part, keeping the
    /// original filename.
    MultipartFile {
        field_name: String,
        file_name: String,
        content: Bytes,
    },
}

impl EntityBody {
    /// Resolve `reference` through the remote file store, read it fully and
    /// package it under `field_name`. The display filename is the trailing
    /// path segment of the original reference.
    pub async fn multipart_from_reference(
        store: &dyn RemoteFileStore,
        reference: &str,
        field_name: &str,
    ) -> ConnectorResult<Self> {
        let file_name = display_file_name(reference);
        let mut stream = store.open(reference).await?;
        let mut content = Vec::new();
        stream.read_to_end(&mut content).await.map_err(|err| {
            ConnectorError::FileAccess(format!("failed to read {}: {}", reference, err))
        })?;
        tracing::debug!(
            reference,
            bytes = content.len(),
            "packaged multipart upload"
        );
        Ok(Self::MultipartFile {
            field_name: field_name.to_string(),
            file_name,
            content: content.into(),
        })
    }

    pub(crate) fn into_form(self) -> Form {
        match self {
            Self::MultipartFile { field_name, file_name, content } => {
                let part = Part::bytes(content.to_vec()).file_name(file_name);
                Form::new().part(field_name, part)
            }
        }
    }
}

fn display_file_name(reference: &str) -> String {
    reference.rsplit('/').next().unwrap_or(reference).to_string()
}
