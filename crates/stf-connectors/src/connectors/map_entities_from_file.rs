//! Maps entities from an uploaded input file.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stf_core::{ConnectorResult, Emitter, ErrorReporter, ResponseShape};

use super::{deliver, require, sldb_reference, Connector};
use crate::endpoints::EndpointConfig;
use crate::remote::RemoteFileStore;
use crate::rest::{EntityBody, RestInvoker, RestMethod};

const INPUT_FILE_FIELD: &str = "inputFile";
const ERR_POSTING_DATA: &str = "Unable to post data";

/// Uploads a managed input file and applies the given entity mapping to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapEntitiesFromFile {
    #[serde(default)]
    pub endpoints: EndpointConfig,
    pub mapping_id: String,
    /// Platform-managed path of the file to upload, without the scheme.
    pub input_file: String,
}

#[async_trait]
impl Connector for MapEntitiesFromFile {
    fn validate(&self) -> ConnectorResult<()> {
        require(&self.mapping_id, "Mapping Id")?;
        require(&self.input_file, "Input File")
    }

    async fn execute(
        &self,
        invoker: &RestInvoker,
        store: &dyn RemoteFileStore,
        emitter: &dyn Emitter,
        reporter: &dyn ErrorReporter,
    ) -> ConnectorResult<()> {
        self.validate()?;
        let reference = sldb_reference(&self.input_file);
        let payload =
            EntityBody::multipart_from_reference(store, &reference, INPUT_FILE_FIELD).await?;
        let url = self.endpoints.map_entities_from_file(&self.mapping_id);
        tracing::debug!(%url, "mapping entities from file");
        let result = invoker
            .invoke(
                RestMethod::Post,
                Some(payload),
                &url,
                ResponseShape::StructuredObject,
            )
            .await?;
        deliver(result, ERR_POSTING_DATA, emitter, reporter).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_mapping_id_fails_validation() {
        let connector = MapEntitiesFromFile {
            endpoints: EndpointConfig::default(),
            mapping_id: String::new(),
            input_file: "in/data.csv".to_string(),
        };
        let err = connector.validate().unwrap_err();
        assert!(err.to_string().contains("Mapping Id"));
    }
}
