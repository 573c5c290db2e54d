//! Generates a schema from an uploaded input file.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stf_core::{ConnectorResult, Emitter, ErrorReporter, ResponseShape};

use super::{deliver, require, sldb_reference, Connector};
use crate::endpoints::EndpointConfig;
use crate::remote::RemoteFileStore;
use crate::rest::{EntityBody, RestInvoker, RestMethod};

const INPUT_FILE_FIELD: &str = "inputFile";
const ERR_POSTING_DATA: &str = "Unable to post data";

/// Uploads a managed input file and asks the mapping service to derive a
/// schema for the given entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSchemaFromFile {
    #[serde(default)]
    pub endpoints: EndpointConfig,
    pub entity_id: String,
    pub tenant_id: String,
    pub version: String,
    /// Platform-managed path of the file to upload, without the scheme.
    pub input_file: String,
}

#[async_trait]
impl Connector for GenerateSchemaFromFile {
    fn validate(&self) -> ConnectorResult<()> {
        require(&self.entity_id, "Entity Id")?;
        require(&self.tenant_id, "Tenant Id")?;
        require(&self.version, "Version")?;
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
        let url = self.endpoints.generate_schema_from_file(
            &self.entity_id,
            &self.tenant_id,
            &self.version,
        );
        tracing::debug!(%url, "generating schema from file");
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
