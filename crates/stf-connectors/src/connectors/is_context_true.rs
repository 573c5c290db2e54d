//! Evaluates whether a context holds for a tenant.
//!
//! The backend answers with a bare text token rather than a JSON document,
//! so this connector asks for the raw-token response shape.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stf_core::{ConnectorResult, Emitter, ErrorReporter, ResponseShape};

use super::{deliver, require, Connector};
use crate::endpoints::EndpointConfig;
use crate::remote::RemoteFileStore;
use crate::rest::{RestInvoker, RestMethod};

const ERR_FETCHING_DATA: &str = "Unable to fetch data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsContextTrue {
    #[serde(default)]
    pub endpoints: EndpointConfig,
    pub tenant_id: String,
    pub context_id: String,
}

#[async_trait]
impl Connector for IsContextTrue {
    fn validate(&self) -> ConnectorResult<()> {
        require(&self.tenant_id, "Tenant Id")?;
        require(&self.context_id, "Context Id")
    }

    async fn execute(
        &self,
        invoker: &RestInvoker,
        _store: &dyn RemoteFileStore,
        emitter: &dyn Emitter,
        reporter: &dyn ErrorReporter,
    ) -> ConnectorResult<()> {
        self.validate()?;
        let url = self
            .endpoints
            .is_context_true(&self.tenant_id, &self.context_id);
        tracing::debug!(%url, "evaluating context");
        let result = invoker
            .invoke(RestMethod::Post, None, &url, ResponseShape::RawToken)
            .await?;
        deliver(result, ERR_FETCHING_DATA, emitter, reporter).await;
        Ok(())
    }
}
