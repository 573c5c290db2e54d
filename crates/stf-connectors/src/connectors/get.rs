//! Fetches data from a caller-supplied URL.
//!
//! Unlike the endpoint connectors this one carries no URL template; the
//! caller provides the full URL and the connector performs a plain GET.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stf_core::{ConnectorResult, Emitter, ErrorReporter, ResponseShape};

use super::{deliver, require, Connector};
use crate::remote::RemoteFileStore;
use crate::rest::{RestInvoker, RestMethod};

const ERR_FETCHING_DATA: &str = "Unable to fetch data";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Get {
    pub url: String,
}

#[async_trait]
impl Connector for Get {
    fn validate(&self) -> ConnectorResult<()> {
        require(&self.url, "URL")
    }

    async fn execute(
        &self,
        invoker: &RestInvoker,
        _store: &dyn RemoteFileStore,
        emitter: &dyn Emitter,
        reporter: &dyn ErrorReporter,
    ) -> ConnectorResult<()> {
        self.validate()?;
        tracing::debug!(url = %self.url, "fetching data from user-provided URL");
        let result = invoker
            .invoke(
                RestMethod::Get,
                None,
                &self.url,
                ResponseShape::StructuredObject,
            )
            .await?;
        deliver(result, ERR_FETCHING_DATA, emitter, reporter).await;
        Ok(())
    }
}
