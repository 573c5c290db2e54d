//! The shared invoker: builds the request, executes it once under timeout
//! constraints, classifies the outcome by status code and decodes the body.

use std::ops::RangeInclusive;
use std::time::Instant;

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use tokio::time::timeout;

use stf_core::{ConnectorError, ConnectorResult, InvocationResult, ResponseShape};

use super::decode;
use super::multipart::EntityBody;
use super::request::{RequestSpec, RestMethod};
use super::timeout::TimeoutConfig;

/// Inclusive status range treated as success.
const SUCCESS_RANGE: RangeInclusive<u16> = 200..=202;

/// Raw transport outcome: the status line plus the entity bytes, if any.
/// Entity bytes of out-of-range responses are dropped unread.
#[derive(Debug)]
struct RawResponse {
    status: StatusCode,
    entity: Option<Bytes>,
}

/// Method-agnostic HTTP invoker shared by all connectors.
///
/// Holds one long-lived client configured with the connection timeout; the
/// socket timeout bounds each call. The invoker carries no per-call state, so
/// a single instance can be shared across sequential or concurrent calls.
#[derive(Debug, Clone)]
pub struct RestInvoker {
    client: Client,
    timeouts: TimeoutConfig,
}

impl RestInvoker {
    pub fn new() -> ConnectorResult<Self> {
        Self::with_timeouts(TimeoutConfig::default())
    }

    pub fn with_timeouts(timeouts: TimeoutConfig) -> ConnectorResult<Self> {
        timeouts.validate()?;
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(|err| {
                ConnectorError::Network(format!("failed to build HTTP client: {}", err))
            })?;
        Ok(Self { client, timeouts })
    }

    /// Execute one call: build the request for `method` and `url`, attach the
    /// payload when the method carries an entity, run it exactly once, and
    /// classify the response. Transport failures and timeout expiry surface
    /// as [`ConnectorError::Network`]; non-2xx outcomes are a normal
    /// [`InvocationResult::Failure`].
    pub async fn invoke(
        &self,
        method: RestMethod,
        payload: Option<EntityBody>,
        url: &str,
        shape: ResponseShape,
    ) -> ConnectorResult<InvocationResult> {
        let spec = RequestSpec::new(method, url).with_payload(payload);
        let request = self.build_request(spec)?;
        let started = Instant::now();
        let raw = self.execute(request).await?;
        tracing::debug!(
            status = raw.status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            %url,
            "request completed"
        );
        Ok(classify(raw, shape))
    }

    fn build_request(&self, spec: RequestSpec) -> ConnectorResult<reqwest::Request> {
        let url = url::Url::parse(&spec.url).map_err(|err| {
            ConnectorError::invalid_config(format!("invalid URL '{}': {}", spec.url, err))
        })?;
        let mut builder = self.client.request(spec.method.to_reqwest(), url);
        if let Some(payload) = spec.payload {
            if spec.method.supports_entity() {
                builder = builder.multipart(payload.into_form());
            }
        }
        builder
            .build()
            .map_err(|err| ConnectorError::Network(format!("failed to build request: {}", err)))
    }

    /// One attempt, no retry. The socket timeout covers the round trip
    /// including the body read.
    async fn execute(&self, request: reqwest::Request) -> ConnectorResult<RawResponse> {
        let round_trip = async {
            let response = self.client.execute(request).await?;
            let status = response.status();
            let entity = if SUCCESS_RANGE.contains(&status.as_u16()) {
                Some(response.bytes().await?)
            } else {
                None
            };
            Ok::<_, reqwest::Error>(RawResponse { status, entity })
        };
        match timeout(self.timeouts.socket, round_trip).await {
            Ok(Ok(raw)) => Ok(raw),
            Ok(Err(err)) => Err(ConnectorError::Network(format!("request failed: {}", err))),
            Err(_) => Err(ConnectorError::Network(format!(
                "request timed out after {:?}",
                self.timeouts.socket
            ))),
        }
    }
}

/// Pure classification: success status with a present entity decodes into a
/// document; everything else carries the status line only.
fn classify(raw: RawResponse, shape: ResponseShape) -> InvocationResult {
    let status_code = raw.status.as_u16();
    match raw.entity {
        Some(entity) if SUCCESS_RANGE.contains(&status_code) && !entity.is_empty() => {
            InvocationResult::Success(decode::decode(&entity, shape))
        }
        _ => InvocationResult::Failure {
            status_code,
            reason_phrase: raw
                .status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
        },
    }
}
