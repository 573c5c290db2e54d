//! The shared HTTP invocation layer.

pub mod decode;
pub mod invoker;
pub mod multipart;
pub mod request;
pub mod timeout;

pub use invoker::RestInvoker;
pub use multipart::EntityBody;
pub use request::{RequestSpec, RestMethod};
pub use timeout::TimeoutConfig;
