pub mod allocate;
pub mod validate;

use anyhow::Context;

use crate::dto::AllocationRequest;

/// Parse a JSON request body.
pub fn parse_request(body: &str) -> anyhow::Result<AllocationRequest> {
    serde_json::from_str(body).context("request is not a valid allocation request")
}
