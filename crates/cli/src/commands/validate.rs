use std::path::Path;

use tracing::info;

use crate::io::read_input;

/// Shape of a request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSummary {
    pub items: usize,
    pub units: u64,
    pub warehouses: usize,
}

pub fn validate(input: Option<&Path>) -> anyhow::Result<()> {
    let body = read_input(input)?;
    let summary = summarize(&body)?;
    println!(
        "✓ valid request: {} item(s), {} unit(s), {} warehouse(s)",
        summary.items, summary.units, summary.warehouses
    );
    Ok(())
}

/// Parse and validate a request body without allocating.
pub fn summarize(body: &str) -> anyhow::Result<RequestSummary> {
    let (order, warehouses) = super::parse_request(body)?.into_domain()?;
    let summary = RequestSummary {
        items: order.line_count(),
        units: order.total_units(),
        warehouses: warehouses.len(),
    };
    info!(?summary, "request validated");
    Ok(summary)
}
