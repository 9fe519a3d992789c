use std::path::Path;

use tracing::{info, warn};

use stockroute_allocation::Allocator;

use crate::dto::AllocationWithRemaining;
use crate::io::{read_input, write_output};

/// Flags of the `allocate` subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocateOptions {
    /// Pretty-print the JSON output.
    pub pretty: bool,
    /// Plan without drawing stock down.
    pub preview: bool,
    /// Include post-allocation warehouse stock in the output.
    pub remaining: bool,
}

pub fn allocate(
    input: Option<&Path>,
    output: Option<&Path>,
    options: AllocateOptions,
) -> anyhow::Result<()> {
    let body = read_input(input)?;
    let rendered = render(&body, options)?;
    write_output(output, &rendered)
}

/// Run one allocation over a JSON request body and render the JSON result.
pub fn render(body: &str, options: AllocateOptions) -> anyhow::Result<String> {
    let (order, mut warehouses) = super::parse_request(body)?.into_domain()?;
    let allocator = Allocator::new();

    let plan = if options.preview {
        allocator.preview(&order, &warehouses)
    } else {
        let allocation = allocator.draw(&order, &mut warehouses);
        if !allocation.is_fulfilled() {
            warn!(
                short_items = allocation.shortfall().line_count(),
                short_units = allocation.shortfall().total_units(),
                "order cannot be fulfilled from the given warehouses"
            );
        }
        allocation.into_plan()
    };

    info!(
        items = order.line_count(),
        warehouses = warehouses.len(),
        shipments = plan.len(),
        preview = options.preview,
        "allocation complete"
    );

    let value = if options.remaining {
        serde_json::to_value(AllocationWithRemaining { plan, warehouses })?
    } else {
        serde_json::to_value(plan)?
    };

    let rendered = if options.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(rendered)
}
