use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dnd_reorder::{reorder_with, InvalidMovePolicy, MoveRequest};
use serde_json::Value;
use tracing::info;

/// Reorders a JSON array the way a drag & drop list would after a drop.
#[derive(Parser, Debug)]
struct Cli {
    /// JSON array to reorder, e.g. '["a","b","c"]'
    #[arg(long)]
    items: String,
    /// Original positions of the dragged elements
    #[arg(long, value_delimiter = ',', required = true)]
    from: Vec<usize>,
    /// Drop positions, one per dragged element
    #[arg(long, value_delimiter = ',', required = true)]
    to: Vec<usize>,
    #[arg(long, value_enum, default_value_t = Policy::Reject)]
    policy: Policy,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Policy {
    Reject,
    Skip,
    Clamp,
}

impl From<Policy> for InvalidMovePolicy {
    fn from(value: Policy) -> Self {
        match value {
            Policy::Reject => InvalidMovePolicy::Reject,
            Policy::Skip => InvalidMovePolicy::Skip,
            Policy::Clamp => InvalidMovePolicy::Clamp,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let items: Vec<Value> =
        serde_json::from_str(&cli.items).context("--items must be a JSON array")?;
    let request = MoveRequest::unchecked(cli.from, cli.to);

    info!(len = items.len(), moved = request.len(), policy = ?cli.policy, "reordering");
    let reordered = reorder_with(&items, &request, cli.policy.into())?;

    println!("{}", serde_json::to_string(&reordered)?);
    Ok(())
}
