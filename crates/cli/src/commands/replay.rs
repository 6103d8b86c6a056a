//! Replay a script of cart actions.
//!
//! The script is a YAML (or JSON, which YAML accepts) list of tagged actions:
//!
//! ```yaml
//! - type: add
//!   name: Aloe Vera
//!   cost: "$15"
//! - type: set_quantity
//!   name: Aloe Vera
//!   amount: 5
//! - type: remove
//!   name: Aloe Vera
//! ```

use std::path::Path;

use paradise_nursery_core::view::CartSummary;
use paradise_nursery_core::{CartAction, CartStore, format_amount};
use tracing::info;

/// Outcome of one replayed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: CartAction,
    pub items: usize,
    pub total_quantity: u64,
    pub total_amount: String,
}

/// Parse a script.
///
/// # Errors
///
/// Returns an error if the script is not a list of cart actions.
pub fn parse_script(content: &str) -> Result<Vec<CartAction>, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Apply actions in order to an empty cart.
#[must_use]
pub fn replay(actions: Vec<CartAction>) -> (CartStore, Vec<Step>) {
    let mut store = CartStore::new();
    let steps = actions
        .into_iter()
        .map(|action| {
            let cart = store.dispatch(action.clone());
            Step {
                action,
                items: cart.len(),
                total_quantity: cart.total_quantity(),
                total_amount: format_amount(cart.total_amount()),
            }
        })
        .collect();
    (store, steps)
}

/// Replay the script at `script_path` and print the resulting cart.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn run(script_path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(script_path);
    if !path.exists() {
        return Err(format!("File not found: {script_path}").into());
    }

    info!(path = %script_path, "Loading cart script");
    let content = tokio::fs::read_to_string(path).await?;
    let actions = parse_script(&content)?;
    info!(actions = actions.len(), "Parsed script");

    let (store, steps) = replay(actions);
    for (n, step) in steps.iter().enumerate() {
        info!(
            step = n + 1,
            action = ?step.action,
            items = step.items,
            quantity = step.total_quantity,
            total = %step.total_amount,
            "Applied"
        );
    }

    let summary = CartSummary::from(store.cart());
    if json {
        print_json(&summary)?;
    } else {
        print_table(&summary);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_json(summary: &CartSummary) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_table(summary: &CartSummary) {
    for line in &summary.lines {
        println!(
            "{:<24} {:>5} x {:>10} = {:>10}",
            line.name, line.qty, line.unit_price, line.total
        );
    }
    println!("Total Cart Amount: ${}", summary.total_amount);
}
