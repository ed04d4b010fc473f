//! Pagination Walkthrough
//!
//! This example drives a pagination machine the way a UI control would.
//!
//! Key concepts:
//! - Configuration loaded from JSON, with omitted keys taking defaults
//! - Events dispatched from user interaction
//! - Guard-driven no-ops at the boundaries
//! - Automatic correction when a page size change strands the current page
//!
//! Run with: RUST_LOG=pagemind=debug cargo run --example pagination_walkthrough

use pagemind::{Event, PaginationConfig, PaginationMachine};
use tracing_subscriber::EnvFilter;

fn print_state(machine: &PaginationMachine) {
    let range = machine.page_range();
    println!(
        "  page {}/{} (items {}..{}), previous: {:?}, next: {:?}",
        machine.current_page(),
        machine.total_pages(),
        range.start,
        range.end,
        machine.previous_page(),
        machine.next_page(),
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Pagination Walkthrough ===\n");

    let config = PaginationConfig::from_json(r#"{"count": 95, "pageSize": 10}"#)?;
    let mut machine = PaginationMachine::builder()
        .config(config)
        .on_page_change(|details| {
            println!(
                "  -> page changed to {} ({} per page)",
                details.page, details.page_size
            );
        })
        .build();

    println!("Initial state:");
    print_state(&machine);

    println!("\nJump to the last page:");
    let last = machine.total_pages();
    machine.dispatch(Event::SetPage { page: last });
    print_state(&machine);
    println!("  label: {}", machine.context().item_label(last));

    println!("\nTry to go past the end:");
    let result = machine.dispatch(Event::NextPage);
    println!("  ignored: {}", result.is_ignored());

    println!("\nGrow the page size to 25:");
    machine.dispatch(Event::SetPageSize { size: 25 });
    print_state(&machine);

    println!("\nItems shrink to 3:");
    machine.dispatch(Event::SetCount { count: 3 });
    print_state(&machine);

    println!("\nVisited pages: {:?}", machine.history().pages());
    println!("\nSnapshot:\n{}", serde_json::to_string_pretty(&machine.snapshot())?);

    println!("\n=== Example Complete ===");
    Ok(())
}
