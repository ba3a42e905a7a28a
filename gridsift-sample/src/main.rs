use gridsift::{
    EngineConfig, FilterConfig, FilterEngine, FilterMode, FilterValue, SelectOption, ViewUpdate,
};
use gridsift_sources::{pump, JsonSource};
use serde_json::json;
use std::error::Error;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

fn print_view(label: &str, update: &ViewUpdate) {
    println!(
        "{label}: {} record(s), {} filter(s) active {:?}",
        update.records.len(),
        update.active_filters,
        update.active_fields
    );
    for record in &update.records {
        let cells: Vec<String> = record.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("  {}", cells.join("  "));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("gridsift=debug".parse()?))
        .compact()
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        // An inventory view: text search on sku/name, a price range, a
        // received-date range, and a status dropdown.
        let filters = FilterConfig::new()
            .text("sku")
            .text("name")
            .number("price")
            .date("received")
            .select(
                "status",
                vec![
                    SelectOption::new("Active", "Active"),
                    SelectOption::new("Discontinued", "Discontinued"),
                ],
            );
        let config = EngineConfig::new(filters).with_debounce(Duration::from_millis(50));

        let (engine, output) = FilterEngine::new(config);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let engine_task = tokio::spawn(engine.run(shutdown_rx));

        // Rows as they would arrive from the data-fetch collaborator.
        let source = JsonSource::new(&json!([
            { "sku": "A1", "name": "Apple crate", "price": 10, "received": "2024-01-05", "status": "Active" },
            { "sku": "B2", "name": "Banana box", "price": 25, "received": "2024-02-10", "status": "Active" },
            { "sku": "C3", "name": "Cherry pallet", "price": 40, "received": "2024-03-15", "status": "Discontinued" },
        ]))?;

        let handle = output.handle.clone();
        pump(&source, &handle).await?;
        print_view("initial", &output.updates.recv_async().await?);

        // Typing "a1 | b2" into the sku filter, debounced.
        handle.set_filter("sku", FilterValue::text("a1 | b2"))?;
        print_view("sku = a1 | b2", &output.updates.recv_async().await?);

        // A price range joins under AND.
        handle.set_filter("price", FilterValue::number_range(Some(20.0), Some(30.0)))?;
        print_view("and price 20..=30", &output.updates.recv_async().await?);

        // The same filters under OR.
        handle.set_mode(FilterMode::Or)?;
        print_view("or mode", &output.updates.recv_async().await?);

        // Clear-all applies immediately, no debounce wait.
        handle.clear_all()?;
        print_view("cleared", &output.updates.recv_async().await?);

        let _ = shutdown_tx.send(());
        engine_task.await?;
        Ok(())
    })
}
