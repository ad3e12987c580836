//! Restaurant API server
//!
//! Loads configuration (see `DINEIN_CONFIG` / `DINEIN_PORT`), seeds the
//! in-memory stores and serves the dishes and orders routes.
//!
//! ```text
//! DINEIN_CONFIG=dinein.yaml cargo run --example server
//! ```

use anyhow::Result;
use dinein::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging.filter);

    let module = RestaurantModule::in_memory();
    if !config.seed.is_empty() {
        module.seed(&config.seed).await?;
    }

    tracing::info!(
        module = module.name(),
        version = module.version(),
        entities = ?module.entity_types(),
        "starting service"
    );

    println!("\n🌐 Server running on http://{}", config.server.bind_address()?);
    println!("\n  🍽  Dishes");
    println!("    GET    /dishes              - List all dishes");
    println!("    POST   /dishes              - Create a dish");
    println!("    GET    /dishes/{{dishId}}     - Get a dish");
    println!("    PUT    /dishes/{{dishId}}     - Update a dish");
    println!("\n  🧾 Orders");
    println!("    GET    /orders              - List all orders");
    println!("    POST   /orders              - Create an order");
    println!("    GET    /orders/{{orderId}}    - Get an order");
    println!("    PUT    /orders/{{orderId}}    - Update an order");
    println!("    DELETE /orders/{{orderId}}    - Delete a pending order");

    ServerBuilder::new()
        .with_service_name(config.server.service_name.clone())
        .register_module(module)
        .serve(config.server.bind_address()?)
        .await
}
