//! Asaas SDK demo.
//!
//! Reads `ASAAS_*` variables (set `ASAAS_SANDBOX=true` for the sandbox),
//! prints the account balance and walks the customer list.
//!
//! ```text
//! ASAAS_API_KEY=... ASAAS_SANDBOX=true cargo run -p asaas-demo -- 25
//! ```

use futures::TryStreamExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use asaas::{Asaas, CustomerFilter};

const DEFAULT_LIMIT: usize = 50;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,asaas=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let limit = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_LIMIT,
    };

    let client = Asaas::from_env()?;
    tracing::info!(
        base_url = %client.config().base_url(),
        sandbox = client.config().is_sandbox(),
        "Asaas client configured"
    );

    let balance = client.finance().get_balance().await?;
    tracing::info!(balance = %balance["balance"], "Account balance");

    let count = list_customers(&client, limit).await?;
    tracing::info!(count, "Listed customers");

    client.close();
    Ok(())
}

async fn list_customers(client: &Asaas, limit: usize) -> asaas::Result<usize> {
    let customers = client.customers();
    let paginator = customers
        .list_all(&CustomerFilter::default())
        .max_items(limit);

    let mut stream = std::pin::pin!(paginator.stream());
    let mut count = 0;
    while let Some(customer) = stream.try_next().await? {
        count += 1;
        println!(
            "{:<22} {:<40} {}",
            customer["id"].as_str().unwrap_or("-"),
            customer["name"].as_str().unwrap_or("-"),
            customer["email"].as_str().unwrap_or("-"),
        );
    }
    Ok(count)
}
