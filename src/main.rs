use dotenvy::dotenv;
use precifica::{
    Result, Session,
    config::{self, AppConfig},
    core::{
        costing::{MarginAdvice, margin_advice},
        extraction::{MockExtractor, prefill_draft},
        report::{format_brl, format_ingredient_line, format_product_line, format_quota},
    },
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load settings and seed data
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Failed to read settings: {}", e))?;
    let seed = config::load_seed_or_default(&app_config.seed_path)
        .inspect_err(|e| error!("Failed to load seed data: {}", e))?;

    // 4. Build the session
    let session = Session::from_config(&app_config, &seed)
        .inspect_err(|e| error!("Seed data rejected: {}", e))?;

    // 5. Log the summary
    for ingredient in session.ingredients().iter() {
        info!("{}", format_ingredient_line(ingredient));
    }
    let summary = session.inventory_summary();
    info!(
        "Stock: {} ingredients worth {}, average unit price {}",
        summary.count,
        format_brl(summary.total_stock_value),
        format_brl(summary.average_unit_price)
    );

    for product in session.products().iter() {
        info!("{}", format_product_line(product));
        if margin_advice(product.margin_percent()) == MarginAdvice::BelowCost {
            warn!("{} sells below cost", product.name());
        }
    }
    info!("{}", format_quota(&session.quota()));
    info!("Credits: {}", session.credits().balance());

    // 6. Optionally prefill an ingredient from a photo
    if let Some(image_path) = std::env::args().nth(1) {
        let image = tokio::fs::read(&image_path)
            .await
            .inspect_err(|e| error!("Failed to read image {}: {}", image_path, e))?;
        info!("Reading fields from {}...", image_path);
        let draft = prefill_draft(&MockExtractor::default(), &image).await?;
        info!(
            "Prefilled draft: {} | {} {} | {}",
            draft.name,
            draft.quantity,
            draft.unit,
            format_brl(draft.unit_price)
        );
    }

    Ok(())
}
