use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use stock_signals::config::AppConfig;
use stock_signals::core::analysis::AnalysisService;
use stock_signals::logging;
use stock_signals::services::ExchangeRouter;

const USAGE: &str =
    "usage: stock-signals <TICKER> [DAYS]  (Colombo listings: JKH.N0000 or CSELK:JKH.N0000)";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = AppConfig::from_env();
    logging::init_logging(&config.environment);

    let mut args = env::args().skip(1);
    let ticker = args.next().ok_or(USAGE)?;
    let days: Option<i64> = match args.next() {
        Some(raw) => Some(raw.parse().map_err(|_| USAGE)?),
        None => None,
    };

    let provider = Arc::new(ExchangeRouter::from_config(&config)?);
    let service = AnalysisService::new(provider);

    let report = service.analyze(&ticker).await?;
    for line in &report.log {
        println!("{}", line);
    }

    if let Some(days) = days {
        println!();
        println!("Forecast ({} business days):", days);
        for point in service.forecast(&ticker, days).await? {
            println!("  {}  {:.2}", point.date, point.predicted_close);
        }
    }

    Ok(())
}
