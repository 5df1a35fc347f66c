use dara_holiday_backend::error::AppError;
use dara_holiday_backend::run_server;
use dara_holiday_config::get_config;
use dara_holiday_telemetry::setup_telemetry;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_telemetry();

    let config = get_config()?;
    run_server(config).await?.await
}
