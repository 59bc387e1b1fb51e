use clap::Parser;
use report_delivery::utils::logger;
use report_delivery::{AppError, CliConfig, Settings, Showcase};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting report-delivery");

    if let Err(e) = run(&cli) {
        // 記錄詳細錯誤信息
        tracing::error!("❌ Run failed: {:#}", e);

        match e.downcast_ref::<AppError>() {
            Some(app_error) => {
                eprintln!("❌ {}", app_error.user_friendly_message());
                eprintln!("💡 {}", app_error.recovery_suggestion());
                std::process::exit(app_error.exit_code());
            }
            None => {
                eprintln!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let settings = Settings::resolve(cli)?;
    let showcase = Showcase::new(settings);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = showcase.run(stdin.lock(), stdout.lock())?;

    tracing::info!("✅ Finished with {} delivery", summary.carrier);
    Ok(())
}
