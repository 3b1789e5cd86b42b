use clap::Parser;
use zbarshot::utils::{logger, validation::Validate};
use zbarshot::{CliConfig, ScanCommand, ScanError};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting zbarshot");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Scan failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), ScanError> {
    let config = cli.load_scan_config()?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e);
    }

    let engine = cli.build_engine(&config)?;

    let line = match cli.command.as_ref().unwrap_or(&ScanCommand::Scan) {
        ScanCommand::Scan => engine.run().await?,
        ScanCommand::Image { path } => engine.run_on_image(path).await?,
        ScanCommand::Line { barcode } => engine.convert(barcode).await?,
    };

    tracing::info!("✅ Typeable line ready ({} characters)", line.as_str().len());
    if cli.print_only {
        println!("{}", line);
    }

    Ok(())
}
