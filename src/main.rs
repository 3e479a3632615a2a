use advocate_directory::adapters::{http, source::source_from_location};
use advocate_directory::core::ConfigProvider;
use advocate_directory::utils::error::{DirectoryError, ErrorSeverity};
use advocate_directory::utils::{logger, validation::Validate};
use advocate_directory::{CliConfig, Directory, DirectoryConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let log_level = config.logging.level.as_deref();
    if config.json_logs() {
        logger::init_json_logger(log_level);
    } else {
        logger::init_cli_logger(log_level);
    }

    tracing::info!("Starting advocate-directory");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let directory = match load_directory(&config).await {
        Ok(directory) => directory,
        Err(e) => fail(&e),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    if let Err(e) = http::serve(listener, directory, shutdown_signal()).await {
        fail(&e);
    }

    Ok(())
}

async fn load_directory(config: &DirectoryConfig) -> advocate_directory::Result<Directory> {
    let source = source_from_location(config.data_source(), config.data_format())?;
    Directory::load(source.as_ref()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn fail(e: &DirectoryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
