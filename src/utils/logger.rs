use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先，否則使用設定的等級 (預設 info)
fn default_directive(level: Option<&str>) -> String {
    match level.map(str::trim).filter(|level| !level.is_empty()) {
        Some(level) => format!("advocate_directory={}", level.to_lowercase()),
        None => "advocate_directory=info".to_string(),
    }
}

fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

pub fn init_cli_logger(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 部署環境使用 JSON 格式，方便日誌收集
pub fn init_json_logger(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
