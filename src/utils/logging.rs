/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志系统
///
/// # 参数
/// - `verbose`: 是否输出 debug 日志（RUST_LOG 优先）
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

/// 测试用日志初始化，可重复调用
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(
            fmt::layer()
                .with_test_writer()
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `provider`: 题库名称
/// - `endpoint`: 题库接口地址
/// - `enabled`: 是否启用
pub fn log_startup(provider: &str, endpoint: &str, enabled: bool) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 题库适配器启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "📚 题库: {} ({}) {}",
        provider,
        endpoint,
        if enabled { "已启用" } else { "未启用" }
    );
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
