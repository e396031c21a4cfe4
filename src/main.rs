use anyhow::Result;
use std::path::Path;
use tiku_adapter::utils::logging;
use tiku_adapter::{Config, QuestionType, SearchProvider, SearchRequest, ZeClient};
use tracing::{info, warn};

/// 用法: tiku_adapter <题干> [题型] [选项...]
#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = match std::env::var("TIKU_CONFIG_FILE") {
        Ok(path) => Config::from_toml_file(Path::new(&path)).await?,
        Err(_) => Config::from_env()?,
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    let mut args = std::env::args().skip(1);
    let Some(question) = args.next() else {
        anyhow::bail!("用法: tiku_adapter <题干> [题型] [选项...]");
    };
    let question_type = args
        .next()
        .map(|t| QuestionType::find(&t))
        .unwrap_or_default();
    let options: Vec<String> = args.collect();

    let client = ZeClient::from_config(&config);
    logging::log_startup(client.name(), client.endpoint(), client.is_enabled());

    let req = SearchRequest::new(question, options, question_type);
    let answer = match client.search_answer(&req).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!("❌ 搜索失败 ({:?}): {}", e.kind(), e);
            return Err(e.into());
        }
    };

    info!("✓ 找到 {} 组答案", answer.len());
    println!("{}", serde_json::to_string_pretty(&answer)?);

    Ok(())
}
