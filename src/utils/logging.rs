/// 日志工具模块
///
/// 提供日志初始化和流程各阶段的输出辅助函数
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::models::{Candidate, EnrichedRecord};

/// 初始化日志
///
/// `RUST_LOG` 优先；否则 verbose 时为 debug，默认 info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化时忽略错误（测试中可能多次调用）
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(keyword: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 问答检索启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🔑 关键词: {}", keyword);
    info!("{}", "=".repeat(60));
}

/// 记录搜索阶段结果
///
/// # 参数
/// - `total`: 接口返回的条数
/// - `candidates`: 保留下来的候选
pub fn log_search_complete(total: usize, candidates: &[Candidate]) {
    info!("✓ 搜索完成: 返回 {} 条，保留前 {} 条", total, candidates.len());
    for (i, c) in candidates.iter().enumerate() {
        info!(
            "  {}. {} [相似度: {:.4}]",
            i + 1,
            truncate_text(c.title(), 60),
            c.similarity
        );
    }
}

/// 记录详情阶段结果
pub fn log_enrich_complete(records: &[EnrichedRecord]) {
    let failed = records.iter().filter(|r| r.error().is_some()).count();
    info!(
        "✓ 详情查询完成: 成功 {}/{}，失败 {}",
        records.len() - failed,
        records.len(),
        failed
    );
}

/// 记录最终结果
pub fn log_final_result(record: &EnrichedRecord) {
    info!("\n{}", "─".repeat(60));
    info!("🏆 最佳匹配: {}", record);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
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
