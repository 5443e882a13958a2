// ==========================================
// 危险品包装标记系统 - 日志初始化
// ==========================================
// 工具: tracing + tracing-subscriber
// 红线: 引擎本身不做 I/O, 日志只描述决策过程
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统（宿主进程调用一次）
///
/// # 环境变量
/// - RUST_LOG: 级别过滤器，默认 info
///   例如: RUST_LOG=dg_marking=debug
pub fn init() {
    init_with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
}

/// 按指定过滤器初始化
pub fn init_with_filter(filter: EnvFilter) {
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 测试环境初始化：debug 级别 + 测试捕获输出
///
/// 可重复调用（try_init 失败时静默忽略）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
