use crate::models::AnalysisModule;
use crate::services::insight::{CannedInsightProvider, InsightProvider, ANALYSIS_STEPS};
use crate::state::AppActions;

/// 按固定步骤播放分析加载序列，结束后填充画布内容。
///
/// wasm 上每步之间等待 `AppConfig::analysis_step_ms`；原生目标（测试、
/// 离线预览）没有事件循环可等，直接同步走完整个序列。
pub fn run_analysis_sequence(actions: AppActions, module: AnalysisModule) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        use gloo_timers::future::TimeoutFuture;

        let step_ms = crate::APP_CONFIG
            .get()
            .map(|config| config.analysis_step_ms)
            .unwrap_or(crate::config::DEFAULT_ANALYSIS_STEP_MS) as u32;

        for step in 0..ANALYSIS_STEPS.len() {
            actions.set_analysis_step(step);
            TimeoutFuture::new(step_ms).await;
        }

        actions.finish_analysis(CannedInsightProvider.analysis(module));
    });

    #[cfg(not(target_arch = "wasm32"))]
    {
        for step in 0..ANALYSIS_STEPS.len() {
            actions.set_analysis_step(step);
        }
        actions.finish_analysis(CannedInsightProvider.analysis(module));
    }
}
