use crate::fixtures::insights;
use crate::models::{AnalysisBundle, AnalysisModule};

/// 分析内容的提供方。真实推理服务接入前，由固定内容实现充当占位，
/// 固定内容也保证了分析结果在测试中可精确断言。
pub trait InsightProvider {
    fn analysis(&self, module: AnalysisModule) -> AnalysisBundle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CannedInsightProvider;

impl InsightProvider for CannedInsightProvider {
    fn analysis(&self, module: AnalysisModule) -> AnalysisBundle {
        insights::analysis_bundle(module)
    }
}

/// 分析弹窗的加载阶段文案，按顺序播放。
pub const ANALYSIS_STEPS: [&str; 4] = [
    "正在汇聚诉求数据...",
    "智能模型分析中...",
    "识别异常与模式...",
    "生成优化建议...",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_provider_is_deterministic() {
        let provider = CannedInsightProvider;
        let first = provider.analysis(AnalysisModule::Scenario);
        let second = provider.analysis(AnalysisModule::Scenario);
        assert_eq!(first, second);
        assert!(!first.key_metrics.is_empty());
    }

    #[test]
    fn every_module_has_content() {
        let provider = CannedInsightProvider;
        for module in [
            AnalysisModule::Scenario,
            AnalysisModule::EnterpriseChain,
            AnalysisModule::Innovation,
        ] {
            let bundle = provider.analysis(module);
            assert!(!bundle.key_metrics.is_empty(), "{module:?} lacks metrics");
            assert!(!bundle.recommendations.is_empty(), "{module:?} lacks recommendations");
            assert_eq!(bundle.prediction_series.len(), 5);
        }
    }
}
