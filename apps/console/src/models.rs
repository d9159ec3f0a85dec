use serde::{Deserialize, Serialize};

/// 可被督办的基层单位，来自固定目录，创建后不再变更。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub category: String,
    pub pending_issues: u32,
    pub description: String,
}

/// 可推送的报告类型描述符。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportType {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushFrequency {
    Realtime,
    Daily,
    Weekly,
    Monthly,
}

impl Default for PushFrequency {
    fn default() -> Self {
        PushFrequency::Daily
    }
}

impl PushFrequency {
    pub const ALL: [PushFrequency; 4] = [
        PushFrequency::Realtime,
        PushFrequency::Daily,
        PushFrequency::Weekly,
        PushFrequency::Monthly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Realtime => "实时督办",
            Self::Daily => "每日督办",
            Self::Weekly => "每周督办",
            Self::Monthly => "每月督办",
        }
    }

    /// 定时督办的执行时点描述。
    pub fn schedule_label(self) -> &'static str {
        match self {
            Self::Realtime => "实时督办",
            Self::Daily => "每日 09:00",
            Self::Weekly => "每周一 09:00",
            Self::Monthly => "每月1号 09:00",
        }
    }
}

/// 一次"立即督办"动作的快照。`total_issues` 在创建时固定，
/// 后续目录变化不会回溯修改既有记录。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PushRecord {
    pub timestamp: String,
    pub units: Vec<Unit>,
    pub reports: Vec<ReportType>,
    pub frequency: PushFrequency,
    pub total_issues: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// 边界为严格大于：21 为高，20/11 为中，10 为低。
    pub fn from_pending(pending_issues: u32) -> Self {
        if pending_issues > 20 {
            Self::High
        } else if pending_issues > 10 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "高优先级",
            Self::Medium => "中优先级",
            Self::Low => "低优先级",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High => "rounded-full border border-red-300 bg-red-50 px-2 py-0.5 text-[11px] text-red-700",
            Self::Medium => "rounded-full border border-amber-300 bg-amber-50 px-2 py-0.5 text-[11px] text-amber-700",
            Self::Low => "rounded-full border border-slate-300 bg-slate-50 px-2 py-0.5 text-[11px] text-slate-600",
        }
    }
}

/// 工作台中一张可操作的任务卡片，由推送记录按 单位×报告 展开得到，
/// 只在渲染时派生，从不落库。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub category: String,
    pub description: String,
    pub deadline: String,
    pub impact: String,
    pub timestamp: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisModule {
    Scenario,
    EnterpriseChain,
    Innovation,
}

impl AnalysisModule {
    pub fn title(self) -> &'static str {
        match self {
            Self::Scenario => "场景定位分析",
            Self::EnterpriseChain => "企业链画像",
            Self::Innovation => "企业创新分析",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
    pub trend: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: String,
    pub description: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsightPattern {
    pub name: String,
    pub description: String,
    pub confidence: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub factor_a: String,
    pub coefficient: String,
    pub factor_b: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    pub predicted: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub title: String,
    pub value: String,
    pub timeframe: String,
    pub accuracy: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub impact: String,
}

/// 一次 AI 分析弹窗所需的全部内容。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    #[serde(default)]
    pub key_metrics: Vec<KeyMetric>,
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
    #[serde(default)]
    pub patterns: Vec<InsightPattern>,
    #[serde(default)]
    pub correlations: Vec<Correlation>,
    #[serde(default)]
    pub prediction_series: Vec<PredictionPoint>,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTask {
    pub id: u32,
    pub title: String,
    pub priority: Priority,
    pub category: String,
    pub description: String,
    pub actions: Vec<String>,
    pub deadline: String,
    pub impact: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalTask {
    pub id: u32,
    pub title: String,
    pub status: String,
    pub urgency: Priority,
    pub time: String,
    pub unit: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeCategory {
    pub category: String,
    pub count: u32,
    pub recent: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiSuggestion {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub action: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub trend: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorGroup {
    pub name: String,
    pub indicators: Vec<IndicatorReading>,
}

/// 首页场景定位卡片（政策直达 / 产业协同 / 精准服务 / 风险治理）。
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCard {
    pub title: String,
    pub lifecycle: String,
    pub description: String,
    pub groups: Vec<IndicatorGroup>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionTile {
    pub label: String,
    pub value: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_boundaries_are_strictly_greater_than() {
        assert_eq!(Priority::from_pending(21), Priority::High);
        assert_eq!(Priority::from_pending(20), Priority::Medium);
        assert_eq!(Priority::from_pending(11), Priority::Medium);
        assert_eq!(Priority::from_pending(10), Priority::Low);
        assert_eq!(Priority::from_pending(0), Priority::Low);
    }

    #[test]
    fn frequency_serializes_snake_case() {
        let json = serde_json::to_string(&PushFrequency::Realtime).unwrap();
        assert_eq!(json, "\"realtime\"");
        let parsed: PushFrequency = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(parsed, PushFrequency::Monthly);
    }

    #[test]
    fn frequency_defaults_to_daily() {
        assert_eq!(PushFrequency::default(), PushFrequency::Daily);
        assert_eq!(PushFrequency::Daily.schedule_label(), "每日 09:00");
    }
}
