use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::info;

use crate::fixtures::catalog::{report_catalog, unit_catalog};
use crate::models::{AnalysisBundle, AnalysisModule, PushFrequency, PushRecord, TaskEntry};
use crate::services::push::{create_push_record, PushReceipt, PushResult};
use crate::services::tasks::project_tasks;

pub type AppSignal = Signal<AppState>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    PushManagement,
    Workbench,
    Analysis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkbenchTab {
    Assist,
    Personal,
    Knowledge,
}

impl Default for WorkbenchTab {
    fn default() -> Self {
        WorkbenchTab::Assist
    }
}

impl WorkbenchTab {
    pub const ALL: [WorkbenchTab; 3] = [
        WorkbenchTab::Assist,
        WorkbenchTab::Personal,
        WorkbenchTab::Knowledge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Assist => "智能辅助",
            Self::Personal => "我的待办",
            Self::Knowledge => "知识库",
        }
    }
}

/// 督办选择与已发推送记录。记录列表只增不减，最新的在最前，
/// 页面刷新即清空（无持久化）。
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PushState {
    pub selected_units: Vec<String>,
    pub selected_reports: Vec<String>,
    #[serde(default)]
    pub frequency: PushFrequency,
    #[serde(default)]
    pub records: Vec<PushRecord>,
}

impl PushState {
    pub fn toggle_unit(&mut self, id: &str) {
        toggle_selection(&mut self.selected_units, id);
    }

    pub fn toggle_report(&mut self, id: &str) {
        toggle_selection(&mut self.selected_reports, id);
    }

    pub fn all_units_selected(&self) -> bool {
        self.selected_units.len() == unit_catalog().len()
    }

    /// 全选与取消全选之间切换，与目录顺序保持一致。
    pub fn toggle_all_units(&mut self) {
        if self.all_units_selected() {
            self.selected_units.clear();
        } else {
            self.selected_units = unit_catalog().iter().map(|u| u.id.clone()).collect();
        }
    }

    /// 新记录插到最前，工作台按最近优先展示。
    pub fn append_record(&mut self, record: PushRecord) {
        self.records.insert(0, record);
    }

    /// 参考行为中没有清空入口，保留它主要便于演示与测试复位。
    pub fn clear_records(&mut self) {
        self.records.clear();
    }

    pub fn can_submit(&self) -> bool {
        !self.selected_units.is_empty() && !self.selected_reports.is_empty()
    }

    /// 预览区展示的预计督办待办数，对当前选择即时求和。
    pub fn projected_issues(&self) -> u32 {
        self.selected_units
            .iter()
            .filter_map(|id| unit_catalog().iter().find(|unit| &unit.id == id))
            .map(|unit| unit.pending_issues)
            .sum()
    }
}

fn toggle_selection(selection: &mut Vec<String>, id: &str) {
    if let Some(pos) = selection.iter().position(|existing| existing == id) {
        selection.remove(pos);
    } else {
        selection.push(id.to_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisPhase {
    Idle,
    Loading(usize),
    Ready,
}

impl Default for AnalysisPhase {
    fn default() -> Self {
        AnalysisPhase::Idle
    }
}

impl AnalysisPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisPhase::Loading(_))
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnalysisState {
    pub module: Option<AnalysisModule>,
    #[serde(default)]
    pub phase: AnalysisPhase,
    pub bundle: Option<AnalysisBundle>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkbenchState {
    #[serde(default)]
    pub active_tab: WorkbenchTab,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationState {
    pub last_message: Option<String>,
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    pub push: PushState,
    pub workbench: WorkbenchState,
    pub analysis: AnalysisState,
    pub operation: OperationState,
    pub active_overlay: Option<Overlay>,
}

impl AppState {
    /// 校验当前选择并建档；成功则把记录插到列表最前（最近优先）。
    pub fn submit_push(&mut self, timestamp: String) -> PushResult<PushReceipt> {
        let receipt = create_push_record(
            &self.push.selected_units,
            &self.push.selected_reports,
            self.push.frequency,
            unit_catalog(),
            report_catalog(),
            timestamp,
        )?;
        self.push.append_record(receipt.record.clone());
        Ok(receipt)
    }

    /// 工作台每次渲染时重新展开全部推送记录。
    pub fn pushed_tasks(&self) -> Vec<TaskEntry> {
        project_tasks(&self.push.records)
    }

    pub fn begin_analysis(&mut self, module: AnalysisModule) {
        self.analysis.module = Some(module);
        self.analysis.phase = AnalysisPhase::Loading(0);
        self.analysis.bundle = None;
        self.active_overlay = Some(Overlay::Analysis);
    }

    pub fn set_analysis_step(&mut self, step: usize) {
        if self.analysis.phase.is_loading() || self.analysis.phase == AnalysisPhase::Idle {
            self.analysis.phase = AnalysisPhase::Loading(step);
        }
    }

    pub fn finish_analysis(&mut self, bundle: AnalysisBundle) {
        self.analysis.bundle = Some(bundle);
        self.analysis.phase = AnalysisPhase::Ready;
    }
}

/// 立即督办成功后的提示文案，与推送回执一一对应。
pub fn push_success_message(record: &PushRecord) -> String {
    format!(
        "已向 {} 个单位发起柔性督办，督办内容 {} 类数据报告，涉及 {} 个待办事项，基层单位可在自主治理工作台查看详情",
        record.units.len(),
        record.reports.len(),
        record.total_issues,
    )
}

pub(crate) fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn toggle_unit(&self, id: &str) {
        let mut signal = self.state;
        signal.write().push.toggle_unit(id);
    }

    pub fn toggle_report(&self, id: &str) {
        let mut signal = self.state;
        signal.write().push.toggle_report(id);
    }

    pub fn toggle_all_units(&self) {
        let mut signal = self.state;
        signal.write().push.toggle_all_units();
    }

    pub fn set_frequency(&self, frequency: PushFrequency) {
        let mut signal = self.state;
        signal.write().push.frequency = frequency;
    }

    /// 立即督办：建档、入列、提示；空选择只给出错误提示，不建档。
    pub fn push_now(&self) {
        let mut signal = self.state;
        let mut state = signal.write();
        match state.submit_push(now_rfc3339()) {
            Ok(receipt) => {
                info!(
                    units = receipt.record.units.len(),
                    reports = receipt.record.reports.len(),
                    total_issues = receipt.record.total_issues,
                    "push record created"
                );
                let mut message = push_success_message(&receipt.record);
                if receipt.has_unresolved() {
                    message.push_str("（部分所选条目已不在目录中，已自动跳过）");
                }
                state.operation.last_message = Some(message);
                state.operation.error = None;
                state.operation.context = Some("柔性督办".into());
                state.active_overlay = None;
            }
            Err(err) => {
                state.operation.error = Some(err.to_string());
                state.operation.last_message = None;
                state.operation.context = Some("柔性督办".into());
            }
        }
    }

    /// 设置定时督办：目前只记录计划并提示，不做真实调度。
    pub fn schedule_push(&self) {
        let mut signal = self.state;
        let mut state = signal.write();
        if !state.push.can_submit() {
            state.operation.error = Some("请先选择督办单位和督办内容".into());
            state.operation.last_message = None;
            state.operation.context = Some("定时督办".into());
            return;
        }

        let message = format!(
            "定时督办已设置：{}，覆盖 {} 个单位、{} 类报告",
            state.push.frequency.schedule_label(),
            state.push.selected_units.len(),
            state.push.selected_reports.len(),
        );
        info!(frequency = ?state.push.frequency, "scheduled push configured");
        state.operation.last_message = Some(message);
        state.operation.error = None;
        state.operation.context = Some("定时督办".into());
    }

    pub fn open_overlay(&self, overlay: Overlay) {
        let mut signal = self.state;
        signal.write().active_overlay = Some(overlay);
    }

    pub fn close_overlay(&self) {
        let mut signal = self.state;
        signal.write().active_overlay = None;
    }

    pub fn set_workbench_tab(&self, tab: WorkbenchTab) {
        let mut signal = self.state;
        signal.write().workbench.active_tab = tab;
    }

    pub fn begin_analysis(&self, module: AnalysisModule) {
        let mut signal = self.state;
        signal.write().begin_analysis(module);
    }

    pub fn set_analysis_step(&self, step: usize) {
        let mut signal = self.state;
        signal.write().set_analysis_step(step);
    }

    pub fn finish_analysis(&self, bundle: AnalysisBundle) {
        let mut signal = self.state;
        signal.write().finish_analysis(bundle);
    }

    pub fn run_analysis(&self, module: AnalysisModule) {
        self.begin_analysis(module);
        crate::hooks::analysis::run_analysis_sequence(*self, module);
    }

    pub fn clear_operation_status(&self) {
        let mut signal = self.state;
        signal.write().operation = OperationState::default();
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use crate::services::push::PushError;

    fn ts() -> String {
        "2026-08-26T09:00:00Z".to_string()
    }

    #[test]
    fn toggle_unit_adds_then_removes() {
        let mut push = PushState::default();
        push.toggle_unit("1");
        push.toggle_unit("4");
        assert_eq!(push.selected_units, vec!["1", "4"]);
        push.toggle_unit("1");
        assert_eq!(push.selected_units, vec!["4"]);
    }

    #[test]
    fn toggle_all_units_round_trips() {
        let mut push = PushState::default();
        push.toggle_all_units();
        assert!(push.all_units_selected());
        push.toggle_all_units();
        assert!(push.selected_units.is_empty());
    }

    #[test]
    fn projected_issues_matches_catalog_sum() {
        let mut push = PushState::default();
        push.toggle_unit("4");
        push.toggle_unit("5");
        // 15 + 12
        assert_eq!(push.projected_issues(), 27);
    }

    #[test]
    fn submit_push_prepends_records_most_recent_first() {
        let mut state = AppState::default();
        state.push.toggle_unit("1");
        state.push.toggle_report("daily");
        state.submit_push("2026-08-26T09:00:00Z".to_string()).unwrap();

        state.push.toggle_unit("2");
        state.submit_push("2026-08-26T10:00:00Z".to_string()).unwrap();

        assert_eq!(state.push.records.len(), 2);
        assert_eq!(state.push.records[0].timestamp, "2026-08-26T10:00:00Z");
        assert_eq!(state.push.records[1].timestamp, "2026-08-26T09:00:00Z");
    }

    #[test]
    fn clear_records_resets_the_store() {
        let mut state = AppState::default();
        state.push.toggle_unit("1");
        state.push.toggle_report("daily");
        state.submit_push(ts()).unwrap();
        assert_eq!(state.push.records.len(), 1);

        state.push.clear_records();
        assert!(state.push.records.is_empty());
        assert!(state.pushed_tasks().is_empty());
    }

    #[test]
    fn submit_push_with_empty_selection_leaves_store_untouched() {
        let mut state = AppState::default();
        let err = state.submit_push(ts()).unwrap_err();
        assert_eq!(err, PushError::EmptySelection);
        assert!(state.push.records.is_empty());
    }

    #[test]
    fn pushed_tasks_reproject_on_every_read() {
        let mut state = AppState::default();
        state.push.toggle_unit("3");
        state.push.toggle_report("daily");
        state.push.toggle_report("alert");
        state.submit_push(ts()).unwrap();

        let first = state.pushed_tasks();
        let second = state.pushed_tasks();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        // 服务管家 has 31 pending issues.
        assert_eq!(first[0].priority, Priority::High);
    }

    #[test]
    fn analysis_walks_idle_loading_ready() {
        let mut state = AppState::default();
        assert_eq!(state.analysis.phase, AnalysisPhase::Idle);

        state.begin_analysis(crate::models::AnalysisModule::Innovation);
        assert_eq!(state.analysis.phase, AnalysisPhase::Loading(0));
        assert_eq!(state.active_overlay, Some(Overlay::Analysis));

        state.set_analysis_step(2);
        assert_eq!(state.analysis.phase, AnalysisPhase::Loading(2));

        state.finish_analysis(AnalysisBundle::default());
        assert_eq!(state.analysis.phase, AnalysisPhase::Ready);
        assert!(state.analysis.bundle.is_some());
    }

    #[test]
    fn analysis_step_is_ignored_after_ready() {
        let mut state = AppState::default();
        state.begin_analysis(crate::models::AnalysisModule::Scenario);
        state.finish_analysis(AnalysisBundle::default());
        state.set_analysis_step(1);
        assert_eq!(state.analysis.phase, AnalysisPhase::Ready);
    }

    #[test]
    fn success_message_reports_counts_and_total() {
        let mut state = AppState::default();
        state.push.toggle_unit("4");
        state.push.toggle_report("daily");
        let receipt = state.submit_push(ts()).unwrap();
        let message = push_success_message(&receipt.record);
        assert!(message.contains("1 个单位"));
        assert!(message.contains("1 类数据报告"));
        assert!(message.contains("15 个待办事项"));
    }
}
