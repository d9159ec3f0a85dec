use thiserror::Error;
use tracing::warn;

use crate::models::{PushFrequency, PushRecord, ReportType, Unit};

pub type PushResult<T> = Result<T, PushError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PushError {
    /// 督办单位或督办内容为空时拒绝建档，对应提交按钮的禁用守卫。
    #[error("请先选择督办单位和督办内容")]
    EmptySelection,
}

/// 建档结果。未能在目录中解析到的 id 不进入记录，但会在回执中列出，
/// 由调用方决定是否提示操作员。
#[derive(Clone, Debug, PartialEq)]
pub struct PushReceipt {
    pub record: PushRecord,
    pub unresolved_units: Vec<String>,
    pub unresolved_reports: Vec<String>,
}

impl PushReceipt {
    pub fn has_unresolved(&self) -> bool {
        !self.unresolved_units.is_empty() || !self.unresolved_reports.is_empty()
    }
}

/// 校验一次督办请求并生成推送记录。
///
/// 选择顺序被保留；`total_issues` 为解析出的单位待办数之和，属于
/// 创建时刻的快照。函数本身无副作用，记录的存放由调用方负责。
pub fn create_push_record(
    unit_ids: &[String],
    report_ids: &[String],
    frequency: PushFrequency,
    unit_catalog: &[Unit],
    report_catalog: &[ReportType],
    timestamp: String,
) -> PushResult<PushReceipt> {
    if unit_ids.is_empty() || report_ids.is_empty() {
        return Err(PushError::EmptySelection);
    }

    let mut units = Vec::with_capacity(unit_ids.len());
    let mut unresolved_units = Vec::new();
    for id in unit_ids {
        match unit_catalog.iter().find(|unit| &unit.id == id) {
            Some(unit) => units.push(unit.clone()),
            None => unresolved_units.push(id.clone()),
        }
    }

    let mut reports = Vec::with_capacity(report_ids.len());
    let mut unresolved_reports = Vec::new();
    for id in report_ids {
        match report_catalog.iter().find(|report| &report.id == id) {
            Some(report) => reports.push(report.clone()),
            None => unresolved_reports.push(id.clone()),
        }
    }

    if !unresolved_units.is_empty() || !unresolved_reports.is_empty() {
        warn!(
            ?unresolved_units,
            ?unresolved_reports,
            "push selection contains ids missing from the catalogs"
        );
    }

    let total_issues = units.iter().map(|unit| unit.pending_issues).sum();

    Ok(PushReceipt {
        record: PushRecord {
            timestamp,
            units,
            reports,
            frequency,
            total_issues,
        },
        unresolved_units,
        unresolved_reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::catalog::{report_catalog, unit_catalog};

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn ts() -> String {
        "2026-08-26T09:00:00Z".to_string()
    }

    #[test]
    fn total_issues_is_sum_over_selected_units() {
        let receipt = create_push_record(
            &ids(&["1", "3", "5"]),
            &ids(&["daily"]),
            PushFrequency::Daily,
            unit_catalog(),
            report_catalog(),
            ts(),
        )
        .unwrap();

        // 23 + 31 + 12
        assert_eq!(receipt.record.total_issues, 66);
        assert_eq!(receipt.record.units.len(), 3);
        assert!(!receipt.has_unresolved());
    }

    #[test]
    fn empty_unit_selection_is_rejected() {
        let err = create_push_record(
            &[],
            &ids(&["daily"]),
            PushFrequency::Realtime,
            unit_catalog(),
            report_catalog(),
            ts(),
        )
        .unwrap_err();
        assert_eq!(err, PushError::EmptySelection);
    }

    #[test]
    fn empty_report_selection_is_rejected() {
        let err = create_push_record(
            &ids(&["1", "2"]),
            &[],
            PushFrequency::Weekly,
            unit_catalog(),
            report_catalog(),
            ts(),
        )
        .unwrap_err();
        assert_eq!(err, PushError::EmptySelection);
    }

    #[test]
    fn unresolved_ids_are_dropped_and_reported() {
        let receipt = create_push_record(
            &ids(&["4", "ghost"]),
            &ids(&["daily", "missing"]),
            PushFrequency::Daily,
            unit_catalog(),
            report_catalog(),
            ts(),
        )
        .unwrap();

        assert_eq!(receipt.record.units.len(), 1);
        assert_eq!(receipt.record.reports.len(), 1);
        assert_eq!(receipt.record.total_issues, 15);
        assert_eq!(receipt.unresolved_units, vec!["ghost".to_string()]);
        assert_eq!(receipt.unresolved_reports, vec!["missing".to_string()]);
        assert!(receipt.has_unresolved());
    }

    #[test]
    fn selection_order_is_preserved() {
        let receipt = create_push_record(
            &ids(&["5", "1"]),
            &ids(&["alert", "daily"]),
            PushFrequency::Monthly,
            unit_catalog(),
            report_catalog(),
            ts(),
        )
        .unwrap();

        let unit_ids: Vec<_> = receipt.record.units.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(unit_ids, vec!["5", "1"]);
        let report_ids: Vec<_> = receipt
            .record
            .reports
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(report_ids, vec!["alert", "daily"]);
    }

    #[test]
    fn reference_scenario_builds_expected_record() {
        let receipt = create_push_record(
            &ids(&["4"]),
            &ids(&["daily"]),
            PushFrequency::Daily,
            unit_catalog(),
            report_catalog(),
            ts(),
        )
        .unwrap();

        let record = &receipt.record;
        assert_eq!(record.units[0].name, "荣华街道");
        assert_eq!(record.reports[0].name, "每日诉求概览");
        assert_eq!(record.frequency, PushFrequency::Daily);
        assert_eq!(record.total_issues, 15);
    }
}
