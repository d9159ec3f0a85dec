use crate::models::{Priority, PushRecord, TaskEntry};

pub const TASK_CATEGORY: &str = "柔性督办";

/// 展期是展示用的固定文案，不参与真实时间计算。
pub const TASK_DEADLINE: &str = "今天 18:00";

/// 把累计的推送记录展开成工作台任务卡片，每个 单位×报告 组合一张。
///
/// 输入顺序即输出顺序（单位为外层、报告为内层），记录列表通常由调用方
/// 以最近优先排列。纯函数：同一输入总是得到同一输出，反复调用无副作用。
pub fn project_tasks(records: &[PushRecord]) -> Vec<TaskEntry> {
    let mut tasks = Vec::new();

    for (index, record) in records.iter().enumerate() {
        for unit in &record.units {
            for report in &record.reports {
                tasks.push(TaskEntry {
                    id: format!("push-{index}-{}-{}", unit.id, report.id),
                    title: format!("【{}】{}", unit.name, report.name),
                    priority: Priority::from_pending(unit.pending_issues),
                    category: TASK_CATEGORY.to_string(),
                    description: format!("来自柔性督办的数据：{}", report.description),
                    deadline: TASK_DEADLINE.to_string(),
                    impact: format!("{} - {}个待办事项", unit.name, unit.pending_issues),
                    timestamp: record.timestamp.clone(),
                });
            }
        }
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::catalog::{report_catalog, unit_catalog};
    use crate::models::PushFrequency;
    use crate::services::push::create_push_record;

    fn sample_record(unit_ids: &[&str], report_ids: &[&str]) -> PushRecord {
        let unit_ids: Vec<String> = unit_ids.iter().map(|v| v.to_string()).collect();
        let report_ids: Vec<String> = report_ids.iter().map(|v| v.to_string()).collect();
        create_push_record(
            &unit_ids,
            &report_ids,
            PushFrequency::Daily,
            unit_catalog(),
            report_catalog(),
            "2026-08-26T09:00:00Z".to_string(),
        )
        .unwrap()
        .record
    }

    #[test]
    fn empty_input_projects_nothing() {
        assert!(project_tasks(&[]).is_empty());
    }

    #[test]
    fn task_count_is_cross_product_of_units_and_reports() {
        let record = sample_record(&["1", "2", "4"], &["daily", "alert"]);
        let tasks = project_tasks(std::slice::from_ref(&record));
        assert_eq!(tasks.len(), 3 * 2);
    }

    #[test]
    fn projection_is_idempotent() {
        let records = vec![
            sample_record(&["1", "2"], &["daily"]),
            sample_record(&["3"], &["weekly", "monthly"]),
        ];
        assert_eq!(project_tasks(&records), project_tasks(&records));
    }

    #[test]
    fn ordering_is_unit_major_then_report_minor() {
        let record = sample_record(&["1", "2"], &["daily", "alert"]);
        let tasks = project_tasks(std::slice::from_ref(&record));
        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["push-0-1-daily", "push-0-1-alert", "push-0-2-daily", "push-0-2-alert"]
        );
    }

    #[test]
    fn reference_scenario_yields_medium_priority_task() {
        let record = sample_record(&["4"], &["daily"]);
        let tasks = project_tasks(std::slice::from_ref(&record));
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(task.id, "push-0-4-daily");
        assert_eq!(task.title, "【荣华街道】每日诉求概览");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category, TASK_CATEGORY);
        assert_eq!(task.impact, "荣华街道 - 15个待办事项");
        assert_eq!(task.deadline, TASK_DEADLINE);
        assert_eq!(task.timestamp, record.timestamp);
    }

    #[test]
    fn record_index_feeds_task_ids_across_records() {
        let records = vec![
            sample_record(&["1"], &["daily"]),
            sample_record(&["2"], &["daily"]),
        ];
        let tasks = project_tasks(&records);
        assert_eq!(tasks[0].id, "push-0-1-daily");
        assert_eq!(tasks[1].id, "push-1-2-daily");
    }
}
