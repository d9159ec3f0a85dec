use once_cell::sync::Lazy;

use crate::models::{ReportType, Unit};

/// 基层单位目录。进程生命周期内不变，督办选择只引用这里的条目。
static UNITS: Lazy<Vec<Unit>> = Lazy::new(|| {
    vec![
        unit("1", "亦企服务港", "服务平台", 23, "企业服务综合平台"),
        unit("2", "产业社区", "社区单位", 18, "产业园区社区服务"),
        unit("3", "服务管家", "服务团队", 31, "企业专属服务团队"),
        unit("4", "荣华街道", "街道办", 15, "荣华街道办事处"),
        unit("5", "博兴街道", "街道办", 12, "博兴街道办事处"),
    ]
});

static REPORT_TYPES: Lazy<Vec<ReportType>> = Lazy::new(|| {
    vec![
        report("daily", "每日诉求概览", "包含当日新增诉求、处理进度、待办事项"),
        report("weekly", "周度分析报告", "本周诉求趋势、热点问题、处理效率分析"),
        report("monthly", "月度综合报告", "月度数据总结、问题分类、改进建议"),
        report("alert", "风险预警通知", "异常诉求、高频问题、紧急事项预警"),
        report("enterprise", "企业画像分析", "重点企业动态、产业链分析、协同机会"),
    ]
});

pub fn unit_catalog() -> &'static [Unit] {
    &UNITS
}

pub fn report_catalog() -> &'static [ReportType] {
    &REPORT_TYPES
}

fn unit(id: &str, name: &str, category: &str, pending_issues: u32, description: &str) -> Unit {
    Unit {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        pending_issues,
        description: description.to_string(),
    }
}

fn report(id: &str, name: &str, description: &str) -> ReportType {
    ReportType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_unique_ids() {
        let mut unit_ids: Vec<_> = unit_catalog().iter().map(|u| u.id.as_str()).collect();
        unit_ids.sort_unstable();
        unit_ids.dedup();
        assert_eq!(unit_ids.len(), unit_catalog().len());

        let mut report_ids: Vec<_> = report_catalog().iter().map(|r| r.id.as_str()).collect();
        report_ids.sort_unstable();
        report_ids.dedup();
        assert_eq!(report_ids.len(), report_catalog().len());
    }

    #[test]
    fn unit_four_matches_reference_scenario() {
        let unit = unit_catalog().iter().find(|u| u.id == "4").unwrap();
        assert_eq!(unit.name, "荣华街道");
        assert_eq!(unit.pending_issues, 15);
    }
}
