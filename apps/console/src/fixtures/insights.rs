use crate::models::{
    AnalysisBundle, AnalysisModule, Anomaly, Correlation, InsightPattern, KeyMetric,
    PredictionPoint, Prediction, Priority, Recommendation,
};

/// 每个分析模块对应一份固定的分析内容。
pub fn analysis_bundle(module: AnalysisModule) -> AnalysisBundle {
    match module {
        AnalysisModule::Scenario => scenario_bundle(),
        AnalysisModule::EnterpriseChain => enterprise_chain_bundle(),
        AnalysisModule::Innovation => innovation_bundle(),
    }
}

fn scenario_bundle() -> AnalysisBundle {
    AnalysisBundle {
        key_metrics: vec![
            metric("政策直达响应率", "94.2%", "+3.5%"),
            metric("产业协同效率", "92.1%", "+5.6%"),
            metric("精准服务满意度", "95.8%", "+3.4%"),
            metric("风险治理准确率", "94.2%", "+2.6%"),
        ],
        anomalies: vec![
            anomaly(
                "高净值企业投诉异常",
                "检测到高净值企业投诉占比在3月15日激增至18.5%，超出正常范围",
                "2024-03-15 14:30",
            ),
            anomaly(
                "产业政策诉求激增",
                "产业政策相关诉求增长率在3月20日达到峰值15.2%",
                "2024-03-20 09:15",
            ),
            anomaly(
                "多部门协同性下降",
                "多部门协同性指标在3月18日下降至68.3%，需要关注",
                "2024-03-18 16:45",
            ),
        ],
        patterns: vec![
            pattern("政策发布周期效应", "发现政策发布后7-14天内相关诉求量显著上升", 94),
            pattern("企业生命周期关联", "初创期企业诉求多样性与企业增长呈正相关", 89),
            pattern("季节性协同效率变化", "春季多部门协同效率普遍提升15-20%", 87),
        ],
        correlations: vec![
            correlation("企业增长与资源配比", "0.82", "多元化需求匹配"),
            correlation("产业政策诉求", "0.76", "外部环境复杂性"),
            correlation("办理时长优化", "-0.68", "满意度提升"),
        ],
        prediction_series: series(&[
            ("1月", Some(1200.0), 1250.0),
            ("2月", Some(1350.0), 1380.0),
            ("3月", Some(1500.0), 1520.0),
            ("4月", None, 1680.0),
            ("5月", None, 1850.0),
        ]),
        predictions: vec![
            prediction("下月诉求总量", "1,680", "4月", 94),
            prediction("企业诉求多样性", "2.5", "4月", 91),
            prediction("产业协同效率", "94.2%", "4月", 89),
            prediction("风险识别准确率", "95.8%", "4月", 92),
        ],
        recommendations: vec![
            recommendation(
                "优化高净值企业服务",
                "针对高净值企业投诉占比异常，建议建立专属服务通道，提升响应速度和服务质量。",
                Priority::High,
                "降低高净值企业投诉占比至12%",
            ),
            recommendation(
                "加强产业政策宣传",
                "建立产业政策发布预警机制，提前做好政策解读和咨询服务准备。",
                Priority::High,
                "提升政策诉求处理效率25%",
            ),
            recommendation(
                "完善多部门协同机制",
                "建立跨部门协同工作台，优化信息流转和任务分配机制，提升协同效率。",
                Priority::Medium,
                "提升多部门协同性至85%",
            ),
            recommendation(
                "强化风险预警系统",
                "完善AI风险识别算法，提升风险预警的准确性和及时性。",
                Priority::Medium,
                "提升风险识别准确率至96%",
            ),
        ],
    }
}

fn enterprise_chain_bundle() -> AnalysisBundle {
    AnalysisBundle {
        key_metrics: vec![
            metric("关联企业", "2,847", "+12.3%"),
            metric("产业链条", "156", "+8.7%"),
            metric("完整度", "89.2%", "+3.5%"),
            metric("协同效率", "94.6%", "+5.2%"),
        ],
        anomalies: vec![anomaly(
            "链条断裂风险",
            "检测到新能源产业链上游供应环节存在断裂风险",
            "2024-03-18 10:20",
        )],
        patterns: vec![
            pattern("产业集群效应", "制造业与服务业呈现强正相关关系", 95),
            pattern("技术创新驱动", "科技业发展带动整体产业链升级", 88),
        ],
        correlations: vec![
            correlation("技术创新", "0.78", "产业链完整度"),
            correlation("政策支持", "0.82", "企业协同度"),
        ],
        prediction_series: series(&[
            ("1月", Some(2847.0), 2900.0),
            ("2月", Some(2950.0), 2980.0),
            ("3月", Some(3100.0), 3120.0),
            ("4月", None, 3250.0),
            ("5月", None, 3400.0),
        ]),
        predictions: vec![
            prediction("企业增长", "3,250", "4月", 96),
            prediction("链条完整度", "91.5%", "4月", 93),
            prediction("协同效率", "96.2%", "4月", 90),
        ],
        recommendations: vec![
            recommendation(
                "加强产业链协同",
                "建立产业链协同平台，促进上下游企业信息共享和资源整合。",
                Priority::High,
                "提升25%协同效率",
            ),
            recommendation(
                "优化产业布局",
                "根据AI分析结果，调整产业园区布局，增强产业集群效应。",
                Priority::Medium,
                "提升18%整体效率",
            ),
        ],
    }
}

fn innovation_bundle() -> AnalysisBundle {
    AnalysisBundle {
        key_metrics: vec![
            metric("创新指数", "87.3", "+5.8%"),
            metric("政策响应", "92.1%", "+2.3%"),
            metric("满意度", "4.8/5", "+0.2"),
            metric("整体效率", "92.3%", "+3.1%"),
        ],
        anomalies: vec![anomaly(
            "创新瓶颈",
            "模式创新领域存在明显瓶颈，需要重点关注",
            "2024-03-17 16:45",
        )],
        patterns: vec![
            pattern("服务创新领先", "服务创新指数持续领先其他维度", 94),
            pattern("技术创新驱动", "技术创新与整体创新指数高度相关", 91),
        ],
        correlations: vec![
            correlation("政策支持", "0.76", "创新指数"),
            correlation("人才投入", "0.83", "技术创新"),
        ],
        prediction_series: series(&[
            ("1月", Some(87.3), 88.5),
            ("2月", Some(89.1), 90.2),
            ("3月", Some(91.8), 92.5),
            ("4月", None, 94.2),
            ("5月", None, 95.8),
        ]),
        predictions: vec![
            prediction("创新指数", "94.2", "4月", 93),
            prediction("政策响应", "94.5%", "4月", 91),
            prediction("满意度", "4.9/5", "4月", 88),
        ],
        recommendations: vec![
            recommendation(
                "加强模式创新",
                "针对模式创新瓶颈，建立创新孵化平台，提供更多政策支持。",
                Priority::High,
                "提升30%模式创新指数",
            ),
            recommendation(
                "优化人才政策",
                "完善人才引进和培养机制，提升技术创新能力。",
                Priority::Medium,
                "提升20%技术创新水平",
            ),
        ],
    }
}

fn metric(label: &str, value: &str, trend: &str) -> KeyMetric {
    KeyMetric {
        label: label.into(),
        value: value.into(),
        trend: trend.into(),
    }
}

fn anomaly(kind: &str, description: &str, time: &str) -> Anomaly {
    Anomaly {
        kind: kind.into(),
        description: description.into(),
        time: time.into(),
    }
}

fn pattern(name: &str, description: &str, confidence: u8) -> InsightPattern {
    InsightPattern {
        name: name.into(),
        description: description.into(),
        confidence,
    }
}

fn correlation(factor_a: &str, coefficient: &str, factor_b: &str) -> Correlation {
    Correlation {
        factor_a: factor_a.into(),
        coefficient: coefficient.into(),
        factor_b: factor_b.into(),
    }
}

fn series(points: &[(&str, Option<f64>, f64)]) -> Vec<PredictionPoint> {
    points
        .iter()
        .map(|(period, actual, predicted)| PredictionPoint {
            period: (*period).into(),
            actual: *actual,
            predicted: *predicted,
        })
        .collect()
}

fn prediction(title: &str, value: &str, timeframe: &str, accuracy: u8) -> Prediction {
    Prediction {
        title: title.into(),
        value: value.into(),
        timeframe: timeframe.into(),
        accuracy,
    }
}

fn recommendation(
    title: &str,
    description: &str,
    priority: Priority,
    impact: &str,
) -> Recommendation {
    Recommendation {
        title: title.into(),
        description: description.into(),
        priority,
        impact: impact.into(),
    }
}
