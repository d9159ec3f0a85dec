use crate::models::{
    AiSuggestion, IndicatorGroup, IndicatorReading, KnowledgeCategory, PersonalTask,
    PredictionTile, Priority, RecommendedTask, ScenarioCard,
};

/// 智能辅助页签的推荐任务。后端接入前的演示数据。
pub fn recommended_tasks() -> Vec<RecommendedTask> {
    vec![
        RecommendedTask {
            id: 1,
            title: "亦企服务港反馈：政策咨询激增".into(),
            priority: Priority::High,
            category: "异常预警".into(),
            description: "亦企服务港今日政策咨询量激增67%，主要集中在《中小企业数字化转型补贴政策》相关内容，建议尽快准备标准化解答模板".into(),
            actions: vec!["制作FAQ".into(), "准备政策解读".into(), "通知窗口人员".into()],
            deadline: "今天 17:00".into(),
            impact: "涉及服务港38个咨询".into(),
        },
        RecommendedTask {
            id: 2,
            title: "荣华街道：企业年报办理高峰".into(),
            priority: Priority::High,
            category: "趋势预警".into(),
            description: "荣华街道本周企业年报办理量达156件，较上周增长89%，需增派人手协助办理".into(),
            actions: vec!["调配人员".into(), "开通绿色通道".into(), "延长服务时间".into()],
            deadline: "明天 10:00".into(),
            impact: "156家企业待办理".into(),
        },
        RecommendedTask {
            id: 3,
            title: "博兴街道：重点企业跟进".into(),
            priority: Priority::Medium,
            category: "服务提醒".into(),
            description: "博兴街道辖区内亦庄生物医药园3家重点企业连续2周未回访，建议服务管家主动联系了解需求".into(),
            actions: vec!["联系企业".into(), "记录需求".into(), "制定服务方案".into()],
            deadline: "本周五".into(),
            impact: "3家重点企业".into(),
        },
        RecommendedTask {
            id: 4,
            title: "产业社区：创新券申请集中期".into(),
            priority: Priority::Medium,
            category: "业务高峰".into(),
            description: "产业社区本月创新券申请已达45件，预计月底将突破60件，建议提前审核以免积压".into(),
            actions: vec!["加快审核".into(), "预约专家".into(), "通知财政部门".into()],
            deadline: "本月底".into(),
            impact: "45家企业申请中".into(),
        },
    ]
}

pub fn personal_tasks() -> Vec<PersonalTask> {
    vec![
        personal(1, "【亦企服务港】审批京东方科技公司研发补贴申请", "待审批", Priority::High, "2小时前", "亦企服务港"),
        personal(2, "【荣华街道】回复小米生态链企业税收优惠政策咨询", "待处理", Priority::High, "3小时前", "荣华街道"),
        personal(3, "【产业社区】协调施耐德电气跨部门证照办理", "进行中", Priority::Medium, "5小时前", "产业社区"),
        personal(4, "【博兴街道】跟进中芯国际人才引进政策落实", "进行中", Priority::Medium, "1天前", "博兴街道"),
        personal(5, "【服务管家】整理本周亦庄经开区企业诉求统计报告", "待完成", Priority::Low, "1天前", "服务管家"),
        personal(6, "【亦企服务港】处理字节跳动园区配套设施投诉", "待处理", Priority::Medium, "2天前", "亦企服务港"),
    ]
}

pub fn knowledge_base() -> Vec<KnowledgeCategory> {
    vec![
        knowledge("政策解读", 156, "《亦庄新区企业数字化转型专项补贴实施细则》解读"),
        knowledge("常见问题", 234, "企业年报办理、税收减免、创新券申请常见问题汇总"),
        knowledge("案例库", 89, "亦庄生物医药产业园区企业一站式服务成功案例"),
        knowledge("操作指南", 67, "服务管家制度实施指南及企业对接流程"),
    ]
}

pub fn ai_suggestions() -> Vec<AiSuggestion> {
    vec![
        AiSuggestion {
            kind: "效率提升".into(),
            title: "优化创新券审批流程".into(),
            description: "AI分析发现，创新券申请中73%的企业在财务资料环节出现问题，建议提供标准化模板可减少42%的补充材料次数".into(),
            action: "查看优化方案".into(),
        },
        AiSuggestion {
            kind: "风险预警".into(),
            title: "关注亦庄生物医药园企业服务质量".into(),
            description: "亦庄生物医药园区内3家企业本月连续反馈同类问题（研发用地审批慢），建议服务管家主动对接，可能存在系统性问题".into(),
            action: "安排专项走访".into(),
        },
        AiSuggestion {
            kind: "知识推荐".into(),
            title: "新政策学习提醒".into(),
            description: "《北京经开区促进集成电路产业发展若干措施》刚发布，与您负责的荣华街道12家芯片企业高度相关，建议尽快学习并主动推送".into(),
            action: "学习新政策".into(),
        },
        AiSuggestion {
            kind: "服务建议".into(),
            title: "企业走访计划".into(),
            description: "根据数据分析，服务港本季度重点企业走访覆盖率仅62%，建议本月重点走访京东方、小米、施耐德等15家核心企业".into(),
            action: "制定走访计划".into(),
        },
    ]
}

pub fn scenario_cards() -> Vec<ScenarioCard> {
    vec![
        ScenarioCard {
            title: "政策直达".into(),
            lifecycle: "初创期".into(),
            description: "为初创企业提供政策咨询、资金申请、证照办理等一站式服务".into(),
            groups: vec![IndicatorGroup {
                name: "企业诉求多样性".into(),
                indicators: vec![
                    reading("企业增长与资源配比率", "2.3", "工单/万元", "+5.2%"),
                    reading("高净值企业投诉占比", "15.6", "%", "-2.1%"),
                    reading("多元化需求匹配率", "78.4", "%", "+3.7%"),
                ],
            }],
        },
        ScenarioCard {
            title: "产业协同".into(),
            lifecycle: "成长期".into(),
            description: "促进成长期企业跨部门协作，提升产业协同效率".into(),
            groups: vec![IndicatorGroup {
                name: "业务协同与效率提升".into(),
                indicators: vec![
                    reading("办理时长优化率", "18.7", "%", "+12.3%"),
                    reading("流程效率提升", "92.1", "%", "+5.6%"),
                    reading("多部门协同性", "76.8", "%", "+8.9%"),
                ],
            }],
        },
        ScenarioCard {
            title: "精准服务".into(),
            lifecycle: "成熟期".into(),
            description: "为成熟期企业提供精准化、个性化服务解决方案".into(),
            groups: vec![IndicatorGroup {
                name: "综合业务影响评估".into(),
                indicators: vec![
                    reading("同类型投诉减少率", "23.5", "%", "+15.7%"),
                    reading("响应速度提升率", "31.2", "%", "+9.8%"),
                    reading("满意度提升率", "95.8", "%", "+3.4%"),
                ],
            }],
        },
        ScenarioCard {
            title: "风险治理".into(),
            lifecycle: "全周期风险".into(),
            description: "全生命周期风险识别、预警和治理机制".into(),
            groups: vec![IndicatorGroup {
                name: "风险预警与防控".into(),
                indicators: vec![
                    reading("风险识别准确率", "94.2", "%", "+2.6%"),
                    reading("预警响应及时率", "96.8", "%", "+4.3%"),
                    reading("风险化解成功率", "87.5", "%", "+6.9%"),
                ],
            }],
        },
    ]
}

pub fn prediction_tiles() -> Vec<PredictionTile> {
    vec![
        tile("下月诉求预测", "2,150", "+8.5% 增长"),
        tile("处理效率预测", "94.2%", "+2.1% 提升"),
        tile("满意度预测", "96.8%", "+1.3% 提升"),
        tile("风险预警", "低风险", "系统稳定"),
    ]
}

fn personal(
    id: u32,
    title: &str,
    status: &str,
    urgency: Priority,
    time: &str,
    unit: &str,
) -> PersonalTask {
    PersonalTask {
        id,
        title: title.into(),
        status: status.into(),
        urgency,
        time: time.into(),
        unit: unit.into(),
    }
}

fn knowledge(category: &str, count: u32, recent: &str) -> KnowledgeCategory {
    KnowledgeCategory {
        category: category.into(),
        count,
        recent: recent.into(),
    }
}

fn reading(name: &str, value: &str, unit: &str, trend: &str) -> IndicatorReading {
    IndicatorReading {
        name: name.into(),
        value: value.into(),
        unit: unit.into(),
        trend: trend.into(),
    }
}

fn tile(label: &str, value: &str, note: &str) -> PredictionTile {
    PredictionTile {
        label: label.into(),
        value: value.into(),
        note: note.into(),
    }
}
