use dioxus::prelude::*;

use crate::models::AnalysisBundle;
use crate::services::insight::ANALYSIS_STEPS;
use crate::state::{use_app_actions, use_app_state, AnalysisPhase};

/// AI 分析弹窗：先播放固定的加载步骤序列，完成后展示画布内容。
#[component]
pub fn AnalysisModal() -> Element {
    let actions = use_app_actions();
    let analysis = use_app_state().read().analysis.clone();

    let title = analysis
        .module
        .map(|module| module.title())
        .unwrap_or("AI 智能分析");

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/50 p-4 backdrop-blur-sm",
            onclick: move |_| actions.close_overlay(),
            div {
                class: "max-h-[90vh] w-full max-w-5xl overflow-hidden rounded-2xl bg-white shadow-2xl",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "flex items-center justify-between bg-gradient-to-r from-purple-500 to-indigo-600 px-6 py-4 text-white",
                    div {
                        h2 { class: "text-2xl font-bold", "{title}" }
                        p { class: "mt-1 text-sm text-purple-100", "基于诉求数据的智能洞察" }
                    }
                    button {
                        class: "rounded-lg p-2 transition-colors hover:bg-white/20",
                        onclick: move |_| actions.close_overlay(),
                        "✕"
                    }
                }

                div { class: "max-h-[calc(90vh-88px)] overflow-y-auto p-6",
                    match analysis.phase {
                        AnalysisPhase::Loading(step) => rsx! {
                            LoadingSequence { current: step }
                        },
                        AnalysisPhase::Ready => match analysis.bundle {
                            Some(bundle) => rsx! {
                                AnalysisCanvas { bundle }
                            },
                            None => rsx! {
                                p { class: "text-sm text-gray-500", "分析结果为空" }
                            },
                        },
                        AnalysisPhase::Idle => rsx! {
                            p { class: "text-sm text-gray-500", "等待分析任务" }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn LoadingSequence(current: usize) -> Element {
    rsx! {
        div { class: "flex flex-col items-center py-12",
            div { class: "mb-6 h-12 w-12 animate-spin rounded-full border-4 border-purple-200 border-t-purple-600" }
            div { class: "w-full max-w-sm space-y-3",
                for (index, step) in ANALYSIS_STEPS.iter().copied().enumerate() {
                    {loading_step(index, step, current)}
                }
            }
        }
    }
}

fn loading_step(index: usize, step: &'static str, current: usize) -> Element {
    let (marker, text_class) = if index < current {
        ("✓", "text-sm text-emerald-600")
    } else if index == current {
        ("●", "text-sm font-medium text-purple-700")
    } else {
        ("○", "text-sm text-gray-400")
    };

    rsx! {
        div { key: "{index}", class: "flex items-center gap-3",
            span { class: "w-4 text-center", "{marker}" }
            span { class: text_class, "{step}" }
        }
    }
}

#[component]
fn AnalysisCanvas(bundle: AnalysisBundle) -> Element {
    rsx! {
        div { class: "space-y-6",
            section {
                h3 { class: "mb-3 text-lg font-semibold text-gray-800", "关键指标" }
                div { class: "grid grid-cols-2 gap-4 md:grid-cols-4",
                    for metric in bundle.key_metrics.iter() {
                        div {
                            key: "{metric.label}",
                            class: "rounded-lg border border-gray-200 bg-gray-50 p-4 text-center",
                            div { class: "text-xs text-gray-500", "{metric.label}" }
                            div { class: "mt-1 text-xl font-bold text-gray-800", "{metric.value}" }
                            div { class: "mt-1 text-xs text-emerald-600", "{metric.trend}" }
                        }
                    }
                }
            }

            if !bundle.anomalies.is_empty() {
                section {
                    h3 { class: "mb-3 text-lg font-semibold text-gray-800", "异常识别" }
                    div { class: "space-y-2",
                        for anomaly in bundle.anomalies.iter() {
                            div {
                                key: "{anomaly.description}",
                                class: "flex items-center justify-between rounded-lg border-l-4 border-red-400 bg-red-50 p-3",
                                div {
                                    span { class: "mr-2 rounded bg-red-100 px-2 py-0.5 text-[11px] text-red-700",
                                        "{anomaly.kind}"
                                    }
                                    span { class: "text-sm text-gray-700", "{anomaly.description}" }
                                }
                                span { class: "text-xs text-gray-500", "{anomaly.time}" }
                            }
                        }
                    }
                }
            }

            if !bundle.patterns.is_empty() {
                section {
                    h3 { class: "mb-3 text-lg font-semibold text-gray-800", "模式洞察" }
                    div { class: "grid grid-cols-1 gap-3 md:grid-cols-2",
                        for pattern in bundle.patterns.iter() {
                            div {
                                key: "{pattern.name}",
                                class: "rounded-lg border border-purple-100 bg-purple-50/50 p-4",
                                div { class: "mb-1 flex items-center justify-between",
                                    h4 { class: "text-sm font-medium text-gray-800", "{pattern.name}" }
                                    span { class: "text-xs text-purple-600", "置信度 {pattern.confidence}%" }
                                }
                                p { class: "text-xs text-gray-600", "{pattern.description}" }
                            }
                        }
                    }
                }
            }

            if !bundle.correlations.is_empty() {
                section {
                    h3 { class: "mb-3 text-lg font-semibold text-gray-800", "关联分析" }
                    div { class: "space-y-2",
                        for correlation in bundle.correlations.iter() {
                            div {
                                key: "{correlation.factor_a}",
                                class: "flex items-center justify-center gap-3 rounded-lg border border-gray-200 bg-white p-3 text-sm",
                                span { class: "text-gray-700", "{correlation.factor_a}" }
                                span { class: "rounded bg-indigo-100 px-2 py-0.5 text-xs font-medium text-indigo-700",
                                    "{correlation.coefficient}"
                                }
                                span { class: "text-gray-700", "{correlation.factor_b}" }
                            }
                        }
                    }
                }
            }

            if !bundle.prediction_series.is_empty() {
                section {
                    h3 { class: "mb-3 text-lg font-semibold text-gray-800", "趋势预测" }
                    table { class: "w-full text-sm",
                        thead {
                            tr { class: "border-b border-gray-200 text-left text-xs text-gray-500",
                                th { class: "py-2", "周期" }
                                th { class: "py-2 text-right", "实际值" }
                                th { class: "py-2 text-right", "预测值" }
                            }
                        }
                        tbody {
                            for point in bundle.prediction_series.iter() {
                                tr {
                                    key: "{point.period}",
                                    class: "border-b border-gray-100",
                                    td { class: "py-2 text-gray-700", "{point.period}" }
                                    td { class: "py-2 text-right text-gray-700",
                                        match point.actual {
                                            Some(actual) => rsx! { "{actual}" },
                                            None => rsx! { span { class: "text-gray-400", "—" } },
                                        }
                                    }
                                    td { class: "py-2 text-right font-medium text-indigo-700",
                                        "{point.predicted}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if !bundle.predictions.is_empty() {
                section {
                    h3 { class: "mb-3 text-lg font-semibold text-gray-800", "预测结论" }
                    div { class: "grid grid-cols-1 gap-3 md:grid-cols-3",
                        for prediction in bundle.predictions.iter() {
                            div {
                                key: "{prediction.title}",
                                class: "rounded-lg border border-gray-200 bg-gradient-to-br from-white to-indigo-50 p-4",
                                div { class: "text-xs text-gray-500", "{prediction.title}" }
                                div { class: "mt-1 text-lg font-bold text-gray-800", "{prediction.value}" }
                                div { class: "mt-1 flex items-center justify-between text-xs",
                                    span { class: "text-gray-500", "{prediction.timeframe}" }
                                    span { class: "text-indigo-600", "准确率 {prediction.accuracy}%" }
                                }
                            }
                        }
                    }
                }
            }

            if !bundle.recommendations.is_empty() {
                section {
                    h3 { class: "mb-3 text-lg font-semibold text-gray-800", "优化建议" }
                    div { class: "space-y-3",
                        for recommendation in bundle.recommendations.iter() {
                            div {
                                key: "{recommendation.title}",
                                class: "rounded-lg border border-gray-200 bg-white p-4",
                                div { class: "mb-1 flex items-center gap-2",
                                    span { class: recommendation.priority.badge_class(),
                                        "{recommendation.priority.label()}"
                                    }
                                    h4 { class: "text-sm font-medium text-gray-800",
                                        "{recommendation.title}"
                                    }
                                }
                                p { class: "mb-1 text-xs text-gray-600", "{recommendation.description}" }
                                p { class: "text-xs text-emerald-600", "预期效果：{recommendation.impact}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
