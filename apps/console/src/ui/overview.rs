use dioxus::prelude::*;

use crate::fixtures::dashboard::{prediction_tiles, scenario_cards};
use crate::models::AnalysisModule;
use crate::state::{use_app_actions, AppActions};

/// 首页总览：场景定位四象限、预测看板与两块产业分析入口。
#[component]
pub fn OverviewPanel() -> Element {
    let actions = use_app_actions();

    rsx! {
        div { class: "space-y-8",
            section {
                div { class: "mb-4 flex items-center justify-between",
                    h2 { class: "text-xl font-bold text-gray-800", "企业全生命周期场景定位" }
                    button {
                        class: "rounded-lg bg-gradient-to-r from-purple-500 to-indigo-600 px-4 py-2 text-sm font-medium text-white shadow-md transition-all hover:from-purple-600 hover:to-indigo-700",
                        onclick: move |_| actions.run_analysis(AnalysisModule::Scenario),
                        "AI分析"
                    }
                }
                div { class: "grid grid-cols-1 gap-4 md:grid-cols-2 xl:grid-cols-4",
                    for card in scenario_cards() {
                        div {
                            key: "{card.title}",
                            class: "rounded-xl border border-gray-200 bg-white p-5 shadow-sm transition-shadow hover:shadow-lg",
                            div { class: "mb-2 flex items-center justify-between",
                                h3 { class: "font-semibold text-gray-800", "{card.title}" }
                                span { class: "rounded-full bg-indigo-50 px-2 py-0.5 text-xs text-indigo-600",
                                    "{card.lifecycle}"
                                }
                            }
                            p { class: "mb-3 text-xs text-gray-600", "{card.description}" }
                            for group in card.groups.iter() {
                                div { key: "{group.name}",
                                    div { class: "mb-2 text-xs font-medium text-gray-500", "{group.name}" }
                                    div { class: "space-y-2",
                                        for indicator in group.indicators.iter() {
                                            div {
                                                key: "{indicator.name}",
                                                class: "flex items-center justify-between text-xs",
                                                span { class: "text-gray-600", "{indicator.name}" }
                                                span { class: "font-medium text-gray-800",
                                                    "{indicator.value}{indicator.unit} "
                                                    span { class: "text-emerald-600", "{indicator.trend}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                h2 { class: "mb-4 text-xl font-bold text-gray-800", "智能预测看板" }
                div { class: "grid grid-cols-2 gap-4 xl:grid-cols-4",
                    for tile in prediction_tiles() {
                        div {
                            key: "{tile.label}",
                            class: "rounded-xl border border-gray-200 bg-gradient-to-br from-white to-blue-50 p-5 text-center shadow-sm",
                            div { class: "text-xs text-gray-500", "{tile.label}" }
                            div { class: "mt-2 text-2xl font-bold text-gray-800", "{tile.value}" }
                            div { class: "mt-1 text-xs text-emerald-600", "{tile.note}" }
                        }
                    }
                }
            }

            section { class: "grid grid-cols-1 gap-4 lg:grid-cols-2",
                {analysis_entry(
                    "企业链画像",
                    "围绕主导产业梳理上下游企业关系，识别断点与协同机会",
                    AnalysisModule::EnterpriseChain,
                    actions,
                )}
                {analysis_entry(
                    "企业创新分析",
                    "跟踪研发投入、专利与创新券使用，评估区域创新活力",
                    AnalysisModule::Innovation,
                    actions,
                )}
            }
        }
    }
}

fn analysis_entry(
    title: &'static str,
    description: &'static str,
    module: AnalysisModule,
    actions: AppActions,
) -> Element {
    rsx! {
        div {
            key: "{title}",
            class: "flex items-center justify-between rounded-xl border border-gray-200 bg-white p-5 shadow-sm",
            div {
                h3 { class: "font-semibold text-gray-800", "{title}" }
                p { class: "mt-1 text-xs text-gray-600", "{description}" }
            }
            button {
                class: "ml-4 flex-shrink-0 rounded-lg bg-gradient-to-r from-purple-500 to-indigo-600 px-4 py-2 text-sm font-medium text-white shadow-md transition-all hover:from-purple-600 hover:to-indigo-700",
                onclick: move |_| actions.run_analysis(module),
                "AI分析"
            }
        }
    }
}
