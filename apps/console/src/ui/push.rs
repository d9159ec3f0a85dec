use dioxus::prelude::*;

use crate::fixtures::catalog::{report_catalog, unit_catalog};
use crate::models::{PushFrequency, ReportType, Unit};
use crate::state::{use_app_actions, use_app_state, AppActions};

/// 柔性督办管理平台弹窗：左侧选单位、右侧选报告与频率，
/// 底部"立即督办 / 设置定时督办"对应 PushAggregator 的两种提交路径。
#[component]
pub fn PushManagementModal() -> Element {
    let actions = use_app_actions();
    let push = use_app_state().read().push.clone();

    let can_submit = push.can_submit();
    let projected = push.projected_issues();
    let unit_count = push.selected_units.len();
    let report_count = push.selected_reports.len();
    let select_all_label = if push.all_units_selected() {
        "取消全选"
    } else {
        "全选"
    };

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/50 p-4 backdrop-blur-sm",
            onclick: move |_| actions.close_overlay(),
            div {
                class: "max-h-[90vh] w-full max-w-6xl overflow-hidden rounded-2xl bg-white shadow-2xl",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "flex items-center justify-between bg-gradient-to-r from-green-500 to-emerald-600 px-6 py-4 text-white",
                    div {
                        h2 { class: "text-2xl font-bold", "柔性督办管理平台" }
                        p { class: "mt-1 text-sm text-green-100",
                            "通过数据分析精准督办，以服务促治理，推动基层单位主动作为"
                        }
                    }
                    button {
                        class: "rounded-lg p-2 transition-colors hover:bg-white/20",
                        onclick: move |_| actions.close_overlay(),
                        "✕"
                    }
                }

                div { class: "max-h-[calc(90vh-120px)] overflow-y-auto p-6",
                    div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                        div { class: "space-y-4",
                            div { class: "flex items-center justify-between",
                                h3 { class: "text-lg font-semibold text-gray-800", "选择督办单位" }
                                span { class: "text-sm text-gray-600", "已选择 {unit_count} 个" }
                            }
                            div { class: "rounded-lg border border-blue-200 bg-blue-50 p-3 text-xs text-blue-800",
                                "选择需要督办的基层单位，系统将通过数据分析精准推送督办事项，以数据为依据、以服务为导向，推动基层单位主动发现问题、及时解决问题。"
                            }
                            div { class: "max-h-96 space-y-2 overflow-y-auto",
                                for unit in unit_catalog().iter() {
                                    {unit_card(unit, push.selected_units.iter().any(|id| id == &unit.id), actions)}
                                }
                            }
                            button {
                                class: "w-full py-2 text-sm font-medium text-blue-600 hover:text-blue-700",
                                onclick: move |_| actions.toggle_all_units(),
                                "{select_all_label}"
                            }
                        }

                        div { class: "space-y-4",
                            div { class: "flex items-center justify-between",
                                h3 { class: "text-lg font-semibold text-gray-800", "选择督办内容" }
                                span { class: "text-sm text-gray-600", "已选择 {report_count} 类" }
                            }
                            div { class: "max-h-80 space-y-2 overflow-y-auto",
                                for report in report_catalog().iter() {
                                    {report_card(report, push.selected_reports.iter().any(|id| id == &report.id), actions)}
                                }
                            }

                            div { class: "rounded-lg border border-gray-200 bg-gray-50 p-4",
                                h4 { class: "mb-3 text-sm font-semibold text-gray-800", "督办频率设置" }
                                div { class: "grid grid-cols-2 gap-2",
                                    for frequency in PushFrequency::ALL {
                                        {frequency_button(frequency, push.frequency == frequency, actions)}
                                    }
                                }
                            }

                            div { class: "rounded-lg border border-amber-200 bg-gradient-to-r from-amber-50 to-orange-50 p-4",
                                h4 { class: "mb-2 text-sm font-semibold text-gray-800", "督办预览" }
                                div { class: "space-y-1 text-xs text-gray-700",
                                    p { "督办单位：{unit_count} 个基层单位" }
                                    p { "督办内容：{report_count} 类数据报告" }
                                    p { "督办频率：{push.frequency.schedule_label()}" }
                                    p { class: "mt-2 font-medium text-amber-700",
                                        "预计督办 {projected} 个待办事项"
                                    }
                                }
                            }
                        }
                    }

                    footer { class: "mt-6 flex items-center justify-between rounded-lg border border-gray-200 bg-gray-50 p-4",
                        p { class: "text-sm text-gray-600",
                            "提示：柔性督办强调服务与督导并重，基层单位可在自主治理工作台实时查看督办内容"
                        }
                        div { class: "flex gap-3",
                            button {
                                class: "rounded-lg bg-blue-500 px-6 py-2 font-medium text-white transition-colors hover:bg-blue-600 disabled:bg-gray-300",
                                disabled: !can_submit,
                                onclick: move |_| actions.schedule_push(),
                                "设置定时督办"
                            }
                            button {
                                class: "rounded-lg bg-gradient-to-r from-green-500 to-emerald-600 px-6 py-2 font-medium text-white shadow-md transition-all hover:from-green-600 hover:to-emerald-700 disabled:from-gray-300 disabled:to-gray-300",
                                disabled: !can_submit,
                                onclick: move |_| actions.push_now(),
                                "立即督办"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn unit_card(unit: &Unit, selected: bool, actions: AppActions) -> Element {
    let unit_id = unit.id.clone();
    let card_class = if selected {
        "cursor-pointer rounded-lg border-2 border-green-500 bg-green-50 p-4 transition-all"
    } else {
        "cursor-pointer rounded-lg border-2 border-gray-200 bg-white p-4 transition-all hover:border-green-300"
    };

    rsx! {
        div {
            key: "{unit.id}",
            class: card_class,
            onclick: move |_| actions.toggle_unit(&unit_id),
            div { class: "flex items-start justify-between",
                div { class: "flex-1",
                    div { class: "mb-1 font-medium text-gray-800", "{unit.name}" }
                    div { class: "mb-1 text-xs text-gray-500", "{unit.category}" }
                    div { class: "text-xs text-gray-600", "{unit.description}" }
                }
                div { class: "ml-3 flex-shrink-0 text-right",
                    div { class: "text-sm font-semibold text-orange-600", "{unit.pending_issues}" }
                    div { class: "text-xs text-gray-500", "待办" }
                }
            }
        }
    }
}

fn report_card(report: &ReportType, selected: bool, actions: AppActions) -> Element {
    let report_id = report.id.clone();
    let card_class = if selected {
        "cursor-pointer rounded-lg border-2 border-purple-500 bg-purple-50 p-4 transition-all"
    } else {
        "cursor-pointer rounded-lg border-2 border-gray-200 bg-white p-4 transition-all hover:border-purple-300"
    };

    rsx! {
        div {
            key: "{report.id}",
            class: card_class,
            onclick: move |_| actions.toggle_report(&report_id),
            div { class: "font-medium text-gray-800", "{report.name}" }
            div { class: "mt-1 text-xs text-gray-600", "{report.description}" }
        }
    }
}

fn frequency_button(frequency: PushFrequency, active: bool, actions: AppActions) -> Element {
    let button_class = if active {
        "rounded-lg border-2 border-green-500 bg-green-50 p-3 text-sm font-medium text-green-700 transition-all"
    } else {
        "rounded-lg border-2 border-gray-200 bg-white p-3 text-sm font-medium text-gray-700 transition-all hover:border-green-300"
    };

    rsx! {
        button {
            key: "{frequency.label()}",
            class: button_class,
            onclick: move |_| actions.set_frequency(frequency),
            "{frequency.label()}"
        }
    }
}
