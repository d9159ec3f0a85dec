use dioxus::prelude::*;

use crate::fixtures::dashboard::{
    ai_suggestions, knowledge_base, personal_tasks, recommended_tasks,
};
use crate::models::TaskEntry;
use crate::state::{use_app_actions, use_app_state, AppActions, WorkbenchTab};

/// 自主治理工作台：基层单位查看督办任务、个人待办与知识库的入口。
#[component]
pub fn WorkbenchModal() -> Element {
    let actions = use_app_actions();
    let state = use_app_state().read().clone();
    let active_tab = state.workbench.active_tab;
    let pushed_tasks = state.pushed_tasks();

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center bg-black/50 p-4 backdrop-blur-sm",
            onclick: move |_| actions.close_overlay(),
            div {
                class: "max-h-[90vh] w-full max-w-6xl overflow-hidden rounded-2xl bg-white shadow-2xl",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "flex items-center justify-between bg-gradient-to-r from-blue-500 to-indigo-600 px-6 py-4 text-white",
                    div {
                        h2 { class: "text-2xl font-bold", "自主治理工作台" }
                        p { class: "mt-1 text-sm text-blue-100",
                            "数据驱动自主治理，督办任务实时同步"
                        }
                    }
                    button {
                        class: "rounded-lg p-2 transition-colors hover:bg-white/20",
                        onclick: move |_| actions.close_overlay(),
                        "✕"
                    }
                }

                nav { class: "flex gap-1 border-b border-gray-200 bg-gray-50 px-6",
                    for tab in WorkbenchTab::ALL {
                        {tab_button(tab, tab == active_tab, actions)}
                    }
                }

                div { class: "max-h-[calc(90vh-140px)] overflow-y-auto p-6",
                    match active_tab {
                        WorkbenchTab::Assist => rsx! {
                            AssistTab { pushed_tasks }
                        },
                        WorkbenchTab::Personal => rsx! {
                            PersonalTab {}
                        },
                        WorkbenchTab::Knowledge => rsx! {
                            KnowledgeTab {}
                        },
                    }
                }
            }
        }
    }
}

fn tab_button(tab: WorkbenchTab, active: bool, actions: AppActions) -> Element {
    let class = if active {
        "border-b-2 border-blue-500 px-4 py-3 text-sm font-medium text-blue-600"
    } else {
        "border-b-2 border-transparent px-4 py-3 text-sm font-medium text-gray-500 hover:text-gray-700"
    };

    rsx! {
        button {
            key: "{tab.label()}",
            class,
            onclick: move |_| actions.set_workbench_tab(tab),
            "{tab.label()}"
        }
    }
}

#[component]
fn AssistTab(pushed_tasks: Vec<TaskEntry>) -> Element {
    rsx! {
        div { class: "space-y-6",
            section {
                div { class: "mb-3 flex items-center justify-between",
                    h3 { class: "text-lg font-semibold text-gray-800", "柔性督办任务" }
                    span { class: "rounded-full bg-orange-100 px-2 py-0.5 text-xs text-orange-700",
                        "{pushed_tasks.len()} 项"
                    }
                }
                if pushed_tasks.is_empty() {
                    div { class: "rounded-lg border border-dashed border-gray-300 bg-gray-50 p-6 text-center text-sm text-gray-500",
                        "暂无督办任务，管理端发起柔性督办后将在此实时展示"
                    }
                } else {
                    div { class: "space-y-3",
                        for task in pushed_tasks.iter() {
                            {pushed_task_card(task)}
                        }
                    }
                }
            }

            section {
                h3 { class: "mb-3 text-lg font-semibold text-gray-800", "智能推荐任务" }
                div { class: "space-y-3",
                    for task in recommended_tasks() {
                        div {
                            key: "{task.id}",
                            class: "rounded-lg border border-gray-200 bg-white p-4 shadow-sm transition-shadow hover:shadow-md",
                            div { class: "mb-2 flex items-center gap-2",
                                span { class: task.priority.badge_class(), "{task.priority.label()}" }
                                span { class: "rounded-full bg-blue-50 px-2 py-0.5 text-[11px] text-blue-700",
                                    "{task.category}"
                                }
                                span { class: "ml-auto text-xs text-gray-500", "截止：{task.deadline}" }
                            }
                            h4 { class: "mb-1 font-medium text-gray-800", "{task.title}" }
                            p { class: "mb-2 text-sm text-gray-600", "{task.description}" }
                            div { class: "flex flex-wrap items-center gap-2",
                                for action in task.actions.iter() {
                                    span {
                                        key: "{action}",
                                        class: "rounded bg-gray-100 px-2 py-1 text-xs text-gray-700",
                                        "{action}"
                                    }
                                }
                                span { class: "ml-auto text-xs text-orange-600", "{task.impact}" }
                            }
                        }
                    }
                }
            }

            section {
                h3 { class: "mb-3 text-lg font-semibold text-gray-800", "AI 工作建议" }
                div { class: "grid grid-cols-1 gap-3 md:grid-cols-2",
                    for suggestion in ai_suggestions() {
                        div {
                            key: "{suggestion.title}",
                            class: "rounded-lg border border-indigo-100 bg-indigo-50/50 p-4",
                            div { class: "mb-1 text-xs font-medium text-indigo-600", "{suggestion.kind}" }
                            h4 { class: "mb-1 font-medium text-gray-800", "{suggestion.title}" }
                            p { class: "mb-2 text-xs text-gray-600", "{suggestion.description}" }
                            button { class: "text-xs font-medium text-indigo-600 hover:text-indigo-700",
                                "{suggestion.action} →"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn pushed_task_card(task: &TaskEntry) -> Element {
    rsx! {
        div {
            key: "{task.id}",
            class: "rounded-lg border-l-4 border-orange-400 bg-orange-50/60 p-4",
            div { class: "mb-2 flex items-center gap-2",
                span { class: task.priority.badge_class(), "{task.priority.label()}" }
                span { class: "rounded-full bg-orange-100 px-2 py-0.5 text-[11px] text-orange-700",
                    "{task.category}"
                }
                span { class: "ml-auto text-xs text-gray-500", "截止：{task.deadline}" }
            }
            h4 { class: "mb-1 font-medium text-gray-800", "{task.title}" }
            p { class: "mb-2 text-sm text-gray-600", "{task.description}" }
            div { class: "flex items-center justify-between text-xs text-gray-500",
                span { class: "text-orange-600", "{task.impact}" }
                span { "推送时间：{task.timestamp}" }
            }
        }
    }
}

#[component]
fn PersonalTab() -> Element {
    rsx! {
        div { class: "space-y-3",
            for task in personal_tasks() {
                div {
                    key: "{task.id}",
                    class: "flex items-center justify-between rounded-lg border border-gray-200 bg-white p-4",
                    div { class: "flex-1",
                        div { class: "mb-1 flex items-center gap-2",
                            span { class: task.urgency.badge_class(), "{task.urgency.label()}" }
                            span { class: "text-xs text-gray-500", "{task.unit}" }
                        }
                        h4 { class: "text-sm font-medium text-gray-800", "{task.title}" }
                    }
                    div { class: "ml-4 text-right",
                        div { class: "text-xs font-medium text-blue-600", "{task.status}" }
                        div { class: "mt-1 text-xs text-gray-400", "{task.time}" }
                    }
                }
            }
        }
    }
}

#[component]
fn KnowledgeTab() -> Element {
    rsx! {
        div { class: "grid grid-cols-1 gap-4 md:grid-cols-2",
            for entry in knowledge_base() {
                div {
                    key: "{entry.category}",
                    class: "rounded-lg border border-gray-200 bg-white p-4 transition-shadow hover:shadow-md",
                    div { class: "mb-2 flex items-center justify-between",
                        h4 { class: "font-medium text-gray-800", "{entry.category}" }
                        span { class: "rounded-full bg-blue-50 px-2 py-0.5 text-xs text-blue-700",
                            "{entry.count} 篇"
                        }
                    }
                    p { class: "text-xs text-gray-600", "最近更新：{entry.recent}" }
                }
            }
        }
    }
}
