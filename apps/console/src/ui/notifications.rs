use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
            Self::Error => ("border-red-500 bg-red-50", "text-red-700"),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub on_close: EventHandler<MouseEvent>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let (container_class, accent_text) = props.kind.accent_classes();

    rsx! {
        div { class: "pointer-events-auto rounded-lg border-l-4 p-4 shadow-lg {container_class}",
            div { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: "text-sm font-semibold {accent_text}", "{props.title}" }
                    p { class: "text-xs text-slate-700", "{props.message}" }
                }
                button {
                    class: "rounded bg-slate-200 px-2 py-1 text-[11px] text-slate-600 transition hover:bg-slate-300",
                    onclick: move |evt| props.on_close.call(evt),
                    "关闭"
                }
            }
        }
    }
}

/// 右上角的操作反馈浮层：督办成功、定时设置、校验失败等。
#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let operation = use_app_state().read().operation.clone();

    let title = operation.context.clone();

    if let Some(error) = operation.error {
        let title = title.unwrap_or_else(|| "操作失败".to_string());
        return rsx! {
            div { class: "pointer-events-none fixed right-4 top-4 z-50 flex w-80 flex-col gap-3",
                Toast {
                    kind: ToastKind::Error,
                    title,
                    message: error,
                    on_close: move |_| actions.clear_operation_status(),
                }
            }
        };
    }

    if let Some(message) = operation.last_message {
        let title = title.unwrap_or_else(|| "操作成功".to_string());
        return rsx! {
            div { class: "pointer-events-none fixed right-4 top-4 z-50 flex w-80 flex-col gap-3",
                Toast {
                    kind: ToastKind::Success,
                    title,
                    message,
                    on_close: move |_| actions.clear_operation_status(),
                }
            }
        };
    }

    rsx! { Fragment {} }
}
