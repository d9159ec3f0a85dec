#![allow(non_snake_case)]

mod config;
mod fixtures;
mod hooks;
mod models;
mod services;
mod state;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::{AppState, Overlay};
use tracing::info;
use ui::insights::AnalysisModal;
use ui::notifications::NotificationCenter;
use ui::overview::OverviewPanel;
use ui::push::PushManagementModal;
use ui::workbench::WorkbenchModal;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    bootstrap_config();

    #[cfg(target_arch = "wasm32")]
    launch(App);

    #[cfg(not(target_arch = "wasm32"))]
    info!("console UI targets wasm32; native binary only validates bootstrap");
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

fn bootstrap_config() {
    let config = AppConfig::from_env();
    info!(
        profile = ?config.profile,
        analysis_step_ms = config.analysis_step_ms,
        "console configuration loaded"
    );
    let _ = APP_CONFIG.set(config);
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    let actions = state::use_app_actions();
    let overlay = state::use_app_state().read().active_overlay;

    let brand_title = APP_CONFIG
        .get()
        .map(|config| config.brand_title.clone())
        .unwrap_or_else(|| AppConfig::default().brand_title);

    rsx! {
        div { class: "min-h-screen bg-slate-100",
            header { class: "flex items-center justify-between bg-gradient-to-r from-blue-600 to-indigo-700 px-6 py-4 text-white shadow-md",
                div {
                    h1 { class: "text-xl font-bold", "{brand_title}" }
                    p { class: "mt-1 text-xs text-blue-100",
                        "主动治理 · 未诉先办 · 数据驱动的企业服务"
                    }
                }
                div { class: "flex gap-3",
                    button {
                        class: "rounded-lg bg-white/15 px-4 py-2 text-sm font-medium transition-colors hover:bg-white/25",
                        onclick: move |_| actions.open_overlay(Overlay::PushManagement),
                        "柔性督办"
                    }
                    button {
                        class: "rounded-lg bg-white/15 px-4 py-2 text-sm font-medium transition-colors hover:bg-white/25",
                        onclick: move |_| actions.open_overlay(Overlay::Workbench),
                        "自主治理工作台"
                    }
                }
            }

            main { class: "mx-auto max-w-7xl p-6",
                OverviewPanel {}
            }

            if overlay == Some(Overlay::PushManagement) {
                PushManagementModal {}
            }
            if overlay == Some(Overlay::Workbench) {
                WorkbenchModal {}
            }
            if overlay == Some(Overlay::Analysis) {
                AnalysisModal {}
            }
        }
    }
}
