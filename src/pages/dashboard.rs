use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::{
    route::Route,
    storage::{use_upload_flag, UploadFlag},
};

/// Drops the recorded upload so the dashboard is locked again.
pub(crate) fn restart_upload(flag: &dyn UploadFlag) -> anyhow::Result<Route> {
    flag.clear()?;

    Ok(Route::Upload {})
}

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    let upload_flag = use_upload_flag();
    let mut error_signal = use_signal::<Option<String>>(|| None);

    let error = error_signal();

    rsx! {
        div {
            class: "flex flex-col p-6 text-white",
            div {
                class: "flex flex-wrap justify-between gap-6 align-middle mb-4",
                ul {
                    class: "flex gap-4 text-sm",
                    li {
                        Link { class: "underline", to: Route::Overview {}, "Overview" }
                    }
                    li {
                        Link { class: "underline", to: Route::Charts {}, "Charts" }
                    }
                    li {
                        Link { class: "underline", to: Route::Tables {}, "Tables" }
                    }
                }
                button {
                    r#type: "button",
                    class: "text-white bg-blue-600 hover:bg-blue-700 font-medium rounded-lg text-sm px-4 py-2",
                    onclick: move |_| {
                        match restart_upload(&*upload_flag) {
                            Ok(next) => {
                                navigator.replace(next);
                            }
                            Err(e) => {
                                warn!("{}", e);
                                error_signal.set(Some(e.to_string()));
                            }
                        }
                    },
                    "Upload another file"
                }
            }
            if let Some(error) = error {
                p {
                    class: "mb-2 text-sm text-red-500",
                    "{error}"
                }
            }
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Overview() -> Element {
    rsx! {
        h5 {
            class: "mb-2 text-2xl font-bold tracking-tight",
            "Dashboard"
        }
        p {
            class: "text-sm text-gray-400",
            "Pick a view to explore the uploaded data."
        }
    }
}
