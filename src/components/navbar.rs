use dioxus::prelude::*;

use crate::{route::Route, APP_TITLE};

#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav {
            class: "flex items-center gap-6 px-6 py-3 bg-gray-800 border-b border-gray-700 text-white",
            span {
                class: "text-lg font-bold",
                "{APP_TITLE}"
            }
            ul {
                class: "flex gap-4 text-sm",
                li {
                    Link {
                        class: "hover:underline",
                        to: Route::Upload {},
                        "Upload"
                    }
                }
                li {
                    Link {
                        class: "hover:underline",
                        to: Route::Overview {},
                        "Dashboard"
                    }
                }
            }
        }
        Outlet::<Route> {}
    }
}
