use dioxus::prelude::*;

pub fn Tables() -> Element {
    rsx! {
        h5 {
            class: "mb-2 text-2xl font-bold tracking-tight",
            "Tables"
        }
    }
}
