use dioxus::prelude::*;

pub fn Charts() -> Element {
    rsx! {
        h5 {
            class: "mb-2 text-2xl font-bold tracking-tight",
            "Charts"
        }
    }
}
