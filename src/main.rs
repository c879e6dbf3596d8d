#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use route::Route;
use std::rc::Rc;
use storage::{LocalStorageFlag, SharedUploadFlag};

mod components;
mod pages;
mod route;
mod storage;
#[cfg(test)]
mod test_support;

pub static APP_TITLE: &str = match option_env!("APP_TITLE") {
    Some(x) => x,
    None => "Upload Dashboard",
};

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting app");
    launch(App);
}

fn App() -> Element {
    use_context_provider(|| Rc::new(LocalStorageFlag) as SharedUploadFlag);

    rsx! {
        document::Title { "{APP_TITLE}" }
        document::Stylesheet {
            href: asset!("/assets/main.css")
        }
        Router::<Route> {}
    }
}
