use std::{rc::Rc, time::Duration};

use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};

use crate::{
    route::Route,
    storage::{MemoryFlag, SharedUploadFlag},
};

fn TestApp() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Builds the app at `path` with an in-memory history and upload flag.
pub fn launch_at(path: &str, flag: Rc<MemoryFlag>) -> (VirtualDom, Rc<dyn History>) {
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    let upload_flag: SharedUploadFlag = flag;

    let mut dom = VirtualDom::new(TestApp)
        .with_root_context(history.clone())
        .with_root_context(upload_flag);
    dom.rebuild_in_place();

    (dom, history)
}

/// Lets queued effects and the re-renders they trigger run.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..5 {
        let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
    }
}
