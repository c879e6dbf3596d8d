use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};

use crate::{
    route::Route,
    storage::{self, use_upload_flag},
};

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Allow,
    Redirect(Route),
}

/// Decides whether navigating to `target` may complete, given the stored
/// upload flag value.
pub fn check(target: &Route, flag: Option<&str>) -> Outcome {
    if !target.requires_upload() || storage::is_satisfied(flag) {
        return Outcome::Allow;
    }

    Outcome::Redirect(Route::Upload {})
}

/// Layout wrapping the dashboard subtree. Renders nothing and replaces the
/// history entry with the redirect target until a file has been uploaded.
#[component]
pub fn RequireUpload() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let upload_flag = use_upload_flag();

    let flag = upload_flag.read();
    let outcome = check(&route, flag.as_deref());

    let redirect = match &outcome {
        Outcome::Allow => None,
        Outcome::Redirect(to) => Some(to.clone()),
    };

    use_effect(use_reactive((&redirect,), move |(redirect,)| {
        if let Some(to) = redirect {
            warn!("upload required, redirecting to {}", to);
            navigator.replace(to);
        }
    }));

    match outcome {
        Outcome::Allow => {
            debug!("entering {}", route);
            rsx! {
                Outlet::<Route> {}
            }
        }
        Outcome::Redirect(_) => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use dioxus_history::History;

    use super::*;
    use crate::storage::MemoryFlag;
    use crate::test_support::{launch_at, settle};

    #[test]
    fn guarded_routes_redirect_without_flag() {
        for target in [Route::Overview {}, Route::Charts {}, Route::Tables {}] {
            assert_eq!(check(&target, None), Outcome::Redirect(Route::Upload {}));
        }
    }

    #[test]
    fn guarded_routes_redirect_on_other_values() {
        for value in ["", "false", "TRUE", "yes", "1", "true "] {
            assert_eq!(
                check(&Route::Charts {}, Some(value)),
                Outcome::Redirect(Route::Upload {})
            );
        }
    }

    #[test]
    fn guarded_routes_allow_with_flag() {
        for target in [Route::Overview {}, Route::Charts {}, Route::Tables {}] {
            assert_eq!(check(&target, Some("true")), Outcome::Allow);
        }
    }

    #[test]
    fn upload_is_never_redirected() {
        assert_eq!(check(&Route::Upload {}, None), Outcome::Allow);
        assert_eq!(check(&Route::Upload {}, Some("false")), Outcome::Allow);
    }

    #[test]
    fn redirect_target_is_root() {
        match check(&Route::Tables {}, None) {
            Outcome::Redirect(to) => assert_eq!(to.to_string(), "/"),
            Outcome::Allow => panic!("expected redirect"),
        }
    }

    #[tokio::test]
    async fn navigation_without_flag_ends_at_root() {
        let (mut dom, history) = launch_at("/dashboard/charts", Rc::new(MemoryFlag::default()));
        settle(&mut dom).await;

        assert_eq!(history.current_route(), "/");
    }

    #[tokio::test]
    async fn navigation_with_other_flag_value_ends_at_root() {
        let flag = Rc::new(MemoryFlag::with_value("false"));
        let (mut dom, history) = launch_at("/dashboard/tables", flag);
        settle(&mut dom).await;

        assert_eq!(history.current_route(), "/");
    }

    #[tokio::test]
    async fn navigation_with_flag_proceeds() {
        let flag = Rc::new(MemoryFlag::with_value("true"));
        let (mut dom, history) = launch_at("/dashboard/charts", flag);
        settle(&mut dom).await;

        assert_eq!(history.current_route(), "/dashboard/charts");
    }

    #[tokio::test]
    async fn redirect_does_not_push_history() {
        let (mut dom, history) = launch_at("/dashboard/charts", Rc::new(MemoryFlag::default()));
        settle(&mut dom).await;

        assert_eq!(history.current_route(), "/");
        assert!(!history.can_go_back());
    }

    #[tokio::test]
    async fn root_is_reachable_without_flag() {
        let (mut dom, history) = launch_at("/", Rc::new(MemoryFlag::default()));
        settle(&mut dom).await;

        assert_eq!(history.current_route(), "/");
    }
}
