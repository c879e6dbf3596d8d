use dioxus::prelude::*;

use crate::{
    components::{guard::RequireUpload, navbar::NavBar},
    pages::{
        charts::Charts,
        dashboard::{Dashboard, Overview},
        tables::Tables,
        upload::Upload,
    },
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Upload {},
        #[nest("/dashboard")]
            #[layout(RequireUpload)]
            #[layout(Dashboard)]
                #[route("/")]
                Overview {},
                #[route("/charts")]
                Charts {},
                #[route("/tables")]
                Tables {},
}

impl Route {
    /// Everything under `/dashboard` needs a completed upload.
    pub fn requires_upload(&self) -> bool {
        match self {
            Route::Upload {} => false,
            Route::Overview {} | Route::Charts {} | Route::Tables {} => true,
        }
    }
}
