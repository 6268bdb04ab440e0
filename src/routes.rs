//! Route definitions for the application

use dioxus::prelude::*;

use crate::views::{Audit, NotFound};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Audit {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
