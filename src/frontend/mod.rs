#![allow(non_snake_case)]

use crate::roles::{self, RoleOption, RoutePath, ROLE_OPTIONS};
use dioxus::prelude::*;

mod header;
mod landing;
mod not_found;
mod section;

pub use header::*;
pub use landing::*;
use not_found::*;
use section::*;

pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    LandingPage {},
    #[route("/:section")]
    Section { section: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

pub fn back_home() -> Element {
    rsx! {
        div {
            class: "back",
            margin_top: "30px",
            Link {
                to: Route::LandingPage {},
                "back"
            }
        }
    }
}

/// Renders the whole app to html with the router started at `path`.
#[cfg(test)]
fn render_at(path: &str) -> String {
    let route: Route = path.parse().unwrap_or_else(|err| panic!("{err}"));
    let mut dom = VirtualDom::new_with_props(
        |route: Route| {
            rsx! {
                Router::<Route> {
                    config: move || {
                        RouterConfig::<Route>::default()
                            .history(MemoryHistory::<Route>::with_initial_path(route.clone()))
                    }
                }
            }
        },
        route,
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
