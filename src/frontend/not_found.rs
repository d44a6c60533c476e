#![allow(non_snake_case)]

use super::*;

pub fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = requested_path(&segments);
    tracing::debug!(path = %path, "rendering fallback page for unknown location");

    rsx! {
        div {
            class: "not-found",

            Header {}

            h2 { "Page not found" }
            p { "There is nothing at {path}." }

            { back_home() }
        }
    }
}
