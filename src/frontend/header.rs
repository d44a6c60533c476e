#![allow(non_snake_case)]

use super::*;

pub const BANNER_TITLE: &str = "Bharat Urvarak Portal";

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "header",
            h1 { "{BANNER_TITLE}" }
        }
    }
}
