#![allow(non_snake_case)]

use super::*;

/// A single entry on the landing page: the role's text and where it leads.
#[derive(PartialEq, Clone, Debug)]
pub struct NavControl {
    pub label: String,
    pub target: RoutePath,
}

impl NavControl {
    pub fn from_role(role: RoleOption) -> Self {
        Self {
            label: role.name().to_string(),
            target: role.route_path(),
        }
    }
}

/// One control per option, in declared order. Calling it again starts over.
pub fn nav_controls(options: &[RoleOption]) -> impl Iterator<Item = NavControl> + '_ {
    options.iter().copied().map(NavControl::from_role)
}

/// The controls the landing page shows, derived fresh from the role list.
#[derive(PartialEq, Clone, Debug)]
pub struct LandingView {
    pub controls: Vec<NavControl>,
}

impl LandingView {
    pub fn from_options(options: &[RoleOption]) -> Self {
        Self {
            controls: nav_controls(options).collect(),
        }
    }
}

#[component]
pub fn LandingPage() -> Element {
    let view = LandingView::from_options(ROLE_OPTIONS);

    rsx! {
        div {
            class: "landing-page",

            Header {}

            div {
                class: "options-container",
                for control in view.controls {
                    NavButton {
                        key: "{control.target}",
                        label: control.label,
                        target: control.target,
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(label: String, target: RoutePath) -> Element {
    let href = target.to_string();
    let path = target.to_string();
    let role = label.clone();

    rsx! {
        Link {
            class: "option",
            to: href,
            onclick: move |_| {
                tracing::info!(role = %role, path = %path, "navigating to role section");
            },
            button { "{label}" }
        }
    }
}
