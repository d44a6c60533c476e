#![allow(non_snake_case)]

use super::*;

#[component]
pub fn Section(section: String) -> Element {
    let Some(role) = roles::find_by_slug(ROLE_OPTIONS, &section) else {
        tracing::warn!(section = %section, "no role section for path");
        return rsx! {
            NotFound { segments: vec![section] }
        };
    };
    let path = role.route_path();

    rsx! {
        div {
            class: "section-page",

            Header {}

            h2 { "{role}" }
            p { "{role} section of the portal, served at {path}." }

            { back_home() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_section() {
        let html = render_at("/farmer");
        assert!(html.contains("<h2>Farmer</h2>"));
        assert!(html.contains("Farmer section of the portal, served at /farmer."));
        assert_eq!(html.matches("Bharat Urvarak Portal</h1>").count(), 1);
        assert!(html.contains("href=\"/\""));
    }

    #[test]
    fn test_unknown_section_is_not_found() {
        for path in ["/Farmer", "/admin"] {
            let html = render_at(path);
            assert!(html.contains("<h2>Page not found</h2>"));
            assert!(html.contains(&format!("There is nothing at {path}.")));
            assert!(!html.contains("section of the portal"));
        }
    }
}
