use std::fmt;

/// The stakeholder roles shown on the landing page, in display order.
pub const ROLE_OPTIONS: &[RoleOption] = &[
    RoleOption::new("Manufacturer"),
    RoleOption::new("Warehouse"),
    RoleOption::new("Retailer"),
    RoleOption::new("Farmer"),
    RoleOption::new("DepartmentOfFertilizer"),
    RoleOption::new("DepartmentOfAgriculture"),
];

/// A named stakeholder category the portal offers a section for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoleOption(&'static str);

impl RoleOption {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }

    /// Lowercased name, i.e. the route path without the leading slash.
    pub fn slug(&self) -> String {
        self.0.to_lowercase()
    }

    /// `"/" + lowercase(name)`. Nothing is escaped or trimmed.
    pub fn route_path(&self) -> RoutePath {
        RoutePath(format!("/{}", self.slug()))
    }
}

impl fmt::Display for RoleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoutePath(String);

impl RoutePath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps a url segment back to its role. If several options lowercase to the
/// same slug, the first one declared wins.
pub fn find_by_slug(options: &[RoleOption], slug: &str) -> Option<RoleOption> {
    options.iter().copied().find(|role| {
        role.name()
            .chars()
            .flat_map(char::to_lowercase)
            .eq(slug.chars())
    })
}
