/// Anchorable content regions of the main page, in tracking priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Products,
    Research,
    Sustainability,
    News,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Products,
        Section::Research,
        Section::Sustainability,
        Section::News,
        Section::Contact,
    ];

    /// DOM id of the section's root element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Products => "products",
            Section::Research => "research",
            Section::Sustainability => "sustainability",
            Section::News => "news",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About Us",
            Section::Products => "Products",
            Section::Research => "Research & Innovation",
            Section::Sustainability => "Sustainability",
            Section::News => "News",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Where a navigation click wants to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Section(Section),
    Founders,
}

impl NavTarget {
    pub fn from_id(id: &str) -> Option<NavTarget> {
        if id == "founders" {
            return Some(NavTarget::Founders);
        }
        Section::from_id(id).map(NavTarget::Section)
    }

    pub fn id(self) -> &'static str {
        match self {
            NavTarget::Section(section) => section.id(),
            NavTarget::Founders => "founders",
        }
    }
}

impl From<Section> for NavTarget {
    fn from(section: Section) -> Self {
        NavTarget::Section(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_in_priority_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            ["home", "about", "products", "research", "sustainability", "news", "contact"]
        );
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn founders_is_a_target_but_not_a_section() {
        assert_eq!(Section::from_id("founders"), None);
        assert_eq!(NavTarget::from_id("founders"), Some(NavTarget::Founders));
        assert_eq!(NavTarget::from_id("news"), Some(NavTarget::Section(Section::News)));
        assert_eq!(NavTarget::from_id("careers"), None);
    }
}
