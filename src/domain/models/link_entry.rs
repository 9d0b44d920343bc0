use super::icon::NavIcon;

/// One row of the navigation panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry {
    pub url: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: NavIcon,
    /// Opens in a new, isolated browsing context
    pub is_external: bool,
    pub is_highlighted: bool,
    pub is_new: bool,
}

impl LinkEntry {
    /// Internal, unflagged entry
    pub const fn new(
        url: &'static str,
        label: &'static str,
        description: &'static str,
        icon: NavIcon,
    ) -> Self {
        Self {
            url,
            label,
            description,
            icon,
            is_external: false,
            is_highlighted: false,
            is_new: false,
        }
    }

    pub const fn external(mut self) -> Self {
        self.is_external = true;
        self
    }

    pub const fn highlighted(mut self) -> Self {
        self.is_highlighted = true;
        self
    }

    pub const fn new_badge(mut self) -> Self {
        self.is_new = true;
        self
    }
}

/// Panel rows, in display order
pub const NAVIGATION_LINKS: [LinkEntry; 8] = [
    LinkEntry::new(
        "/get-started",
        "Get Started",
        "Some beginner friendly resources",
        NavIcon::Footprints,
    ),
    LinkEntry::new(
        "/roadmaps",
        "Roadmaps",
        "Explore our curated roadmaps",
        NavIcon::Menu,
    ),
    LinkEntry::new(
        "/courses",
        "Courses",
        "Learn with our interactive courses",
        NavIcon::Shirt,
    )
    .new_badge(),
    LinkEntry::new(
        "/projects",
        "Projects",
        "Skill-up with real-world projects",
        NavIcon::FolderKanban,
    ),
    LinkEntry::new(
        "/best-practices",
        "Best Practices",
        "Do's and don'ts",
        NavIcon::CheckSquare,
    ),
    LinkEntry::new(
        "/questions",
        "Questions",
        "Test and Practice your knowledge",
        NavIcon::FileQuestion,
    ),
    LinkEntry::new(
        "/guides",
        "Guides",
        "In-depth articles and tutorials",
        NavIcon::BookOpenText,
    ),
    LinkEntry::new(
        "/videos",
        "Videos",
        "Animated and interactive content",
        NavIcon::Video,
    )
    .external(),
];

pub fn navigation_links() -> &'static [LinkEntry] {
    &NAVIGATION_LINKS
}

pub fn find_link(url: &str) -> Option<&'static LinkEntry> {
    NAVIGATION_LINKS.iter().find(|entry| entry.url == url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let labels: Vec<&str> = navigation_links().iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "Get Started",
                "Roadmaps",
                "Courses",
                "Projects",
                "Best Practices",
                "Questions",
                "Guides",
                "Videos",
            ]
        );
    }

    #[test]
    fn test_url_and_label_always_present() {
        for entry in navigation_links() {
            assert!(entry.url.starts_with('/'), "bad url for {}", entry.label);
            assert!(!entry.label.is_empty());
        }
    }

    #[test]
    fn test_urls_are_unique() {
        let mut urls: Vec<&str> = navigation_links().iter().map(|e| e.url).collect();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), NAVIGATION_LINKS.len());
    }

    #[test]
    fn test_flags() {
        let new: Vec<&str> = navigation_links()
            .iter()
            .filter(|e| e.is_new)
            .map(|e| e.label)
            .collect();
        let external: Vec<&str> = navigation_links()
            .iter()
            .filter(|e| e.is_external)
            .map(|e| e.label)
            .collect();

        assert_eq!(new, vec!["Courses"]);
        assert_eq!(external, vec!["Videos"]);
        assert!(navigation_links().iter().all(|e| !e.is_highlighted));
    }

    #[test]
    fn test_builder_flags() {
        let entry = LinkEntry::new("/x", "X", "", NavIcon::Menu).highlighted();
        assert!(entry.is_highlighted);
        assert!(!entry.is_external);
        assert!(!entry.is_new);
    }

    #[test]
    fn test_find_link() {
        assert_eq!(find_link("/videos").map(|e| e.label), Some("Videos"));
        assert!(find_link("/nope").is_none());
    }
}
