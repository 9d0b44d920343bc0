/// Glyphs used by the header navigation (24x24 stroke icons)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Footprints,
    Menu,
    Shirt,
    FolderKanban,
    CheckSquare,
    FileQuestion,
    BookOpenText,
    Video,
    ChevronDown,
}

impl NavIcon {
    pub fn name(&self) -> &'static str {
        match self {
            NavIcon::Footprints => "footprints",
            NavIcon::Menu => "menu",
            NavIcon::Shirt => "shirt",
            NavIcon::FolderKanban => "folder-kanban",
            NavIcon::CheckSquare => "check-square",
            NavIcon::FileQuestion => "file-question",
            NavIcon::BookOpenText => "book-open-text",
            NavIcon::Video => "video",
            NavIcon::ChevronDown => "chevron-down",
        }
    }

    /// Path data drawn inside a `0 0 24 24` viewBox
    pub fn svg_paths(&self) -> &'static [&'static str] {
        match self {
            NavIcon::Footprints => &[
                "M4 16v-2.38C4 11.5 2.97 10.5 3 8c.03-2.72 1.49-6 4.5-6C9.37 2 10 3.8 10 5.5c0 3.11-2 5.66-2 8.68V16a2 2 0 1 1-4 0Z",
                "M20 20v-2.38c0-2.12 1.03-3.12 1-5.62-.03-2.72-1.49-6-4.5-6C14.63 6 14 7.8 14 9.5c0 3.11 2 5.66 2 8.68V20a2 2 0 1 0 4 0Z",
                "M16 17h4",
                "M4 13h4",
            ],
            NavIcon::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            NavIcon::Shirt => &[
                "M20.38 3.46 16 2a4 4 0 0 1-8 0L3.62 3.46a2 2 0 0 0-1.34 2.23l.58 3.47a1 1 0 0 0 .99.84H6v10c0 1.1.9 2 2 2h8a2 2 0 0 0 2-2V10h2.15a1 1 0 0 0 .99-.84l.58-3.47a2 2 0 0 0-1.34-2.23z",
            ],
            NavIcon::FolderKanban => &[
                "M4 20h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.93a2 2 0 0 1-1.66-.9l-.82-1.2A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13c0 1.1.9 2 2 2Z",
                "M8 10v4",
                "M12 10v2",
                "M16 10v6",
            ],
            NavIcon::CheckSquare => &[
                "m9 11 3 3L22 4",
                "M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11",
            ],
            NavIcon::FileQuestion => &[
                "M12 17h.01",
                "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z",
                "M9.1 9a3 3 0 0 1 5.82 1c0 2-3 3-3 3",
            ],
            NavIcon::BookOpenText => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
                "M6 8h2",
                "M6 12h2",
                "M16 8h2",
                "M16 12h2",
            ],
            NavIcon::Video => &[
                "m22 8-6 4 6 4V8Z",
                "M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2Z",
            ],
            NavIcon::ChevronDown => &["m6 9 6 6 6-6"],
        }
    }
}
