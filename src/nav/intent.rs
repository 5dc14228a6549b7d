//! User intents and screens

use crate::filter::ArchiveCategory;
use std::fmt;

/// Top-level screens of the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Category folders and the "view all images" entry
    MainMenu,
    /// Filtered image listing
    Gallery,
    /// A single image, possibly one that does not exist
    Detail { id: String },
}

impl Screen {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MainMenu => "main menu",
            Self::Gallery => "gallery",
            Self::Detail { .. } => "detail",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detail { id } => write!(f, "detail #{id}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Everything a user can ask the gallery to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Main menu: browse every image
    EnterGallery,
    /// Open an archive folder (main menu or sidebar)
    SelectCategory(ArchiveCategory),
    /// Gallery: open an image's detail view
    OpenImage(String),
    /// Browse a single tag (detail tags or sidebar)
    TagClick(String),
    /// Detail: return to the gallery it was opened from
    Back,
    /// Sidebar: drop every selector and filter
    ShowAll,
    /// Sidebar: return to the main menu
    BackToMainMenu,
    /// Filter bar: replace the search term
    SetSearch(String),
    /// Filter bar: add or remove an explicit tag
    ToggleTag(String),
    /// Filter bar: clear search and explicit tags
    ClearFilters,
}

impl Intent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EnterGallery => "enter gallery",
            Self::SelectCategory(_) => "select category",
            Self::OpenImage(_) => "open image",
            Self::TagClick(_) => "tag click",
            Self::Back => "back",
            Self::ShowAll => "show all",
            Self::BackToMainMenu => "back to main menu",
            Self::SetSearch(_) => "search",
            Self::ToggleTag(_) => "toggle tag",
            Self::ClearFilters => "clear filters",
        }
    }

    /// Navigation intents go through the loading phase, filter edits do not
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        !matches!(
            self,
            Self::SetSearch(_) | Self::ToggleTag(_) | Self::ClearFilters
        )
    }
}

/// Screen change produced by one dispatched intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    /// Whether the loading phase ran before `to` was shown
    pub paced: bool,
}

impl Transition {
    #[must_use]
    pub fn changed_screen(&self) -> bool {
        self.from != self.to
    }
}
