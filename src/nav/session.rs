//! Gallery session state machine
//!
//! [`GallerySession`] owns everything the gallery shows: the current screen,
//! the selector and filter state, and the gallery context to restore when
//! leaving a detail screen. It changes only through [`GallerySession::dispatch`].
//!
//! # Transitions
//!
//! ```text
//! MainMenu ──EnterGallery──────────→ Gallery (cleared)
//! MainMenu ──SelectCategory(c)─────→ Gallery (category c)
//! Gallery  ──OpenImage(id)─────────→ Detail  (gallery context remembered)
//! Detail   ──TagClick(t)───────────→ Gallery (tag t pinned)
//! Detail   ──Back──────────────────→ Gallery (remembered context, or cleared)
//! Gallery  ──ShowAll───────────────→ Gallery (cleared)
//! any      ──BackToMainMenu────────→ MainMenu
//! ```
//!
//! Entering a selector always clears the search term and active tags.

use super::pacing::{NoPacing, Pacer};
use super::view::{DetailView, GalleryView, Sidebar};
use super::{Intent, NavError, Screen, Transition};
use crate::catalog::{Catalog, ImageRecord};
use crate::filter::{self, FilterError, FilterState, Selector};

/// Result type for dispatch
pub type Result<T> = std::result::Result<T, NavError>;

/// Selector and filters of a gallery screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryContext {
    pub selector: Selector,
    pub filters: FilterState,
}

impl GalleryContext {
    /// Switch browsing mode, starting from empty filters
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EmptyTag` for a blank pinned tag, leaving the
    /// context unchanged.
    pub fn enter(&mut self, selector: Selector) -> std::result::Result<(), FilterError> {
        selector.validate()?;
        self.selector = selector;
        self.filters.clear();
        Ok(())
    }

    /// Drop selector and filters
    pub fn reset(&mut self) {
        self.selector = Selector::All;
        self.filters.clear();
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.selector == Selector::All && self.filters.is_empty()
    }
}

/// Navigation state of one browsing session
pub struct GallerySession<'a> {
    catalog: &'a Catalog,
    screen: Screen,
    context: GalleryContext,
    return_to: Option<GalleryContext>,
    pacer: Box<dyn Pacer + 'a>,
}

impl<'a> GallerySession<'a> {
    /// Start at the main menu
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::MainMenu,
            context: GalleryContext::default(),
            return_to: None,
            pacer: Box::new(NoPacing),
        }
    }

    /// Start on the gallery screen with a selector already entered
    ///
    /// # Errors
    ///
    /// Returns `NavError::Filter` if the selector pins a blank tag.
    pub fn at_gallery(catalog: &'a Catalog, selector: Selector) -> Result<Self> {
        let mut session = Self::new(catalog);
        session.screen = Screen::Gallery;
        session.context.enter(selector)?;
        Ok(session)
    }

    /// Start on an image's detail screen, with nothing to go back to
    #[must_use]
    pub fn open_at(catalog: &'a Catalog, id: impl Into<String>) -> Self {
        let mut session = Self::new(catalog);
        session.screen = Screen::Detail { id: id.into() };
        session
    }

    /// Replace the loading phase hook
    #[must_use]
    pub fn with_pacer(mut self, pacer: impl Pacer + 'a) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn context(&self) -> &GalleryContext {
        &self.context
    }

    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.context.selector
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.context.filters
    }

    /// Whether `Back` would restore a remembered gallery context
    #[must_use]
    pub const fn has_return_context(&self) -> bool {
        self.return_to.is_some()
    }

    /// Images visible under the current selector and filters
    #[must_use]
    pub fn visible(&self) -> Vec<&'a ImageRecord> {
        filter::visible_images(self.catalog, &self.context.filters, &self.context.selector)
    }

    #[must_use]
    pub fn gallery_view(&self) -> GalleryView<'a> {
        GalleryView {
            images: self.visible(),
            total: self.catalog.len(),
            selector: self.context.selector.clone(),
            filters: self.context.filters.clone(),
        }
    }

    /// The image on the detail screen, `None` on other screens
    #[must_use]
    pub fn detail(&self) -> Option<DetailView<'a>> {
        match &self.screen {
            Screen::Detail { id } => Some(DetailView::resolve(self.catalog, id)),
            Screen::MainMenu | Screen::Gallery => None,
        }
    }

    #[must_use]
    pub fn sidebar(&self) -> Sidebar {
        Sidebar::from_catalog(self.catalog)
    }

    /// Apply an intent
    ///
    /// Navigation intents run the pacer once the new state is in place.
    /// Rejected intents leave the session unchanged.
    ///
    /// # Errors
    ///
    /// - `NavError::IntentNotAvailable` if the intent does not apply to the
    ///   current screen
    /// - `NavError::TagPinned` when toggling an explicit tag while a tag is pinned
    /// - `NavError::Filter` for blank tags
    pub fn dispatch(&mut self, intent: Intent) -> Result<Transition> {
        let _span = tracing::debug_span!("dispatch", intent = intent.name(), screen = %self.screen)
            .entered();

        let from = self.screen.clone();
        let paced = intent.is_navigation();
        self.apply(intent)?;

        let transition = Transition {
            from,
            to: self.screen.clone(),
            paced,
        };

        if paced {
            self.pacer.pace(&transition);
        }

        tracing::debug!(
            from = %transition.from,
            to = %transition.to,
            selector = %self.context.selector,
            "transition complete"
        );
        Ok(transition)
    }

    fn apply(&mut self, intent: Intent) -> Result<()> {
        match (self.screen.clone(), intent) {
            (Screen::MainMenu, Intent::EnterGallery) => {
                self.context.reset();
                self.screen = Screen::Gallery;
            }

            (_, Intent::SelectCategory(category)) => {
                self.context.enter(Selector::Category(category))?;
                self.return_to = None;
                self.screen = Screen::Gallery;
            }

            (Screen::Gallery, Intent::OpenImage(id)) => {
                self.return_to = Some(self.context.clone());
                self.screen = Screen::Detail { id };
            }

            (Screen::Gallery | Screen::Detail { .. }, Intent::TagClick(tag)) => {
                self.context.enter(Selector::Tag(tag))?;
                self.return_to = None;
                self.screen = Screen::Gallery;
            }

            (Screen::Detail { .. }, Intent::Back) => {
                self.context = self.return_to.take().unwrap_or_default();
                self.screen = Screen::Gallery;
            }

            (Screen::Gallery | Screen::Detail { .. }, Intent::ShowAll) => {
                self.context.reset();
                self.return_to = None;
                self.screen = Screen::Gallery;
            }

            (Screen::Gallery | Screen::Detail { .. }, Intent::BackToMainMenu) => {
                self.context.reset();
                self.return_to = None;
                self.screen = Screen::MainMenu;
            }

            (Screen::Gallery, Intent::SetSearch(term)) => {
                self.context.filters.set_search(term);
            }

            (Screen::Gallery, Intent::ToggleTag(tag)) => {
                if let Selector::Tag(pinned) = &self.context.selector {
                    return Err(NavError::TagPinned(pinned.clone()));
                }
                self.context.filters.toggle_tag(&tag)?;
            }

            (Screen::Gallery, Intent::ClearFilters) => {
                self.context.filters.clear();
            }

            (screen, intent) => {
                tracing::debug!(intent = intent.name(), screen = %screen, "intent rejected");
                return Err(NavError::IntentNotAvailable {
                    intent: intent.name(),
                    screen: screen.name(),
                });
            }
        }
        Ok(())
    }
}
