//! Browse command - interactive gallery session
//!
//! Drives a [`GallerySession`] from dialoguer menus. Each screen is rendered,
//! then a menu of the actions available on it is offered; the chosen action
//! becomes an [`Intent`] for the session.

use crate::{
    GalrError,
    catalog::Catalog,
    filter::{ArchiveCategory, Selector},
    nav::{DelayPacer, GallerySession, Intent, Pacer, Screen, Transition},
    output,
};
use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::time::Duration;

type Result<T> = std::result::Result<T, GalrError>;

/// What a menu entry does when chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Dispatch(Intent),
    /// Ask for a new search term
    Search,
    /// Ask for an explicit tag to add or remove
    ToggleTag,
    /// Ask for a tag to browse on its own
    BrowseTag,
    Quit,
}

/// A labelled menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub step: Step,
}

impl MenuItem {
    fn new(label: impl Into<String>, step: Step) -> Self {
        Self {
            label: label.into(),
            step,
        }
    }

    fn intent(label: impl Into<String>, intent: Intent) -> Self {
        Self::new(label, Step::Dispatch(intent))
    }
}

/// Loading indicator shown while a navigation is paced
struct TerminalPacer {
    delay: DelayPacer,
    quiet: bool,
}

impl Pacer for TerminalPacer {
    fn pace(&self, transition: &Transition) {
        if !self.quiet && !self.delay.delay().is_zero() {
            eprintln!("{}", "loading...".dimmed());
        }
        self.delay.pace(transition);
    }
}

/// Execute the browse command
///
/// Starts at the main menu, or directly in the gallery when `start` is given.
///
/// # Errors
/// Returns an error if a prompt cannot be shown or read
pub fn execute(
    catalog: &Catalog,
    start: Option<Selector>,
    delay: Duration,
    quiet: bool,
) -> Result<()> {
    let pacer = TerminalPacer {
        delay: DelayPacer::new(delay),
        quiet,
    };
    let mut session = match start {
        Some(selector) => GallerySession::at_gallery(catalog, selector)?,
        None => GallerySession::new(catalog),
    }
    .with_pacer(pacer);

    let theme = ColorfulTheme::default();

    loop {
        render(&session, quiet);

        let items = menu(&session);
        let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
        let Some(choice) = Select::with_theme(&theme)
            .with_prompt(session.screen().to_string())
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        let intent = match &items[choice].step {
            Step::Quit => break,
            Step::Dispatch(intent) => intent.clone(),
            Step::Search => {
                let term: String = Input::with_theme(&theme)
                    .with_prompt("Search")
                    .with_initial_text(session.filters().search_term.clone())
                    .allow_empty(true)
                    .interact_text()?;
                Intent::SetSearch(term)
            }
            Step::ToggleTag => match pick_tag(&theme, catalog, "Filter by tag")? {
                Some(tag) => Intent::ToggleTag(tag),
                None => continue,
            },
            Step::BrowseTag => match pick_tag(&theme, catalog, "Browse tag")? {
                Some(tag) => Intent::TagClick(tag),
                None => continue,
            },
        };

        if let Err(e) = session.dispatch(intent) {
            eprintln!("{} {e}", "Warning:".yellow());
        }
    }

    Ok(())
}

fn pick_tag(theme: &ColorfulTheme, catalog: &Catalog, prompt: &str) -> Result<Option<String>> {
    let tags = catalog.all_tags();
    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&tags)
        .default(0)
        .interact_opt()?;
    Ok(choice.and_then(|i| tags.get(i).cloned()))
}

fn render(session: &GallerySession<'_>, quiet: bool) {
    match session.screen() {
        Screen::MainMenu => {
            if !quiet {
                println!("\n{}", "Image archive".bold());
            }
        }
        Screen::Gallery => {
            let view = session.gallery_view();
            println!();
            if !quiet {
                println!("{}", output::context_line(&view.selector, &view.filters));
                println!("{}", output::summary_line(view.summary()));
            }
            if view.is_empty() {
                println!("{}", output::NO_MATCHES);
                println!("{}", output::NO_MATCHES_HINT.dimmed());
            }
            for record in &view.images {
                println!("{}", output::image_line(record, quiet));
            }
        }
        Screen::Detail { .. } => {
            if let Some(view) = session.detail() {
                println!("\n{}", output::detail(&view));
            }
        }
    }
}

/// Actions offered on the session's current screen
#[must_use]
pub fn menu(session: &GallerySession<'_>) -> Vec<MenuItem> {
    let mut items = match session.screen() {
        Screen::MainMenu => main_menu(),
        Screen::Gallery => gallery_menu(session),
        Screen::Detail { .. } => detail_menu(session),
    };
    items.push(MenuItem::new("Quit", Step::Quit));
    items
}

fn main_menu() -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = ArchiveCategory::ALL
        .into_iter()
        .map(|category| {
            MenuItem::intent(
                format!("{}.collection", category.name()),
                Intent::SelectCategory(category),
            )
        })
        .collect();
    items.push(MenuItem::intent("view all images →", Intent::EnterGallery));
    items
}

fn gallery_menu(session: &GallerySession<'_>) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = session
        .visible()
        .into_iter()
        .map(|record| {
            MenuItem::intent(
                format!("Open: {}", record.title),
                Intent::OpenImage(record.id.clone()),
            )
        })
        .collect();

    items.push(MenuItem::new("Search...", Step::Search));
    if !session.selector().pins_tag() {
        items.push(MenuItem::new("Filter by tag...", Step::ToggleTag));
    }
    if !session.filters().is_empty() {
        items.push(MenuItem::intent("Clear filters", Intent::ClearFilters));
    }
    items.extend(sidebar_items(session));
    items
}

fn detail_menu(session: &GallerySession<'_>) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::intent("← Back", Intent::Back)];
    if let Some(record) = session.detail().and_then(|view| view.record()) {
        items.extend(
            record
                .tags
                .iter()
                .map(|tag| MenuItem::intent(format!("#{tag}"), Intent::TagClick(tag.clone()))),
        );
    }
    items.extend(sidebar_items(session));
    items
}

fn sidebar_items(session: &GallerySession<'_>) -> Vec<MenuItem> {
    let sidebar = session.sidebar();
    let mut items: Vec<MenuItem> = sidebar
        .folders
        .iter()
        .map(|folder| {
            MenuItem::intent(
                format!("{}.collection ({} tags)", folder.category.name(), folder.tags.len()),
                Intent::SelectCategory(folder.category),
            )
        })
        .collect();
    items.push(MenuItem::new("Browse a tag...", Step::BrowseTag));
    items.push(MenuItem::intent("Show all", Intent::ShowAll));
    items.push(MenuItem::intent("Main menu", Intent::BackToMainMenu));
    items
}
