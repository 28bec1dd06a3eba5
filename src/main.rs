use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};
use std::time::Duration;

mod config;
mod source;
mod state;
mod ui;

use config::GalleryConfig;
use source::LoadError;
use state::collection::Collection;
use state::data::ImageRecord;
use state::lightbox::{Lightbox, FADE_MILLIS};
use ui::pages::{self, AboutSection, Page};

/// The collection is loaded exactly once; these are the three phases of
/// that load as the Collection page sees them.
#[derive(Debug, Clone)]
enum Gallery {
    /// Waiting for the source loader
    Loading,
    /// Collection on display
    Ready(Collection),
    /// The load failed; only the error panel is rendered
    Failed(LoadError),
}

/// Main application state
struct CollectionGallery {
    /// Which page is on display
    page: Page,
    /// Load phase and collection for the Collection page
    gallery: Gallery,
    /// Full-screen viewer state
    lightbox: Lightbox,
    /// Collapsible sections on the About page
    sections: Vec<AboutSection>,
    /// Static configuration
    config: GalleryConfig,
    /// Status message to display in the footer
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Source loader finished
    CollectionLoaded(Result<Vec<ImageRecord>, LoadError>),
    /// User clicked a category filter control
    FilterSelected(String),
    /// User clicked a grid tile (index into the filtered view)
    ThumbnailClicked(usize),
    /// Close control, backdrop click or Escape
    LightboxClosed,
    /// Next control or the Right arrow key
    LightboxNext,
    /// Previous control or the Left arrow key
    LightboxPrevious,
    /// Fade timer elapsed; show the image under the cursor
    LightboxFadeDone,
    /// "Open repository page" control on the error panel
    OpenRepository,
    /// Top navigation click
    PageSelected(Page),
    /// About page section toggled open or closed
    SectionToggled(usize),
}

impl CollectionGallery {
    /// Create the application and kick off the one-shot collection load
    fn new() -> (Self, Task<Message>) {
        let config = GalleryConfig::default();

        println!("🖼️  Loading collection ({:?} mode)...", config.source);

        let load = Task::perform(
            source::load_collection(config.clone()),
            Message::CollectionLoaded,
        );

        (
            CollectionGallery {
                page: Page::Collection,
                gallery: Gallery::Loading,
                lightbox: Lightbox::new(),
                sections: pages::default_sections(),
                config,
                status: String::from("Loading collection..."),
            },
            load,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CollectionLoaded(Ok(records)) => {
                println!("✅ Collection loaded: {} images", records.len());
                self.status = format!("Ready. {} images in the collection.", records.len());
                self.gallery = Gallery::Ready(Collection::new(records));
                Task::none()
            }
            Message::CollectionLoaded(Err(error)) => {
                eprintln!("❌ Error loading gallery: {}", error);
                self.status = String::from("Unable to load collection images.");
                self.gallery = Gallery::Failed(error);
                Task::none()
            }
            Message::FilterSelected(category) => {
                if let Gallery::Ready(collection) = &mut self.gallery {
                    collection.apply_filter(&category);
                    self.status = format!(
                        "Showing {} of {} images.",
                        collection.filtered().len(),
                        collection.len()
                    );
                }
                Task::none()
            }
            Message::ThumbnailClicked(index) => {
                if let Gallery::Ready(collection) = &self.gallery {
                    self.lightbox.open(index, collection.filtered().len());
                }
                Task::none()
            }
            Message::LightboxClosed => {
                self.lightbox.close();
                Task::none()
            }
            Message::LightboxNext => {
                if let Gallery::Ready(collection) = &self.gallery {
                    if self.lightbox.next(collection.filtered().len()).is_some() {
                        return fade_swap();
                    }
                }
                Task::none()
            }
            Message::LightboxPrevious => {
                if let Gallery::Ready(collection) = &self.gallery {
                    if self.lightbox.previous(collection.filtered().len()).is_some() {
                        return fade_swap();
                    }
                }
                Task::none()
            }
            Message::LightboxFadeDone => {
                self.lightbox.finish_fade();
                Task::none()
            }
            Message::OpenRepository => {
                let url = format!("https://github.com/{}", self.config.github_repo);
                if let Err(error) = open::that(&url) {
                    eprintln!("⚠️  Could not open {}: {}", url, error);
                }
                Task::none()
            }
            Message::PageSelected(page) => {
                self.page = page;
                Task::none()
            }
            Message::SectionToggled(index) => {
                if let Some(section) = self.sections.get_mut(index) {
                    section.expanded = !section.expanded;
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body: Element<Message> = match self.page {
            Page::Home => pages::home(),
            Page::Collection => self.collection_page(),
            Page::About => pages::about(&self.sections),
        };

        let page = column![
            pages::nav_bar(self.page),
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24),
            container(text(&self.status).size(13)).padding(8),
        ];

        let base: Element<Message> = page.into();

        // The lightbox covers the whole window, navigation included
        if let (Gallery::Ready(collection), Some(shown)) =
            (&self.gallery, self.lightbox.displayed())
        {
            if let Some(record) = collection.filtered().get(shown) {
                return ui::lightbox::overlay(base, record, self.lightbox.is_fading());
            }
        }

        base
    }

    fn collection_page(&self) -> Element<Message> {
        match &self.gallery {
            Gallery::Loading => ui::grid::loading(),
            Gallery::Failed(error) => ui::grid::load_failed(error, &self.config.github_repo),
            Gallery::Ready(collection) => {
                let grid = ui::grid::view(collection, &self.config.images_folder);

                // Page scrolling is suppressed while the lightbox is open
                if self.lightbox.scroll_locked() {
                    grid
                } else {
                    scrollable(grid)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .into()
                }
            }
        }
    }

    /// Escape/arrow bindings are only active while the lightbox is open
    fn subscription(&self) -> Subscription<Message> {
        if self.lightbox.is_open() {
            keyboard::on_key_press(handle_key)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application(
        "HAQ Collectibles",
        CollectionGallery::update,
        CollectionGallery::view,
    )
    .subscription(CollectionGallery::subscription)
    .theme(CollectionGallery::theme)
    .centered()
    .run_with(CollectionGallery::new)
}

fn handle_key(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::LightboxClosed),
        Key::Named(Named::ArrowLeft) => Some(Message::LightboxPrevious),
        Key::Named(Named::ArrowRight) => Some(Message::LightboxNext),
        _ => None,
    }
}

/// Delay matching the fade-out, after which the displayed image swaps
fn fade_swap() -> Task<Message> {
    Task::perform(tokio::time::sleep(Duration::from_millis(FADE_MILLIS)), |_| {
        Message::LightboxFadeDone
    })
}
