use iced::mouse::Interaction;
use iced::widget::{button, center, column, container, image, mouse_area, text, Row};
use iced::{Alignment, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::source::LoadError;
use crate::state::collection::Collection;
use crate::state::data::ImageRecord;
use crate::Message;

/// Thumbnail tile edge length in logical pixels
const TILE_SIZE: f32 = 220.0;

/// The gallery body: filter controls (when there is something to
/// filter) above the thumbnail grid, or the empty-state message.
pub fn view<'a>(collection: &'a Collection, images_folder: &'a str) -> Element<'a, Message> {
    if collection.is_empty() {
        return empty_state(images_folder);
    }

    let categories = collection.categories();

    let mut content = column![].spacing(24).width(Length::Fill);

    // Controls only appear once there is more than one real category
    if categories.len() > 2 {
        content = content.push(filter_row(&categories, collection.active_filter()));
    }

    content.push(thumbnail_grid(collection.filtered())).into()
}

/// Centered placeholder shown while the source loader runs
pub fn loading<'a>() -> Element<'a, Message> {
    center(text("Loading the collection...").size(18)).into()
}

/// Error panel replacing the grid when the load fails. Nothing partial
/// is rendered; the repository control opens the browser.
pub fn load_failed<'a>(error: &LoadError, github_repo: &str) -> Element<'a, Message> {
    center(
        column![
            text("Unable to load collection images.").size(20),
            text(error.to_string()).size(14),
            text(format!(
                "Please check the {} repository or ensure the images.json manifest exists.",
                github_repo
            ))
            .size(13),
            button(text("Open repository page")).on_press(Message::OpenRepository),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .into()
}

fn empty_state<'a>(images_folder: &str) -> Element<'a, Message> {
    center(
        column![
            text("No images found in the collection folder.").size(18),
            text(format!(
                "Add images to the {} folder to display them here.",
                images_folder
            ))
            .size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .into()
}

/// One control per category, the active one marked
fn filter_row<'a>(categories: &[String], active: &str) -> Element<'a, Message> {
    let mut controls = Row::new().spacing(8);

    for category in categories {
        let style = if category == active {
            button::primary
        } else {
            button::secondary
        };

        controls = controls.push(
            button(text(capitalize(category)))
                .style(style)
                .on_press(Message::FilterSelected(category.clone())),
        );
    }

    controls.into()
}

/// Wrapped rows of clickable tiles, one per record in the filtered view
fn thumbnail_grid<'a>(records: &'a [ImageRecord]) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = records
        .iter()
        .enumerate()
        .map(|(index, record)| tile(index, record))
        .collect();

    Wrap::with_elements(tiles)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

fn tile<'a>(index: usize, record: &'a ImageRecord) -> Element<'a, Message> {
    // iced decodes the file lazily, when the tile first becomes visible
    let thumbnail = image(image::Handle::from_path(&record.source))
        .width(TILE_SIZE)
        .height(TILE_SIZE)
        .content_fit(ContentFit::Cover);

    let overlay = container(text(&record.title).size(14))
        .width(TILE_SIZE)
        .padding(6)
        .style(caption_style);

    mouse_area(column![thumbnail, overlay])
        .interaction(Interaction::Pointer)
        .on_press(Message::ThumbnailClicked(index))
        .into()
}

fn caption_style(theme: &Theme) -> container::Style {
    let pair = theme.extended_palette().background.weak;
    container::Style {
        background: Some(pair.color.into()),
        text_color: Some(pair.text),
        ..container::Style::default()
    }
}

/// First letter upper-cased, the rest untouched ("coins" -> "Coins")
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
