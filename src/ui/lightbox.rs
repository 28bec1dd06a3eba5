use iced::alignment::Horizontal;
use iced::widget::{button, column, container, image, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Color, ContentFit, Element, Length, Theme};

use crate::state::data::ImageRecord;
use crate::Message;

/// Stack the full-screen viewer for `record` over `base`.
///
/// A click on the dimmed backdrop closes the viewer; the image box and
/// the controls swallow their own clicks. While `fading` the image is
/// drawn fully transparent, until the swap timer fires.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    record: &'a ImageRecord,
    fading: bool,
) -> Element<'a, Message> {
    let photo = image(image::Handle::from_path(&record.source))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill)
        .opacity(if fading { 0.0 } else { 1.0 });

    let caption = text(&record.title).size(16).color(Color::WHITE);

    let close = container(nav_button("\u{00d7}", Message::LightboxClosed))
        .width(Length::Fill)
        .align_x(Horizontal::Right);

    let viewer = column![
        close,
        row![
            nav_button("\u{2039}", Message::LightboxPrevious),
            // The image box swallows clicks; only the backdrop closes
            opaque(
                column![photo, caption]
                    .spacing(12)
                    .align_x(Alignment::Center)
            ),
            nav_button("\u{203a}", Message::LightboxNext),
        ]
        .spacing(16)
        .align_y(Alignment::Center)
        .height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(16);

    stack![
        base,
        opaque(
            mouse_area(
                container(viewer)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(backdrop)
            )
            .on_press(Message::LightboxClosed)
        )
    ]
    .into()
}

fn nav_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(32).color(Color::WHITE))
        .style(button::text)
        .on_press(message)
        .into()
}

fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}
