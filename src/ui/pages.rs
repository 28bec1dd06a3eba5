use iced::widget::{button, center, column, container, horizontal_space, row, text, Row};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Pages reachable from the top navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Collection,
    About,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Collection, Page::About];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Collection => "Collection",
            Page::About => "About",
        }
    }
}

/// One collapsible block on the About page
#[derive(Debug, Clone)]
pub struct AboutSection {
    pub title: &'static str,
    pub body: &'static str,
    pub expanded: bool,
}

/// The About page content, all sections collapsed
pub fn default_sections() -> Vec<AboutSection> {
    vec![
        AboutSection {
            title: "Who we are",
            body: "HAQ Collectibles is a family-run dealer in coins, rare books \
                   and curios. Every piece in the collection has been inspected \
                   and catalogued by hand.",
            expanded: false,
        },
        AboutSection {
            title: "Grading and condition",
            body: "Coins are described with standard grading terminology. Books \
                   list edition, printing and binding condition. Photographs \
                   always show the actual item on offer.",
            expanded: false,
        },
        AboutSection {
            title: "Visits and inquiries",
            body: "Viewings are by appointment. If a piece in the gallery \
                   catches your eye, get in touch and we will set something up.",
            expanded: false,
        },
    ]
}

/// Top navigation bar with the active page marked
pub fn nav_bar<'a>(active: Page) -> Element<'a, Message> {
    let mut links = Row::new().spacing(6);
    for page in Page::ALL {
        let style = if page == active {
            button::primary
        } else {
            button::text
        };

        links = links.push(
            button(text(page.label()))
                .style(style)
                .on_press(Message::PageSelected(page)),
        );
    }

    container(
        row![text("HAQ Collectibles").size(22), horizontal_space(), links]
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(12)
    .into()
}

/// Landing page
pub fn home<'a>() -> Element<'a, Message> {
    center(
        column![
            text("A Collection Worth Keeping").size(34),
            text("Coins, rare books and curios, photographed piece by piece.").size(16),
            button(text("Browse the collection"))
                .on_press(Message::PageSelected(Page::Collection)),
        ]
        .spacing(18)
        .align_x(Alignment::Center),
    )
    .into()
}

/// About page with its collapsible sections
pub fn about(sections: &[AboutSection]) -> Element<'_, Message> {
    let mut content = column![text("About the collection").size(28)].spacing(14);

    for (index, section) in sections.iter().enumerate() {
        let marker = if section.expanded { "\u{25be}" } else { "\u{25b8}" };

        let header = button(text(format!("{} {}", marker, section.title)).size(17))
            .style(button::text)
            .on_press(Message::SectionToggled(index));

        let mut block = column![header].spacing(6);
        if section.expanded {
            block = block.push(container(text(section.body).size(14)).padding(8));
        }

        content = content.push(block);
    }

    content.into()
}
