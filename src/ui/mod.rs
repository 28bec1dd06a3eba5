/// UI building blocks
///
/// One widget family per file:
/// - grid.rs renders the filter controls and the thumbnail grid
/// - lightbox.rs renders the full-screen viewer overlay
/// - pages.rs renders the navigation chrome and the static pages

pub mod grid;
pub mod lightbox;
pub mod pages;
