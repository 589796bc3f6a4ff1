pub mod app;
pub mod event;
pub mod input;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod timeline;
pub mod widgets;

pub use app::App;
pub use theme::Palette;
