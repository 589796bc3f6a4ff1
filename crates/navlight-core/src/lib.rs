pub mod animation;
pub mod config;
pub mod error;
pub mod location;
pub mod nav;
pub mod scroll;
pub mod site;
pub mod state;
pub mod theme;

pub use config::{AppConfig, EasingType, ScrollConfig, SiteConfig};
pub use error::{Error, Result};
pub use location::NavigationState;
pub use nav::{ActiveSet, LinkId, NavLink, NavRegistry, NavResolver};
pub use state::{AppState, Effect, UiEvent};
pub use theme::Theme;
