//! Navigation bar model
//!
//! - `href` - splitting link targets into page and fragment
//! - `registry` - the fixed set of links declared at startup
//! - `markup` - building the registry from navbar HTML
//! - `resolver` - which links are active for a location
//! - `click` - what a click on a link should do

mod click;
mod href;
mod markup;
mod registry;
mod resolver;

pub use click::{route_click, ClickContext, ClickOutcome, LinkAction, SectionIndex};
pub use href::{fragment_id, has_scheme, is_page_link, parse_href, LinkTarget};
pub use markup::{parse_nav_markup, parse_nav_markup_file};
pub use registry::{LinkId, NavLink, NavRegistry};
pub use resolver::{resolve, ActiveSet, NavResolver};
