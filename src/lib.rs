mod create_flowlist;
pub use create_flowlist::{create_flowlist, render_flowlist, FlowListOptions};
mod document;
pub use document::{Document, Element, MemoryDocument, MemoryElement};
mod link_entry;
pub use link_entry::{load_menu, LinkEntry};
mod main_menu;
pub use main_menu::main_menu;
mod page_initializer;
pub use page_initializer::{InitReport, InitState, PageInitializer};
mod tooltip;
pub use tooltip::{NoTooltip, Tooltip};
mod error;
pub use error::Error;

pub const ICON_PREFIX: &str = "mdi mdi-";
pub const YEAR_ELEMENT_ID: &str = "current-year";
pub const MENU_CONTAINER_ID: &str = "main-menu";
pub const TOOLTIP_SELECTOR: &str = "[data-toggle=\"tooltip\"]";

/// Identifiers shared with the host page markup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identifiers {
    pub year_element: &'static str,
    pub menu_container: &'static str,
    pub tooltip_selector: &'static str,
}

impl Default for Identifiers {
    fn default() -> Self {
        Identifiers {
            year_element: YEAR_ELEMENT_ID,
            menu_container: MENU_CONTAINER_ID,
            tooltip_selector: TOOLTIP_SELECTOR,
        }
    }
}
