use crate::LinkEntry;
use lazy_static::lazy_static;

lazy_static! {
    static ref MAIN_MENU: Vec<LinkEntry> = vec![
        LinkEntry::new(
            "My LinkedIn",
            "https://www.linkedin.com/in/daniel-seifert-23164b6a/",
            "linkedin",
            "blue",
        ),
        LinkEntry::new("My Github", "https://github.com/dseif0x", "github", "lime"),
    ];
}

/// The homepage's main menu, in display order.
pub fn main_menu() -> &'static [LinkEntry] {
    &MAIN_MENU
}
