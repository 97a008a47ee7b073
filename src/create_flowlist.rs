use crate::{LinkEntry, ICON_PREFIX};

/// Display flags of a flow-list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowListOptions {
    /// Adds the `smallt` size modifier to every link.
    pub small: bool,

    /// Adds the `center-text` modifier to the wrapper.
    pub center: bool,
}

impl Default for FlowListOptions {
    fn default() -> Self {
        FlowListOptions {
            small: true,
            center: false,
        }
    }
}

pub fn render_flowlist(entries: &[LinkEntry], options: FlowListOptions) -> String {
    create_flowlist(entries, options.small, options.center)
}

/// Renders `entries` as a flow-list fragment, one item per entry in input order.
///
/// Entry fields are inserted verbatim, without HTML escaping.
pub fn create_flowlist(entries: &[LinkEntry], small: bool, center: bool) -> String {
    let mut html = format!(
        "<div class=\"flow-list {}\">",
        if center { "center-text" } else { "" }
    );

    for entry in entries {
        let target_blank = if entry.external {
            "target=\"_blank\""
        } else {
            ""
        };
        let small_class = if small { "smallt" } else { "" };

        html.push_str(&format!(
            "
            <div class=\"flow-list-item\">
                <a title=\"{}\" data-toggle=\"tooltip\" class=\"hlink {}\" {} href=\"{}\">
                    <i class=\"{} {}{}\"></i>
                </a>
            </div>",
            entry.title, small_class, target_blank, entry.link, entry.classes, ICON_PREFIX, entry.icon
        ));
    }

    html.push_str("</div>");
    html
}
