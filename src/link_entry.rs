use crate::Error;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    pub title: String,

    pub link: String,

    /// Glyph name, appended to `ICON_PREFIX` when rendered.
    pub icon: String,

    pub classes: String,

    /// Opens the link in a new browsing context unless explicitly `false`.
    #[serde(default = "default_external")]
    pub external: bool,
}

fn default_external() -> bool {
    true
}

impl LinkEntry {
    pub fn new(title: &str, link: &str, icon: &str, classes: &str) -> LinkEntry {
        LinkEntry {
            title: title.to_string(),
            link: link.to_string(),
            icon: icon.to_string(),
            classes: classes.to_string(),
            external: true,
        }
    }

    pub fn internal(mut self) -> LinkEntry {
        self.external = false;
        self
    }
}

/// Reads a menu from a JSON array of entries. Entries missing a required
/// field are rejected instead of being rendered with placeholder text.
pub fn load_menu(json: &str) -> Result<Vec<LinkEntry>, Error> {
    match serde_json::from_str(json) {
        Ok(entries) => Ok(entries),
        Err(err) => Err(Error::ParseError(format!(
            "Could not deserialize menu from \"{}\" ({}).",
            json,
            err.to_string()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_defaults_to_true() {
        let entries = load_menu(
            r#"[{"title": "Blog", "link": "https://example.com/", "icon": "pen", "classes": "red"}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].external);
        assert_eq!(entries[0], LinkEntry::new("Blog", "https://example.com/", "pen", "red"));
    }

    #[test]
    fn explicit_external_false_is_kept() {
        let entries = load_menu(
            r#"[{"title": "Home", "link": "https://example.com/", "icon": "home", "classes": "", "external": false}]"#,
        )
        .unwrap();
        assert!(!entries[0].external);
    }

    #[test]
    fn missing_title_fails() {
        let res = load_menu(r#"[{"link": "https://example.com/", "icon": "pen", "classes": "red"}]"#);
        match res {
            Err(Error::ParseError(msg)) => assert!(msg.contains("title")),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn empty_array_is_an_empty_menu() {
        assert_eq!(load_menu("[]").unwrap(), Vec::<LinkEntry>::new());
    }
}
