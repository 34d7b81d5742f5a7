/// Single-level bullet list items.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Text after the bullet marker, if `line` is a list item.
    pub fn text(line: &str) -> Option<&str> {
        Self::MARKERS.iter().find_map(|m| line.strip_prefix(m))
    }
}
