use crate::parsing::blocks::types::HeadingLevel;

/// ATX-style heading markers understood in post bodies.
pub struct Heading;

impl Heading {
    /// Markers with the level each produces. `# ` is the title marker.
    pub const MARKERS: [(&'static str, HeadingLevel); 3] = [
        ("# ", HeadingLevel::H2),
        ("## ", HeadingLevel::H3),
        ("### ", HeadingLevel::H4),
    ];

    /// Splits a heading line into its level and the text after the marker.
    pub fn split(line: &str) -> Option<(HeadingLevel, &str)> {
        Self::MARKERS
            .iter()
            .find_map(|(marker, level)| line.strip_prefix(marker).map(|rest| (*level, rest)))
    }
}
