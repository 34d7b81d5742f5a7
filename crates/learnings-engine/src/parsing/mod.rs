pub mod blocks;
pub mod inline;

use blocks::{BlockBuilder, ContentNode, MarkdownLineClassifier};

/// Formats a post body into content nodes.
///
/// Pure and total: the same text always yields the same nodes, and no input
/// makes it fail. Lines may end in `\n` or `\r\n`.
pub fn parse_content(text: &str) -> Vec<ContentNode> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}

#[cfg(test)]
mod tests;
