pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If `line` is a fence marker, returns its info string (trimmed, possibly empty).
    pub fn info(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS).map(str::trim)
    }

    /// Language tag for an info string; an empty one means none.
    pub fn language(info: &str) -> Option<String> {
        (!info.is_empty()).then(|| info.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::info("```rust"), Some("rust"));
    }

    #[test]
    fn bare_fence_has_empty_info() {
        assert_eq!(CodeFence::info("```"), Some(""));
        assert_eq!(CodeFence::language(""), None);
    }

    #[test]
    fn info_is_trimmed() {
        assert_eq!(CodeFence::info("```  js  "), Some("js"));
        assert_eq!(CodeFence::language("js"), Some("js".to_string()));
    }

    #[test]
    fn indented_fence_is_not_a_fence() {
        assert_eq!(CodeFence::info("  ```"), None);
        assert_eq!(CodeFence::info("hello"), None);
    }
}
