/// Bare URLs recognised without any markup.
pub struct AutoLink;

impl AutoLink {
    pub const HTTP: &'static str = "http://";
    pub const HTTPS: &'static str = "https://";
    pub const WWW: &'static str = "www.";

    /// Prefixes in match order.
    pub const PREFIXES: [&'static str; 3] = [Self::HTTP, Self::HTTPS, Self::WWW];

    /// Turns matched URL text into an href. Only `www.` URLs are rewritten.
    pub fn href(text: &str) -> String {
        if text.starts_with(Self::WWW) {
            format!("{}{text}", Self::HTTPS)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn www_gets_https_scheme() {
        assert_eq!(AutoLink::href("www.rust-lang.org"), "https://www.rust-lang.org");
    }

    #[test]
    fn schemes_kept_verbatim() {
        assert_eq!(AutoLink::href("http://a.b/c"), "http://a.b/c");
        assert_eq!(AutoLink::href("https://a.b"), "https://a.b");
    }
}
