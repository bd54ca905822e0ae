//! Host allow-list for watch URLs

use url::Url;

/// The bare watch domain
pub const WATCH_DOMAIN: &str = "youtube.com";

/// Prefixes allowed in front of [`WATCH_DOMAIN`] (at most one)
pub const WATCH_PREFIXES: [&str; 2] = ["www.", "music."];

/// Short-link host
pub const SHORT_HOST: &str = "youtu.be";

/// Classification of a URL host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// `youtube.com`, `www.youtube.com` or `music.youtube.com`: ID is in the `v` query parameter
    WatchHost,
    /// `youtu.be`: ID is the path
    ShortHost,
    Unsupported,
}

impl HostKind {
    /// Classify a host string by exact, case-sensitive match.
    ///
    /// The string is the URL's host *including* a non-default port, so
    /// `youtube.com:8080` is unsupported.
    pub fn classify(host: &str) -> Self {
        if host == SHORT_HOST {
            return HostKind::ShortHost;
        }

        let bare = WATCH_PREFIXES
            .iter()
            .find_map(|prefix| host.strip_prefix(prefix))
            .unwrap_or(host);

        if bare == WATCH_DOMAIN {
            HostKind::WatchHost
        } else {
            HostKind::Unsupported
        }
    }

    /// Classify the host of a parsed URL
    pub fn of(url: &Url) -> Self {
        match (url.host_str(), url.port()) {
            (Some(host), None) => Self::classify(host),
            (Some(host), Some(port)) => Self::classify(&format!("{}:{}", host, port)),
            (None, _) => HostKind::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_hosts() {
        assert_eq!(HostKind::classify("youtube.com"), HostKind::WatchHost);
        assert_eq!(HostKind::classify("www.youtube.com"), HostKind::WatchHost);
        assert_eq!(HostKind::classify("music.youtube.com"), HostKind::WatchHost);
    }

    #[test]
    fn test_short_host() {
        assert_eq!(HostKind::classify("youtu.be"), HostKind::ShortHost);
        assert_eq!(HostKind::classify("www.youtu.be"), HostKind::Unsupported);
    }

    #[test]
    fn test_only_one_prefix() {
        assert_eq!(HostKind::classify("www.music.youtube.com"), HostKind::Unsupported);
        assert_eq!(HostKind::classify("music.www.youtube.com"), HostKind::Unsupported);
        assert_eq!(HostKind::classify("m.youtube.com"), HostKind::Unsupported);
    }

    #[test]
    fn test_literal_match() {
        assert_eq!(HostKind::classify("youtubeXcom"), HostKind::Unsupported);
        assert_eq!(HostKind::classify("youtube.com.evil.org"), HostKind::Unsupported);
        assert_eq!(HostKind::classify("notyoutube.com"), HostKind::Unsupported);
        assert_eq!(HostKind::classify("YouTube.com"), HostKind::Unsupported);
        assert_eq!(HostKind::classify("vimeo.com"), HostKind::Unsupported);
    }

    #[test]
    fn test_port_is_part_of_host() {
        let url = Url::parse("https://youtube.com:8080/watch?v=abc").unwrap();
        assert_eq!(HostKind::of(&url), HostKind::Unsupported);

        // default ports are dropped by the parser
        let url = Url::parse("https://youtube.com:443/watch?v=abc").unwrap();
        assert_eq!(HostKind::of(&url), HostKind::WatchHost);
    }
}
