//! Watch URL resolution
//!
//! Turns a string typed or pasted by a user into a [`VideoReference`].
//! Nothing here touches the network.

use crate::extractor::hosts::HostKind;
use crate::extractor::models::VideoReference;
use crate::utils::error::ResolveError;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

static CANONICAL_WATCH_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://www.youtube.com/watch").expect("should be able to parse the canonical watch URL")
});

/// Resolve a user-supplied string into a video reference.
///
/// Bare hosts such as `youtu.be/abc` get `https://` prepended before parsing.
pub fn resolve(input: &str) -> Result<VideoReference, ResolveError> {
    let url = parse_with_scheme(input)?;

    let id = match HostKind::of(&url) {
        HostKind::WatchHost => watch_param(&url).ok_or(ResolveError::MissingVideoParam)?,
        HostKind::ShortHost => short_path_id(&url).ok_or(ResolveError::MissingVideoId)?,
        HostKind::Unsupported => return Err(ResolveError::UnsupportedHost),
    };

    debug!("Resolved {} to video ID {}", url, id);

    Ok(VideoReference {
        raw: url.to_string(),
        id,
    })
}

/// Best-effort recognition of a full watch page URL, e.g. a browser address bar.
///
/// Only `/watch?v=` URLs on a watch host are accepted; short links are not.
/// Every failure collapses to `None`. On success `raw` is the canonical
/// `https://www.youtube.com/watch?v=<id>` form.
pub fn probe(input: &str) -> Option<VideoReference> {
    match try_probe(input) {
        Ok(reference) => Some(reference),
        Err(e) => {
            debug!("Not a watch page URL {:?}: {}", input, e);
            None
        }
    }
}

fn try_probe(input: &str) -> Result<VideoReference, ResolveError> {
    let url = parse_with_scheme(input)?;

    if HostKind::of(&url) != HostKind::WatchHost {
        return Err(ResolveError::UnsupportedHost);
    }
    if url.path() != "/watch" {
        return Err(ResolveError::NotWatchPage);
    }
    let id = watch_param(&url).ok_or(ResolveError::MissingVideoParam)?;

    Ok(VideoReference {
        raw: canonical_watch_url(&id),
        id,
    })
}

/// Canonical watch page URL for an identifier.
///
/// The ID is form-encoded so that it survives being resolved again.
pub fn canonical_watch_url(id: &str) -> String {
    let mut url = CANONICAL_WATCH_URL.clone();
    url.query_pairs_mut().append_pair("v", id);
    url.to_string()
}

fn parse_with_scheme(input: &str) -> Result<Url, ResolveError> {
    let parsed = if input.starts_with(HTTP_PREFIX) || input.starts_with(HTTPS_PREFIX) {
        Url::parse(input)
    } else {
        Url::parse(&format!("{}{}", HTTPS_PREFIX, input))
    };

    parsed.map_err(|e| {
        debug!("Failed to parse {:?} as a URL: {}", input, e);
        ResolveError::InvalidUrl
    })
}

/// Value of the first `v` parameter, if it is non-empty
fn watch_param(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

fn short_path_id(url: &Url) -> Option<String> {
    url.path()
        .strip_prefix('/')
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
}
