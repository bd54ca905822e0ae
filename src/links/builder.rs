//! Download and subtitle link construction
//!
//! Link shapes understood by the backend:
//! - media: `<base>/dl/<id>?f=<fmt>`, optionally with `&sl=<lang>` for embedded subtitles
//! - subtitles: `<base>/sub/<id>?l=<lang>&f=<fmt>`
//!
//! IDs, format tokens and languages come from the metadata backend and are
//! inserted verbatim.

use crate::links::selection::{FormatSelection, FormatSlot, SubtitleFormat, SubtitleRequest};
use crate::utils::error::LinkError;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Builds resource links against a fixed service root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    /// Create a builder for the given service root.
    ///
    /// The root must be an absolute `http`/`https` URL. Trailing slashes are dropped.
    pub fn new(base: impl Into<String>) -> Result<Self, LinkError> {
        let base = base.into();
        let parsed = Url::parse(&base).map_err(|e| LinkError::InvalidBaseUrl(format!("{}: {}", base, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LinkError::InvalidBaseUrl(format!(
                "{}: unsupported scheme {}",
                base,
                parsed.scheme()
            )));
        }

        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Media link for two picker slots; fails if both are empty
    pub fn media_link(
        &self,
        id: &str,
        video_from: &FormatSlot,
        audio_from: &FormatSlot,
    ) -> Result<String, LinkError> {
        let selection = FormatSelection::new(video_from.clone(), audio_from.clone())?;
        Ok(self.media_link_for(id, &selection))
    }

    /// Media link for an already validated selection
    pub fn media_link_for(&self, id: &str, selection: &FormatSelection) -> String {
        format!("{}/dl/{}?f={}", self.base, id, selection.format_token())
    }

    /// Standalone subtitle link. Language and format are not validated.
    pub fn subtitle_link(&self, id: &str, language: &str, format: &str) -> String {
        format!("{}/sub/{}?l={}&f={}", self.base, id, language, format)
    }

    /// Everything the caller has to fetch for one download
    pub fn build_download(
        &self,
        id: &str,
        video_from: &FormatSlot,
        audio_from: &FormatSlot,
        subtitles: Option<&SubtitleRequest>,
    ) -> Result<DownloadPlan, LinkError> {
        let mut media = self.media_link(id, video_from, audio_from)?;

        let subtitle = match subtitles {
            None => None,
            Some(request) => match request.effective_format() {
                SubtitleFormat::Embed => {
                    media.push_str("&sl=");
                    media.push_str(request.language.as_str());
                    None
                }
                SubtitleFormat::File(container) => {
                    Some(self.subtitle_link(id, request.language.as_str(), &container))
                }
            },
        };

        let plan = DownloadPlan { subtitle, media };
        debug!("Built download plan for {}: {} link(s)", id, plan.link_count());
        Ok(plan)
    }
}

/// Resource links produced for one download request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadPlan {
    /// Separate subtitle file, if one was requested
    pub subtitle: Option<String>,
    /// Primary media stream
    pub media: String,
}

impl DownloadPlan {
    /// Links in the order they should be triggered: subtitles first, then media
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.subtitle
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.media.as_str()))
    }

    pub fn link_count(&self) -> usize {
        1 + usize::from(self.subtitle.is_some())
    }

    /// Append a file name hint for the backend to the media link
    pub fn with_title(&mut self, title: &str) {
        self.media.push_str("&title=");
        self.media.extend(utf8_percent_encode(title, NON_ALPHANUMERIC));
    }
}
