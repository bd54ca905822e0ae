//! Format and subtitle selections

use crate::extractor::models::FormatDescriptor;
use crate::utils::error::LinkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subtitle containers the backend serves as standalone files
pub const SERVED_SUBTITLE_FORMATS: [&str; 3] = ["vtt", "ass", "srt"];

/// Container live chat transcripts are always delivered in
pub const LIVE_CHAT_FORMAT: &str = "json";

/// One slot of the video/audio picker
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormatSlot {
    #[default]
    None,
    Format(FormatDescriptor),
}

impl From<FormatDescriptor> for FormatSlot {
    fn from(format: FormatDescriptor) -> Self {
        FormatSlot::Format(format)
    }
}

impl From<Option<FormatDescriptor>> for FormatSlot {
    fn from(format: Option<FormatDescriptor>) -> Self {
        format.map_or(FormatSlot::None, FormatSlot::Format)
    }
}

/// A valid video/audio choice; "nothing selected" cannot be represented
#[derive(Debug, Clone, PartialEq)]
pub enum FormatSelection {
    VideoOnly(FormatDescriptor),
    AudioOnly(FormatDescriptor),
    /// Mux this video stream with this audio stream
    Muxed {
        video: FormatDescriptor,
        audio: FormatDescriptor,
    },
}

impl FormatSelection {
    /// Build a selection from the two picker slots.
    ///
    /// An empty audio slot wins first, so a video format alone is a video-only
    /// request even if that format also carries audio.
    pub fn new(video_from: FormatSlot, audio_from: FormatSlot) -> Result<Self, LinkError> {
        match (video_from, audio_from) {
            (FormatSlot::None, FormatSlot::None) => Err(LinkError::InvalidSelection),
            (FormatSlot::Format(video), FormatSlot::None) => Ok(FormatSelection::VideoOnly(video)),
            (FormatSlot::None, FormatSlot::Format(audio)) => Ok(FormatSelection::AudioOnly(audio)),
            (FormatSlot::Format(video), FormatSlot::Format(audio)) => {
                Ok(FormatSelection::Muxed { video, audio })
            }
        }
    }

    /// Value of the `f` query parameter.
    ///
    /// Muxed requests join the two IDs with an already percent-encoded `+`.
    pub fn format_token(&self) -> String {
        match self {
            FormatSelection::VideoOnly(video) => video.id.clone(),
            FormatSelection::AudioOnly(audio) => audio.id.clone(),
            FormatSelection::Muxed { video, audio } => format!("{}%2B{}", video.id, audio.id),
        }
    }
}

/// Subtitle language code, with the live chat replay as a special case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SubtitleLanguage {
    LiveChat,
    Code(String),
}

impl SubtitleLanguage {
    pub fn as_str(&self) -> &str {
        match self {
            SubtitleLanguage::LiveChat => "live_chat",
            SubtitleLanguage::Code(code) => code.as_str(),
        }
    }
}

impl From<String> for SubtitleLanguage {
    fn from(value: String) -> Self {
        if value == "live_chat" {
            SubtitleLanguage::LiveChat
        } else {
            SubtitleLanguage::Code(value)
        }
    }
}

impl From<SubtitleLanguage> for String {
    fn from(value: SubtitleLanguage) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for SubtitleLanguage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SubtitleLanguage::from(s.to_string()))
    }
}

impl fmt::Display for SubtitleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How subtitles should be delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SubtitleFormat {
    /// Muxed into the media stream instead of a separate file
    Embed,
    /// Separate file in this container (`vtt`, `srt`, ...)
    File(String),
}

impl SubtitleFormat {
    pub fn as_str(&self) -> &str {
        match self {
            SubtitleFormat::Embed => "embed",
            SubtitleFormat::File(container) => container.as_str(),
        }
    }
}

impl From<String> for SubtitleFormat {
    fn from(value: String) -> Self {
        if value == "embed" {
            SubtitleFormat::Embed
        } else {
            SubtitleFormat::File(value)
        }
    }
}

impl From<SubtitleFormat> for String {
    fn from(value: SubtitleFormat) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for SubtitleFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SubtitleFormat::from(s.to_string()))
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subtitles requested alongside a download
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleRequest {
    pub language: SubtitleLanguage,
    pub format: SubtitleFormat,
}

impl SubtitleRequest {
    pub fn new(language: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            language: SubtitleLanguage::from(language.into()),
            format: SubtitleFormat::from(format.into()),
        }
    }

    /// The format actually requested: live chat is always fetched as json
    pub fn effective_format(&self) -> SubtitleFormat {
        match self.language {
            SubtitleLanguage::LiveChat => SubtitleFormat::File(LIVE_CHAT_FORMAT.to_string()),
            SubtitleLanguage::Code(_) => self.format.clone(),
        }
    }

    /// Whether the backend will serve the effective format.
    ///
    /// Link building never enforces this.
    pub fn is_served(&self) -> bool {
        match self.effective_format() {
            SubtitleFormat::Embed => true,
            SubtitleFormat::File(container) => {
                SERVED_SUBTITLE_FORMATS.contains(&container.as_str())
                    || (self.language == SubtitleLanguage::LiveChat && container == LIVE_CHAT_FORMAT)
            }
        }
    }
}
