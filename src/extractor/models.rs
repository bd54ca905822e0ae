//! Data structures for video references and format catalogs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A successfully resolved watch URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoReference {
    /// Normalized absolute URL the identifier was extracted from
    pub raw: String,
    /// Opaque video identifier
    pub id: String,
}

/// One downloadable stream, as listed by the metadata backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub id: String,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoInfo>,
}

/// Audio stream details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioInfo {
    pub samples: u32,
    pub rate: f32,
    pub codec: String,
}

/// Video stream details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub width: u32,
    pub height: u32,
    pub fps: f32,
    pub codec: String,
}

impl FormatDescriptor {
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    /// Short human-readable description, e.g. `1920x1080@30 avc1 + opus`
    pub fn label(&self) -> String {
        let video = self
            .video
            .as_ref()
            .map(|v| format!("{}x{}@{} {}", v.width, v.height, v.fps, v.codec));
        let audio = self
            .audio
            .as_ref()
            .map(|a| format!("{} {}kbps", a.codec, a.rate));

        match (video, audio) {
            (Some(v), Some(a)) => format!("{} + {}", v, a),
            (Some(v), None) => v,
            (None, Some(a)) => a,
            (None, None) => self.note.clone(),
        }
    }
}

/// Video metadata document served by the backend's `/meta/<id>` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMeta {
    pub title: String,
    pub author: Author,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub formats: Vec<FormatDescriptor>,
    /// Subtitle language code -> display name
    #[serde(default)]
    pub subs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub subscribers: u64,
}

impl VideoMeta {
    /// Formats that carry a video stream (with or without audio)
    pub fn video_formats(&self) -> Vec<&FormatDescriptor> {
        self.formats.iter().filter(|f| f.has_video()).collect()
    }

    /// Audio-only formats
    pub fn audio_formats(&self) -> Vec<&FormatDescriptor> {
        self.formats
            .iter()
            .filter(|f| f.has_audio() && !f.has_video())
            .collect()
    }

    pub fn find_format(&self, id: &str) -> Option<&FormatDescriptor> {
        self.formats.iter().find(|f| f.id == id)
    }
}
