//! Tubelink library
//!
//! Resolves pasted video URLs and builds download links for a
//! yt-dlp style download backend. Nothing here performs network I/O.

pub mod extractor;
pub mod links;
pub mod utils;

// Re-export main types for easier use
pub use extractor::{probe, resolve, FormatDescriptor, HostKind, VideoMeta, VideoReference};
pub use links::{DownloadPlan, FormatSelection, FormatSlot, LinkBuilder, SubtitleRequest};
pub use utils::{abbreviate, AppSettings, TubelinkError};
