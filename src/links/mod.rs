pub mod builder;
pub mod selection;

pub use builder::{DownloadPlan, LinkBuilder};
pub use selection::{FormatSelection, FormatSlot, SubtitleFormat, SubtitleLanguage, SubtitleRequest};
