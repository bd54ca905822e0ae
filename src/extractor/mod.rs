pub mod hosts;
pub mod models;
pub mod resolver;

pub use hosts::HostKind;
pub use models::{AudioInfo, Author, FormatDescriptor, VideoInfo, VideoMeta, VideoReference};
pub use resolver::{canonical_watch_url, probe, resolve};
