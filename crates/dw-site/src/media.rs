//! Media archive categories.
//!
//! The archive groups files into fixed categories, each backed by its own
//! server directory (`media/video/`, `media/audio/`, ...). Extension
//! matching is case-insensitive; unknown extensions are simply not listed.

/// A media category and the file extensions it accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaCategory {
    /// Category name, doubling as the server subdirectory name.
    pub name: &'static str,
    /// Accepted file extensions, lowercase with leading dot.
    pub extensions: &'static [&'static str],
}

/// All categories, in display order.
pub const CATEGORIES: &[MediaCategory] = &[
    MediaCategory {
        name: "video",
        extensions: &[".mp4", ".webm", ".avi", ".mov"],
    },
    MediaCategory {
        name: "audio",
        extensions: &[".mp3", ".wav", ".flac", ".ogg"],
    },
    MediaCategory {
        name: "image",
        extensions: &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"],
    },
    MediaCategory {
        name: "executable",
        extensions: &[".exe", ".sh", ".bin", ".app", ".jar"],
    },
];

impl MediaCategory {
    /// Check whether a filename belongs to this category.
    ///
    /// Matching is case-insensitive on the filename side.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext))
    }
}
