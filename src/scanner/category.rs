use serde::Serialize;
use std::fmt;

/// Closed classification of a file by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Video,
    Audio,
    Doc,
    Sub,
    Image,
    Archive,
    Other,
}

const VIDEO: &[&str] = &[".mp4", ".webm", ".avi", ".mkv", ".mov", ".ogg", ".wmv"];
const IMAGE: &[&str] = &[".jpg", ".jpeg", ".png", ".bmp", ".gif", ".webp"];
const DOC: &[&str] = &[
    ".txt", ".odt", ".ods", ".odp", ".php", ".cpp", ".py", ".pl", ".html", ".js", ".css", ".pdf",
    ".go", ".mhtml", ".xml", ".json", ".docx",
];
const AUDIO: &[&str] = &[".mp3", ".flac", ".m4a"];
const SUB: &[&str] = &[".srt", ".ass", ".vtt"];
const ARCHIVE: &[&str] = &[".zip", ".rar", ".gzip", ".gz", ".tar"];

impl Category {
    pub const COUNT: usize = 7;

    /// All categories in report order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Video,
        Category::Audio,
        Category::Doc,
        Category::Sub,
        Category::Image,
        Category::Archive,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Video => "video",
            Category::Audio => "audio",
            Category::Doc => "doc",
            Category::Sub => "sub",
            Category::Image => "image",
            Category::Archive => "archive",
            Category::Other => "other",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Classify a dot-prefixed extension key. Matching ignores case.
    pub fn from_extension(ext: &str) -> Category {
        let ext = ext.to_ascii_lowercase();
        let ext = ext.as_str();
        if VIDEO.contains(&ext) {
            Category::Video
        } else if IMAGE.contains(&ext) {
            Category::Image
        } else if DOC.contains(&ext) {
            Category::Doc
        } else if AUDIO.contains(&ext) {
            Category::Audio
        } else if SUB.contains(&ext) {
            Category::Sub
        } else if ARCHIVE.contains(&ext) {
            Category::Archive
        } else {
            Category::Other
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase extension of `file_name` including the leading dot.
///
/// Returns an empty string for names without an extension: no dot at all,
/// a dotfile such as `.bashrc`, or a trailing dot.
pub fn extension_key(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(0) | None => String::new(),
        Some(idx) if idx + 1 == file_name.len() => String::new(),
        Some(idx) => file_name[idx..].to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_indexed_in_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_classify_known_extensions() {
        assert_eq!(Category::from_extension(".mp4"), Category::Video);
        assert_eq!(Category::from_extension(".ogg"), Category::Video);
        assert_eq!(Category::from_extension(".webp"), Category::Image);
        assert_eq!(Category::from_extension(".json"), Category::Doc);
        assert_eq!(Category::from_extension(".flac"), Category::Audio);
        assert_eq!(Category::from_extension(".vtt"), Category::Sub);
        assert_eq!(Category::from_extension(".gz"), Category::Archive);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Category::from_extension(".MKV"), Category::Video);
        assert_eq!(Category::from_extension(".Jpeg"), Category::Image);
    }

    #[test]
    fn test_unknown_and_empty_are_other() {
        assert_eq!(Category::from_extension(".rs"), Category::Other);
        assert_eq!(Category::from_extension(""), Category::Other);
        // Without the dot the key doesn't match
        assert_eq!(Category::from_extension("mp4"), Category::Other);
    }

    #[test]
    fn test_extension_key() {
        assert_eq!(extension_key("movie.MP4"), ".mp4");
        assert_eq!(extension_key("backup.tar.gz"), ".gz");
        assert_eq!(extension_key("README"), "");
        assert_eq!(extension_key(".bashrc"), "");
        assert_eq!(extension_key(".config.json"), ".json");
        assert_eq!(extension_key("weird."), "");
    }

    #[test]
    fn test_display_matches_serde_name() {
        assert_eq!(Category::Sub.to_string(), "sub");
        assert_eq!(
            serde_json::to_string(&Category::Archive).unwrap(),
            "\"archive\""
        );
    }
}
