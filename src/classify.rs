//! Extension-based file classification.
//!
//! A file name maps to exactly one [`Category`]. The lookup key is the text after
//! the last dot, lowercased. Names without such a suffix (`README`, `.gitignore`,
//! `notes.`) fall into [`Category::Others`].
//!
//! ```
//! use file_organizer::classify::{Category, Classifier};
//!
//! let c = Classifier::default();
//! assert_eq!(c.classify("photo.PNG"), Category::Images);
//! assert_eq!(c.classify("archive.tar.gz"), Category::Archives);
//! assert_eq!(c.classify("README"), Category::Others);
//! ```

use std::collections::HashMap;
use std::fmt;

/// Fixed set of category labels. The label doubles as the sub-directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Images,
    Documents,
    Audio,
    Video,
    Archives,
    Code,
    Executables,
    Fonts,
    /// Catch-all for unknown or missing extensions.
    Others,
}

impl Category {
    /// Directory name created under the source directory for this category.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Audio => "Audio",
            Category::Video => "Video",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Executables => "Executables",
            Category::Fonts => "Fonts",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Built-in extension table (extensions without the leading dot).
pub const DEFAULT_MAPPINGS: &[(Category, &[&str])] = &[
    (
        Category::Images,
        &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "tiff", "ico", "raw", "heic"],
    ),
    (
        Category::Documents,
        &[
            "pdf", "doc", "docx", "txt", "rtf", "odt", "xls", "xlsx", "ppt", "pptx", "csv", "md",
            "epub",
        ],
    ),
    (
        Category::Audio,
        &["mp3", "wav", "flac", "aac", "ogg", "m4a", "wma", "aiff"],
    ),
    (
        Category::Video,
        &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "m4v", "mpeg", "mpg"],
    ),
    (
        Category::Archives,
        &["zip", "rar", "7z", "tar", "gz", "bz2", "xz", "iso", "tgz"],
    ),
    (
        Category::Code,
        &[
            "go", "py", "js", "html", "css", "java", "cpp", "c", "h", "ts", "json", "xml", "sql",
            "sh", "bat", "php", "rb", "pl",
        ],
    ),
    (
        Category::Executables,
        &["exe", "msi", "apk", "app", "dmg", "deb", "rpm", "bin", "jar"],
    ),
    (Category::Fonts, &["ttf", "otf", "woff", "woff2"]),
];

/// Read-only lowercase-extension -> category table.
#[derive(Debug, Clone)]
pub struct ExtensionTable {
    map: HashMap<String, Category>,
}

impl ExtensionTable {
    /// Build a table from `(category, extensions)` pairs. Keys are lowercased.
    pub fn from_mappings(mappings: &[(Category, &[&str])]) -> Self {
        let map = mappings
            .iter()
            .flat_map(|(cat, exts)| exts.iter().map(move |e| (e.to_ascii_lowercase(), *cat)))
            .collect();
        Self { map }
    }

    pub fn get(&self, ext: &str) -> Option<Category> {
        self.map.get(ext).copied()
    }

}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::from_mappings(DEFAULT_MAPPINGS)
    }
}

/// Total function from file name to category. Never mutated after construction,
/// so a shared reference can be read by every worker.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    table: ExtensionTable,
}

impl Classifier {
    pub fn new(table: ExtensionTable) -> Self {
        Self { table }
    }

    pub fn classify(&self, file_name: &str) -> Category {
        extension_of(file_name)
            .and_then(|ext| self.table.get(&ext.to_ascii_lowercase()))
            .unwrap_or(Category::Others)
    }
}

/// Text after the last dot, if that dot is not the first character and the suffix
/// is non-empty. Matches `Path::extension` for plain file names.
fn extension_of(file_name: &str) -> Option<&str> {
    match file_name.rfind('.') {
        Some(0) | None => None,
        Some(i) if i + 1 == file_name.len() => None,
        Some(i) => Some(&file_name[i + 1..]),
    }
}
