// crates/engine/src/language.rs
//! Which files the scanner is allowed to look at.
//!
//! Only C and C++ sources are analysed. Detection is purely by extension,
//! after applying the user's extension mapping.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    C,
    Cpp,
}

impl SourceLanguage {
    /// 拡張子から言語を判定する
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "c" | "h" => Some(Self::C),
            "cc" | "cpp" | "cxx" | "c++" | "hh" | "hpp" | "hxx" | "h++" | "ipp" | "inl"
            | "tpp" => Some(Self::Cpp),
            _ => None,
        }
    }

    /// Resolve a path, applying `map_ext` first (mapping keys are matched as written).
    #[must_use]
    pub fn from_path(path: &Path, map_ext: &HashMap<String, String>) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        let effective = map_ext.get(ext).map_or(ext, String::as_str);
        Self::from_extension(effective)
    }

    /// Editor-style language identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::C => "C",
            Self::Cpp => "C++",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(SourceLanguage::from_extension("c"), Some(SourceLanguage::C));
        assert_eq!(SourceLanguage::from_extension("h"), Some(SourceLanguage::C));
        assert_eq!(SourceLanguage::from_extension("cpp"), Some(SourceLanguage::Cpp));
        assert_eq!(SourceLanguage::from_extension("HPP"), Some(SourceLanguage::Cpp));
        assert_eq!(SourceLanguage::from_extension("c++"), Some(SourceLanguage::Cpp));
        assert_eq!(SourceLanguage::from_extension("rs"), None);
        assert_eq!(SourceLanguage::from_extension(""), None);
    }

    #[test]
    fn test_from_path_with_mapping() {
        let mut map = HashMap::new();
        map.insert("cu".to_string(), "cpp".to_string());
        map.insert("h".to_string(), "txt".to_string());

        assert_eq!(
            SourceLanguage::from_path(Path::new("kernels/add.cu"), &map),
            Some(SourceLanguage::Cpp)
        );
        assert_eq!(SourceLanguage::from_path(Path::new("legacy.h"), &map), None);
        assert_eq!(SourceLanguage::from_path(Path::new("Makefile"), &map), None);
    }

    #[test]
    fn test_id_and_display() {
        assert_eq!(SourceLanguage::Cpp.id(), "cpp");
        assert_eq!(SourceLanguage::C.to_string(), "C");
        assert_eq!(SourceLanguage::Cpp.to_string(), "C++");
    }
}
