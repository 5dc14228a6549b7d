//! Archive categories
//!
//! The archive groups tags into three coarse folders. Membership is an exact
//! match of any record tag against the folder's fixed keyword set, so a tag
//! such as `"street art"` belongs to `art` while `"artwork"` belongs nowhere.

use super::FilterError;
use crate::catalog::ImageRecord;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the three archive folders
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveCategory {
    Nature,
    Art,
    Architecture,
}

impl ArchiveCategory {
    /// Every category in menu order
    pub const ALL: [Self; 3] = [Self::Nature, Self::Art, Self::Architecture];

    /// Lowercase identifier, also the folder's own tag
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Art => "art",
            Self::Architecture => "architecture",
        }
    }

    /// Capitalized name for menus
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nature => "Nature",
            Self::Art => "Art",
            Self::Architecture => "Architecture",
        }
    }

    /// Tags that place an image in this category
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Nature => &[
                "nature",
                "mountains",
                "forest",
                "ocean",
                "trees",
                "water",
                "landscape",
            ],
            Self::Art => &[
                "art",
                "abstract",
                "geometric",
                "street art",
                "graffiti",
                "colorful",
            ],
            Self::Architecture => &["architecture", "minimalist", "modern", "design", "urban"],
        }
    }

    #[must_use]
    pub fn contains_tag(self, tag: &str) -> bool {
        self.keywords().contains(&tag)
    }

    /// Whether any of the record's tags is one of this category's keywords
    #[must_use]
    pub fn matches(self, record: &ImageRecord) -> bool {
        record.tags.iter().any(|tag| self.contains_tag(tag))
    }

    /// The folder's entries from a tag index, keeping the index order
    #[must_use]
    pub fn related_tags<'a>(self, all_tags: &'a [String]) -> Vec<&'a str> {
        all_tags
            .iter()
            .map(String::as_str)
            .filter(|tag| self.contains_tag(tag))
            .collect()
    }
}

impl fmt::Display for ArchiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArchiveCategory {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.name() == wanted)
            .ok_or_else(|| FilterError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let artwork = ImageRecord::new("x", "x.jpg", "X", &["artwork", "smart"]);
        assert!(!ArchiveCategory::Art.matches(&artwork));

        let street = ImageRecord::new("y", "y.jpg", "Y", &["street art"]);
        assert!(ArchiveCategory::Art.matches(&street));
    }

    #[test]
    fn test_any_keyword_qualifies() {
        let record = ImageRecord::new("z", "z.jpg", "Z", &["snow", "urban"]);
        assert!(ArchiveCategory::Architecture.matches(&record));
        assert!(!ArchiveCategory::Nature.matches(&record));
    }

    #[test]
    fn test_related_tags() {
        let tags: Vec<String> = ["abstract", "design", "landscape", "snow", "urban"]
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(ArchiveCategory::Architecture.related_tags(&tags), vec!["design", "urban"]);
        assert_eq!(ArchiveCategory::Nature.related_tags(&tags), vec!["landscape"]);
        assert_eq!(ArchiveCategory::Art.related_tags(&tags), vec!["abstract"]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("nature".parse::<ArchiveCategory>(), Ok(ArchiveCategory::Nature));
        assert_eq!(" Architecture ".parse::<ArchiveCategory>(), Ok(ArchiveCategory::Architecture));
        assert_eq!(
            "sculpture".parse::<ArchiveCategory>(),
            Err(FilterError::UnknownCategory("sculpture".into()))
        );
    }

    #[test]
    fn test_display_is_name() {
        for category in ArchiveCategory::ALL {
            assert_eq!(category.to_string(), category.name());
            assert!(category.contains_tag(category.name()));
        }
    }
}
