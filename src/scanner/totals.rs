use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

use super::category::{extension_key, Category};

/// Bytes per [`Category`], indexed by the category itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals([u64; Category::COUNT]);

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: Category, bytes: u64) {
        self.0[category.index()] += bytes;
    }

    pub fn get(&self, category: Category) -> u64 {
        self.0[category.index()]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn merge(&mut self, other: &CategoryTotals) {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            *mine += theirs;
        }
    }

    /// All categories in report order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    pub fn non_zero(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        self.iter().filter(|(_, bytes)| *bytes > 0)
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, bytes) in self.iter() {
            map.serialize_entry(category.as_str(), &bytes)?;
        }
        map.end()
    }
}

/// Bytes per lowercase extension key ("" for extensionless files).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtensionTotals(BTreeMap<String, u64>);

impl ExtensionTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ext: &str, bytes: u64) {
        match self.0.get_mut(ext) {
            Some(total) => *total += bytes,
            None => {
                self.0.insert(ext.to_string(), bytes);
            }
        }
    }

    pub fn get(&self, ext: &str) -> Option<u64> {
        self.0.get(ext).copied()
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn merge(&mut self, other: &ExtensionTotals) {
        for (ext, bytes) in &other.0 {
            self.add(ext, *bytes);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(ext, bytes)| (ext.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Running totals of a directory whose subtree is still being walked.
#[derive(Debug, Clone, Default)]
pub struct DirStats {
    pub size: u64,
    pub categories: CategoryTotals,
    pub extensions: ExtensionTotals,
}

impl DirStats {
    /// Account a direct file of this directory.
    pub fn add_file(&mut self, file_name: &str, size: u64) {
        let ext = extension_key(file_name);
        self.size += size;
        self.categories.add(Category::from_extension(&ext), size);
        self.extensions.add(&ext, size);
    }

    /// Fold a finished subdirectory into this one.
    pub fn merge(&mut self, child: &DirStats) {
        self.size += child.size;
        self.categories.merge(&child.categories);
        self.extensions.merge(&child.extensions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_totals_add_and_total() {
        let mut totals = CategoryTotals::new();
        totals.add(Category::Video, 100);
        totals.add(Category::Video, 50);
        totals.add(Category::Doc, 7);

        assert_eq!(totals.get(Category::Video), 150);
        assert_eq!(totals.get(Category::Audio), 0);
        assert_eq!(totals.total(), 157);
    }

    #[test]
    fn test_non_zero_keeps_report_order() {
        let mut totals = CategoryTotals::new();
        totals.add(Category::Other, 1);
        totals.add(Category::Video, 2);

        let cats: Vec<_> = totals.non_zero().map(|(c, _)| c).collect();
        assert_eq!(cats, vec![Category::Video, Category::Other]);
    }

    #[test]
    fn test_extension_merge_creates_missing_keys() {
        let mut parent = ExtensionTotals::new();
        parent.add(".txt", 10);

        let mut child = ExtensionTotals::new();
        child.add(".txt", 5);
        child.add(".mp4", 20);

        parent.merge(&child);
        assert_eq!(parent.get(".txt"), Some(15));
        assert_eq!(parent.get(".mp4"), Some(20));
        assert_eq!(parent.len(), 2);
        assert_eq!(parent.total(), 35);
    }

    #[test]
    fn test_zero_byte_file_still_gets_a_key() {
        let mut stats = DirStats::default();
        stats.add_file("empty.srt", 0);

        assert_eq!(stats.size, 0);
        assert_eq!(stats.extensions.get(".srt"), Some(0));
        assert_eq!(stats.categories.get(Category::Sub), 0);
    }

    #[test]
    fn test_extensionless_file_is_other() {
        let mut stats = DirStats::default();
        stats.add_file("README", 500);

        assert_eq!(stats.categories.get(Category::Other), 500);
        assert_eq!(stats.extensions.get(""), Some(500));
    }

    #[test]
    fn test_merge_keeps_totals_consistent() {
        let mut parent = DirStats::default();
        parent.add_file("a.mp4", 1000);

        let mut child = DirStats::default();
        child.add_file("b.txt", 200);
        child.add_file("c", 30);

        parent.merge(&child);
        assert_eq!(parent.size, 1230);
        assert_eq!(parent.categories.total(), parent.size);
        assert_eq!(parent.extensions.total(), parent.size);
    }

    #[test]
    fn test_category_totals_serialize_as_map() {
        let mut totals = CategoryTotals::new();
        totals.add(Category::Image, 3);
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["image"], 3);
        assert_eq!(json["other"], 0);
    }

    #[test]
    fn test_extension_totals_serialize_as_plain_map() {
        let mut extensions = ExtensionTotals::new();
        extensions.add(".mp4", 10);
        extensions.add("", 5);
        let json = serde_json::to_value(&extensions).unwrap();
        assert_eq!(json, serde_json::json!({ "": 5, ".mp4": 10 }));
    }
}
