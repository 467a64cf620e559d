//! Portfolio content model.
//!
//! Pure serde data: menu items carry `target` section ids, stats carry
//! string targets, gallery items carry categories, anchors name
//! headings inside a section body. Layout-dependent data (anchor row
//! bounds) is computed at render time, not stored here.

use serde::Deserialize;

/// A complete portfolio document.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub footer: String,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
}

impl Portfolio {
    /// Index of the section with the given id.
    #[must_use]
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.section_index(id).map(|i| &self.sections[i])
    }
}

/// One tile in the menu grid. Order determines stagger timing.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub label: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub glyph: String,
    /// Id of the section this tile opens.
    pub target: String,
}

/// A content section.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// The landing section triggers the stat counters on entry.
    #[serde(default)]
    pub landing: bool,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
    #[serde(default, rename = "anchor")]
    pub anchors: Vec<Anchor>,
    #[serde(default, rename = "stat")]
    pub stats: Vec<Stat>,
    #[serde(default, rename = "tab")]
    pub tabs: Vec<TabPane>,
    #[serde(default, rename = "item")]
    pub gallery: Vec<GalleryItem>,
}

/// A named position inside a section body, matched against a heading
/// with the same text. Anchors are assumed ordered and non-overlapping.
#[derive(Debug, Clone, Deserialize)]
pub struct Anchor {
    pub id: String,
    pub label: String,
}

/// An animated numeric counter.
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub label: String,
    /// Target value as written in the document. Unparseable targets are
    /// skipped silently; the stat then renders as plain text.
    pub target: String,
}

impl Stat {
    #[must_use]
    pub fn parsed_target(&self) -> Option<u64> {
        self.target.trim().parse().ok()
    }
}

/// One button/pane pair in a section's tab group.
#[derive(Debug, Clone, Deserialize)]
pub struct TabPane {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub body: String,
}

/// One category-tagged gallery card.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub blurb: String,
}
