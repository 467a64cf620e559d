//! Tab switching.
//!
//! Stateless with respect to the transition machine: tab toggles never
//! consult the lock and are idempotent.

use vitrine_types::Section;

/// Active tab per section, keyed by section index.
#[derive(Debug, Clone, Default)]
pub struct TabState {
    active: Vec<Option<String>>,
}

impl TabState {
    /// Build defaults: each section with tabs starts on its first pane.
    #[must_use]
    pub fn for_sections(sections: &[Section]) -> Self {
        Self {
            active: sections
                .iter()
                .map(|section| section.tabs.first().map(|pane| pane.id.clone()))
                .collect(),
        }
    }

    #[must_use]
    pub fn active(&self, section_idx: usize) -> Option<&str> {
        self.active.get(section_idx)?.as_deref()
    }

    /// Move the active marker. Unknown section or pane ids leave the
    /// state unchanged; re-selecting the active pane is a no-op.
    pub fn switch(&mut self, sections: &[Section], section_idx: usize, tab_id: &str) {
        let Some(section) = sections.get(section_idx) else {
            return;
        };
        if !section.tabs.iter().any(|pane| pane.id == tab_id) {
            return;
        }
        if let Some(slot) = self.active.get_mut(section_idx) {
            *slot = Some(tab_id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TabState;
    use vitrine_types::Portfolio;

    fn sections() -> Portfolio {
        toml::from_str(
            r#"
title = "t"

[[section]]
id = "about"
title = "About"

[[section.tab]]
id = "skills"
label = "Skills"

[[section.tab]]
id = "experience"
label = "Experience"
"#,
        )
        .expect("content should parse")
    }

    #[test]
    fn defaults_to_first_pane() {
        let content = sections();
        let tabs = TabState::for_sections(&content.sections);
        assert_eq!(tabs.active(0), Some("skills"));
    }

    #[test]
    fn switch_moves_active_marker() {
        let content = sections();
        let mut tabs = TabState::for_sections(&content.sections);
        tabs.switch(&content.sections, 0, "experience");
        assert_eq!(tabs.active(0), Some("experience"));
    }

    #[test]
    fn switch_is_idempotent() {
        let content = sections();
        let mut tabs = TabState::for_sections(&content.sections);
        tabs.switch(&content.sections, 0, "skills");
        assert_eq!(tabs.active(0), Some("skills"));
        tabs.switch(&content.sections, 0, "skills");
        assert_eq!(tabs.active(0), Some("skills"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let content = sections();
        let mut tabs = TabState::for_sections(&content.sections);
        tabs.switch(&content.sections, 0, "missing");
        assert_eq!(tabs.active(0), Some("skills"));
        tabs.switch(&content.sections, 9, "skills");
        assert_eq!(tabs.active(0), Some("skills"));
    }
}
