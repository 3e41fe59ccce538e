use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::entities::{EntryId, IdSequence, SkillTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options offered by the skill picker.
pub const SKILL_CATALOG: &[SkillOption] = &[
    SkillOption { value: "html", label: "HTML" },
    SkillOption { value: "css", label: "CSS" },
    SkillOption { value: "javascript", label: "JavaScript" },
    SkillOption { value: "python", label: "Python" },
    SkillOption { value: "react", label: "React" },
    SkillOption { value: "nodejs", label: "Node.js" },
    SkillOption { value: "php", label: "PHP" },
    SkillOption { value: "java", label: "Java" },
];

pub fn catalog_label(value: &str) -> Option<&'static str> {
    SKILL_CATALOG
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

/// Skills keyed by canonical value, kept in the order they were picked.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    by_id: BTreeMap<EntryId, SkillTag>,
    by_value: HashMap<String, EntryId>,
}

impl SkillSet {
    /// Adds a skill unless the value is empty or already present. A missing
    /// label comes from the catalogue, then falls back to the value.
    pub fn add(
        &mut self,
        ids: &mut IdSequence,
        value: &str,
        label: Option<&str>,
    ) -> Option<&SkillTag> {
        if value.is_empty() || self.by_value.contains_key(value) {
            return None;
        }

        let label = label
            .filter(|label| !label.is_empty())
            .or_else(|| catalog_label(value))
            .unwrap_or(value)
            .to_string();
        let id = ids.next_id();

        self.by_value.insert(value.to_string(), id);
        self.by_id.insert(
            id,
            SkillTag {
                id,
                value: value.to_string(),
                label,
            },
        );
        self.by_id.get(&id)
    }

    pub fn remove(&mut self, id: EntryId) -> Option<SkillTag> {
        let removed = self.by_id.remove(&id)?;
        self.by_value.remove(&removed.value);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillTag> {
        self.by_id.values()
    }
}
