use crate::api::{LinkConfigItem, LinkMap};

pub const GENERIC_LINK_ICON: &str = "🔗";

pub fn link_icon(key: &str) -> &'static str {
    match key {
        "attendance_url" => "👥",
        "project_report_url" => "📋",
        "timesheet_url" => "⏰",
        "policy_hub_url" => "📚",
        "inventory_url" => "📦",
        "petty_cash_url" => "💰",
        "salary_advance_url" => "💵",
        "approved_pr_url" => "✅",
        _ => GENERIC_LINK_ICON,
    }
}

fn shaped(config: &[LinkConfigItem], source: &LinkMap) -> LinkMap {
    config
        .iter()
        .map(|item| {
            let url = source.get(&item.key).cloned().unwrap_or_default();
            (item.key.clone(), url)
        })
        .collect()
}

/// One employee's link set being edited. `saved` mirrors the backend, `current`
/// holds the form; the draft is dirty while they differ.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinksDraft {
    saved: LinkMap,
    current: LinkMap,
}

impl LinksDraft {
    /// Every configured key, all blank.
    pub fn empty(config: &[LinkConfigItem]) -> Self {
        Self::loaded(config, &LinkMap::new())
    }

    /// Shapes a fetched map to the configured keys; unknown keys are dropped
    /// and missing ones start blank.
    pub fn loaded(config: &[LinkConfigItem], fetched: &LinkMap) -> Self {
        let saved = shaped(config, fetched);
        Self {
            current: saved.clone(),
            saved,
        }
    }

    pub fn value(&self, key: &str) -> String {
        self.current.get(key).cloned().unwrap_or_default()
    }

    pub fn values(&self) -> &LinkMap {
        &self.current
    }

    pub fn set(&mut self, key: &str, url: String) {
        if let Some(slot) = self.current.get_mut(key) {
            *slot = url;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.saved != self.current
    }

    pub fn is_key_dirty(&self, key: &str) -> bool {
        self.saved.get(key) != self.current.get(key)
    }

    /// Drops the unsaved edit of one key.
    pub fn revert_key(&mut self, key: &str) {
        if let Some(saved) = self.saved.get(key).cloned() {
            self.current.insert(key.to_string(), saved);
        }
    }

    /// Records a successful single-key save; other pending edits stay.
    pub fn key_saved(&mut self, key: &str, url: &str) {
        if self.saved.contains_key(key) {
            self.saved.insert(key.to_string(), url.to_string());
            self.current.insert(key.to_string(), url.to_string());
        }
    }

    pub fn all_saved(&mut self) {
        self.saved = self.current.clone();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickLink {
    pub key: String,
    pub name: String,
    pub url: String,
    pub icon: &'static str,
}

/// Links an employee can open: configured keys with a non-blank URL, in
/// config order.
pub fn visible_quick_links(config: &[LinkConfigItem], links: &LinkMap) -> Vec<QuickLink> {
    config
        .iter()
        .filter_map(|item| {
            let url = links.get(&item.key)?.trim();
            (!url.is_empty()).then(|| QuickLink {
                key: item.key.clone(),
                name: item.name.clone(),
                url: url.to_string(),
                icon: link_icon(&item.key),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Vec<LinkConfigItem> {
        [
            ("timesheet_url", "Timesheet"),
            ("attendance_url", "Attendance Sheet"),
            ("custom_url", "Custom"),
        ]
        .iter()
        .map(|(key, name)| LinkConfigItem {
            key: key.to_string(),
            name: name.to_string(),
        })
        .collect()
    }

    fn map(pairs: &[(&str, &str)]) -> LinkMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn loaded_draft_has_exactly_the_configured_keys() {
        let draft = LinksDraft::loaded(
            &config(),
            &map(&[("timesheet_url", "https://t"), ("stale_url", "https://old")]),
        );
        let keys: Vec<_> = draft.values().keys().cloned().collect();
        assert_eq!(keys, vec!["attendance_url", "custom_url", "timesheet_url"]);
        assert_eq!(draft.value("timesheet_url"), "https://t");
        assert_eq!(draft.value("attendance_url"), "");
        assert!(!draft.is_dirty());
    }

    #[test]
    fn edits_mark_dirty_until_saved() {
        let mut draft = LinksDraft::empty(&config());
        draft.set("custom_url", "https://c".into());
        assert!(draft.is_dirty());
        assert!(draft.is_key_dirty("custom_url"));
        draft.all_saved();
        assert!(!draft.is_dirty());
    }

    #[test]
    fn single_key_save_keeps_other_edits_pending() {
        let mut draft = LinksDraft::empty(&config());
        draft.set("custom_url", "https://c".into());
        draft.set("timesheet_url", "https://t".into());

        draft.key_saved("timesheet_url", "https://t");

        assert!(!draft.is_key_dirty("timesheet_url"));
        assert!(draft.is_key_dirty("custom_url"));
        assert!(draft.is_dirty());
    }

    #[test]
    fn revert_restores_the_saved_value() {
        let mut draft = LinksDraft::loaded(&config(), &map(&[("timesheet_url", "https://t")]));
        draft.set("timesheet_url", "https://typo".into());
        draft.revert_key("timesheet_url");
        assert_eq!(draft.value("timesheet_url"), "https://t");
        assert!(!draft.is_dirty());
    }

    #[test]
    fn clearing_blanks_every_configured_key() {
        let cleared = LinksDraft::empty(&config());
        assert!(cleared.values().values().all(String::is_empty));
        assert_eq!(cleared.values().len(), config().len());
    }

    #[test]
    fn unknown_keys_are_ignored_by_set() {
        let mut draft = LinksDraft::empty(&config());
        draft.set("nope", "https://x".into());
        assert!(!draft.is_dirty());
    }

    #[test]
    fn quick_links_skip_blank_urls_and_follow_config_order() {
        let links = map(&[
            ("attendance_url", "https://a"),
            ("timesheet_url", "https://t"),
            ("custom_url", "  "),
        ]);
        let visible = visible_quick_links(&config(), &links);
        let keys: Vec<_> = visible.iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["timesheet_url", "attendance_url"]);
        assert_eq!(visible[0].icon, "⏰");
        assert_eq!(link_icon("custom_url"), GENERIC_LINK_ICON);
    }
}
