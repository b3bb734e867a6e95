//! Recent-conversation list and the headline swap it triggers.
use crate::constants::HEADLINE_RESTORE_MS;

/// Temporary headline shown after picking a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineSwap {
    pub shown: String,
    pub restore: String,
    pub restore_after_ms: u32,
}

impl HeadlineSwap {
    pub const DIMMED_OPACITY: &'static str = "0.5";
    pub const RESTORED_OPACITY: &'static str = "1";
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversationHistory {
    pub titles: Vec<String>,
    pub active: Option<usize>,
}

impl ConversationHistory {
    #[must_use]
    pub fn new(titles: Vec<String>) -> Self {
        Self {
            titles,
            active: None,
        }
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Mark `index` active and describe the headline swap. Out-of-range
    /// indices leave the history untouched and return `None`.
    pub fn select(&mut self, index: usize, current_headline: &str) -> Option<HeadlineSwap> {
        let title = self.titles.get(index)?.trim().to_string();
        self.active = Some(index);
        Some(HeadlineSwap {
            shown: title,
            restore: current_headline.to_string(),
            restore_after_ms: HEADLINE_RESTORE_MS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> ConversationHistory {
        ConversationHistory::new(vec![" Trip ideas ".into(), "Rust lifetimes".into()])
    }

    #[test]
    fn select_marks_single_active_entry() {
        let mut h = history();
        let swap = h.select(1, "Hello").unwrap();
        assert_eq!(swap.shown, "Rust lifetimes");
        assert_eq!(swap.restore, "Hello");
        assert_eq!(swap.restore_after_ms, 300);
        assert!(h.is_active(1));

        h.select(0, "Hello").unwrap();
        assert!(h.is_active(0));
        assert!(!h.is_active(1));
    }

    #[test]
    fn titles_are_trimmed_in_swap() {
        let mut h = history();
        assert_eq!(h.select(0, "Hi").unwrap().shown, "Trip ideas");
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut h = history();
        h.select(0, "Hi");
        assert!(h.select(9, "Hi").is_none());
        assert!(h.is_active(0));
    }
}
