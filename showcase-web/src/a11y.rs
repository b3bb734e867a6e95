// Accessibility helpers

/// CSS for visible focus rings and the screen-reader-only utility class.
///
/// Injected once by the app shell so both pages share it.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #1a73e8;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Live-region text announcing how many gallery cards are showing.
#[must_use]
pub fn results_status(visible: usize, total: usize) -> String {
    match (visible, total) {
        (_, 0) => "No projects to show".to_string(),
        (0, _) => "No projects match your search".to_string(),
        (v, t) if v == t => format!("Showing all {t} projects"),
        (v, t) => format!("Showing {v} of {t} projects"),
    }
}

#[cfg(test)]
mod tests {
    use super::results_status;

    #[test]
    fn status_reads_naturally() {
        assert_eq!(results_status(0, 0), "No projects to show");
        assert_eq!(results_status(0, 4), "No projects match your search");
        assert_eq!(results_status(4, 4), "Showing all 4 projects");
        assert_eq!(results_status(1, 4), "Showing 1 of 4 projects");
    }
}
