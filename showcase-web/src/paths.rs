//! Deployment base path handling.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/showcase` for GitHub Pages),
/// the router is mounted under it. Local builds fall back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else if base.starts_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("/{base}"))
    }
}

#[cfg(test)]
mod tests {
    use super::router_base_with_base;

    #[test]
    fn empty_base_means_root() {
        assert_eq!(router_base_with_base(""), None);
        assert_eq!(router_base_with_base("/"), None);
    }

    #[test]
    fn base_is_trimmed_and_anchored() {
        assert_eq!(
            router_base_with_base("/showcase/"),
            Some(String::from("/showcase"))
        );
        assert_eq!(
            router_base_with_base("showcase"),
            Some(String::from("/showcase"))
        );
    }
}
