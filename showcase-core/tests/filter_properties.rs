use showcase_core::constants::CATEGORY_ALL;
use showcase_core::{
    Card, CardCatalog, FilterState, compute_visibility, matches_filter, matches_search,
};

fn assorted_cards() -> Vec<Card> {
    vec![
        Card::new("Portfolio", "Hand-built personal site")
            .with_category("web")
            .with_technologies("HTML,CSS"),
        Card::new("Chatbot", "Answers support questions")
            .with_category("ai")
            .with_technologies("Python"),
        Card::new("Storefront", "React shop")
            .with_category("web")
            .with_technologies("react, node"),
        Card::new("Moodboard", "foo studies")
            .with_category("dev")
            .with_technologies(""),
        Card::new("Untagged", "no category at all"),
    ]
}

#[test]
fn empty_query_never_excludes() {
    for card in assorted_cards() {
        assert!(matches_search(&card, ""), "{} should match empty query", card.title);
    }
}

#[test]
fn all_category_never_excludes() {
    for card in assorted_cards() {
        assert!(matches_filter(&card, CATEGORY_ALL), "{} should pass 'all'", card.title);
    }
}

#[test]
fn uppercase_query_matches_lowercase_technologies() {
    let cards = vec![Card::new("Shop", "").with_technologies("react, node")];
    let state = FilterState::new("REACT", CATEGORY_ALL);
    assert_eq!(compute_visibility(&cards, &state), vec![true]);
}

#[test]
fn query_and_category_compose() {
    let cards = vec![Card::new("Moodboard", "foo studies").with_category("dev")];
    let state = FilterState::new("foo", "design");
    assert_eq!(compute_visibility(&cards, &state), vec![false]);
    assert_eq!(
        compute_visibility(&cards, &state.with_category("dev")),
        vec![true]
    );
}

#[test]
fn recomputation_is_idempotent() {
    let cards = assorted_cards();
    let state = FilterState::new("  o ", "web");
    let first = compute_visibility(&cards, &state);
    let second = compute_visibility(&cards, &state);
    assert_eq!(first, second);
    assert_eq!(first.len(), cards.len());
}

#[test]
fn chat_scenario_across_category_change() {
    let cards = vec![
        Card::new("Portfolio", "")
            .with_category("web")
            .with_technologies("HTML,CSS"),
        Card::new("Chatbot", "")
            .with_category("ai")
            .with_technologies("Python"),
    ];
    let typed = FilterState::default().with_query("chat");
    assert_eq!(compute_visibility(&cards, &typed), vec![false, true]);

    let narrowed = typed.with_category("web");
    assert_eq!(narrowed.query, "chat");
    assert_eq!(compute_visibility(&cards, &narrowed), vec![false, false]);
}

#[test]
fn category_tag_is_not_searched_text() {
    let cards = assorted_cards();
    let visibility = compute_visibility(&cards, &FilterState::new("web", "web"));
    assert_eq!(visibility.len(), cards.len());
    assert_eq!(visibility, vec![false, false, false, false, false]);
}

#[test]
fn bundled_style_catalog_filters_end_to_end() -> anyhow::Result<()> {
    let json = r#"{
        "cards": [
            {"title": "Portfolio", "body": "Static site", "category": "web", "technologies": "HTML,CSS"},
            {"title": "Chatbot", "body": "Support helper", "category": "ai", "tecnologias": "Python"},
            {"title": "Sketches", "body": "Loose drawings"}
        ]
    }"#;
    let catalog = CardCatalog::from_json(json)?;
    let values: Vec<_> = catalog.filters.iter().map(|f| f.value.clone()).collect();
    assert_eq!(values, ["all", "web", "ai"]);

    let state = FilterState::new("python", CATEGORY_ALL);
    assert_eq!(
        compute_visibility(&catalog.cards, &state),
        vec![false, true, false]
    );
    let state = FilterState::new("", "ai");
    assert_eq!(
        compute_visibility(&catalog.cards, &state),
        vec![false, true, false]
    );
    Ok(())
}
