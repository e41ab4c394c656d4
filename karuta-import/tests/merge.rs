use karuta_catalog::{Card, PLACEHOLDER_IMAGE};
use karuta_import::*;

fn card(code: &str, quality: &str, print: u64, image: &str) -> Card {
    let mut card = Card::new(code, "Rem", "Re:Zero");
    card.quality = quality.into();
    card.set_print(print);
    card.image_url = image.into();
    card
}

#[test]
fn merge_example_keeps_image_and_counts_update() {
    let existing = vec![card("k1a2", "★★", 10, "X")];
    let incoming = vec![card("k1a2", "★★★", 10, "")];

    let outcome = merge(&existing, &incoming, MergeMode::Merge);
    assert_eq!(
        outcome.stats,
        MergeStats { added: 0, updated: 1, unchanged: 0, removed: 0 }
    );
    assert_eq!(outcome.collection.len(), 1);
    assert_eq!(outcome.collection[0].image_url, "X");
    assert_eq!(outcome.collection[0].quality, "★★★");
    assert!(outcome.added.is_empty());
}

#[test]
fn merge_never_drops_cards() {
    let existing = vec![card("aaa", "★", 1, ""), card("bbb", "★", 2, "")];
    let incoming = vec![card("ccc", "★", 3, "")];
    let outcome = merge(&existing, &incoming, MergeMode::Merge);
    assert_eq!(outcome.collection.len(), 3);
    assert_eq!(outcome.stats.removed, 2);
    assert_eq!(outcome.stats.added, 1);
    assert_eq!(outcome.added[0].code, "ccc");
}

#[test]
fn replace_discards_missing_cards_and_assigns_placeholders() {
    let existing = vec![card("aaa", "★", 1, "A")];
    let incoming = vec![card("bbb", "★", 2, ""), card("ccc", "★", 3, "C")];
    let outcome = merge(&existing, &incoming, MergeMode::Replace);

    let codes: Vec<&str> = outcome.collection.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["bbb", "ccc"]);
    assert_eq!(outcome.collection[0].image_url, PLACEHOLDER_IMAGE);
    assert_eq!(outcome.collection[1].image_url, "C");
    assert_eq!(outcome.stats, MergeStats { added: 2, ..MergeStats::default() });
}

#[test]
fn merging_a_collection_into_itself_changes_nothing() {
    let cards = vec![card("aaa", "★", 1, "A"), card("bbb", "★★", 2, "")];
    let outcome = merge(&cards, &cards, MergeMode::Merge);
    assert_eq!(outcome.collection, cards);
    assert_eq!(outcome.stats.unchanged, 2);
    assert_eq!(outcome.stats.added + outcome.stats.updated + outcome.stats.removed, 0);
}

#[test]
fn mode_parses() {
    assert_eq!("Replace".parse::<MergeMode>().unwrap(), MergeMode::Replace);
    assert_eq!("merge".parse::<MergeMode>().unwrap(), MergeMode::Merge);
    assert!("append".parse::<MergeMode>().is_err());
    assert_eq!(MergeMode::default(), MergeMode::Merge);
}

#[test]
fn stats_display() {
    let stats = MergeStats { added: 3, updated: 1, unchanged: 5, removed: 2 };
    assert_eq!(stats.to_string(), "+3 added, ~1 updated, 5 unchanged, -2 not in batch");
}
