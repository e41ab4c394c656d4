use super::*;

#[test]
fn star_input_passes_through() {
    assert_eq!(normalize_quality("★★★☆"), "★★★☆");
    assert_eq!(normalize_quality("  ★★  "), "★★");
    assert_eq!(normalize_quality("☆☆☆☆"), "☆☆☆☆");
}

#[test]
fn synonyms_are_case_insensitive() {
    assert_eq!(normalize_quality("POOR"), "★☆☆☆");
    assert_eq!(normalize_quality("Good"), "★★☆☆");
    assert_eq!(normalize_quality(" excellent "), "★★★☆");
    assert_eq!(normalize_quality("mint"), "★★★★");
    assert_eq!(normalize_quality("damaged"), "☆☆☆☆");
}

#[test]
fn scores_zero_and_one_share_lowest_tier() {
    assert_eq!(normalize_quality("0"), normalize_quality("1"));
    assert_eq!(normalize_quality("0"), DEFAULT_QUALITY.stars());
    assert_eq!(normalize_quality("3"), "★★★☆");
    assert_eq!(normalize_quality("4"), "★★★★");
}

#[test]
fn out_of_range_and_garbage_fall_back() {
    for input in ["5", "-1", "", "3.5", "shiny", "four stars"] {
        assert_eq!(normalize_quality(input), DEFAULT_QUALITY.stars(), "{input:?}");
    }
}

#[test]
fn star_free_input_always_lands_on_a_tier() {
    let inputs = [
        "0", "1", "2", "3", "4", "99", "poor", "good", "mint", "x", "", "   ", "🔥",
    ];
    for input in inputs {
        let out = normalize_quality(input);
        assert!(QualityTier::from_stars(&out).is_some(), "{input:?} -> {out:?}");
    }
}

#[test]
fn normalization_is_idempotent() {
    for tier in QualityTier::ALL {
        assert_eq!(normalize_quality(tier.stars()), tier.stars());
    }
}
