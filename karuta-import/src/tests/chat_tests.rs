use super::*;

#[test]
fn compact_line_with_tag() {
    let card = parse_chat_line("🔥k1a2·★★★·#50·◈2·Re:Zero·Rem").unwrap();
    assert_eq!(card.code, "k1a2");
    assert_eq!(card.name, "Rem");
    assert_eq!(card.series, "Re:Zero");
    assert_eq!(card.edition, 2);
    assert_eq!(card.print, 50);
    assert_eq!(card.number, 50);
    assert_eq!(card.quality, "★★★");
    assert_eq!(card.tag, "🔥");
}

#[test]
fn discord_markdown_is_stripped() {
    let card = parse_chat_line("❤️ `v6n8` · `★★★☆` · `#124` · `◈4` · Re:Zero · **Rem**").unwrap();
    assert_eq!(card.code, "v6n8");
    assert_eq!(card.quality, "★★★☆");
    assert_eq!(card.print, 124);
    assert_eq!(card.edition, 4);
    assert_eq!(card.name, "Rem");
    assert_eq!(card.tag, "❤️");
}

#[test]
fn neutral_glyph_means_untagged() {
    for line in ["▪ `abc1` · `★☆☆☆` · `#9` · `◈1` · Naruto · **Sakura**", "▪️abc1·★·#9·◈1·Naruto·Sakura"] {
        let card = parse_chat_line(line).unwrap();
        assert_eq!(card.tag, "", "{line}");
        assert_eq!(card.code, "abc1");
    }
}

#[test]
fn untagged_line_without_emoji() {
    let card = parse_chat_line("abc1 · ★★☆☆ · #9 · ◊3 · Naruto · Sakura Haruno").unwrap();
    assert_eq!(card.tag, "");
    assert_eq!(card.edition, 3);
    assert_eq!(card.name, "Sakura Haruno");
}

#[test]
fn period_separated_line() {
    let card = parse_chat_line("abc1.★★☆☆.#9.⧫5.Naruto.Sakura").unwrap();
    assert_eq!(card.edition, 5);
    assert_eq!(card.series, "Naruto");
}

#[test]
fn extra_tokens_join_into_the_name() {
    let card = parse_chat_line("abc1.★★☆☆.#9.1.Series.Jr.Name").unwrap();
    assert_eq!(card.name, "Jr Name");
}

#[test]
fn code_is_reduced_to_alphanumerics() {
    let card = parse_chat_line("`K1-A2!` · ★ · #1 · ◈1 · S · N").unwrap();
    assert_eq!(card.code, "k1a2");
}

#[test]
fn bad_numbers_fall_back() {
    let card = parse_chat_line("abc1 · mint · #?? · ◈ · S · N").unwrap();
    assert_eq!(card.print, 0);
    assert_eq!(card.edition, 1);
    assert_eq!(card.quality, "★★★★");
}

#[test]
fn short_lines_yield_nothing() {
    assert!(parse_chat_line("").is_none());
    assert!(parse_chat_line("🔥").is_none());
    assert!(parse_chat_line("abc1 · ★ · #1 · ◈1 · Series").is_none());
    assert!(parse_chat_line("· · · · · ·").is_none());
    assert!(parse_chat_line("ab · ★ · #1 · ◈1 · S · N").is_none());
}

#[test]
fn paste_skips_noise() {
    let text = "\
Cards carried by @someone

🔥 `k1a2` · `★★★☆` · `#50` · `◈2` · Re:Zero · **Rem**
not a card line
▪ `abc1` · `★☆☆☆` · `#9` · `◈1` · Naruto · **Sakura**
Showing cards 1-2 of 2
";
    let cards = parse_chat_paste(text);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].tag, "🔥");
    assert_eq!(cards[1].code, "abc1");
}

#[test]
fn pictograph_detection() {
    assert!(is_pictographic("🔥"));
    assert!(is_pictographic("❤️"));
    assert!(is_pictographic("▪"));
    assert!(is_pictographic("1\u{FE0F}\u{20E3}"));
    assert!(!is_pictographic("a"));
    assert!(!is_pictographic("`"));
    assert!(!is_pictographic("日"));
}
