use super::*;

#[test]
fn tokenizer_keeps_empty_fields() {
    assert_eq!(tokenize_line("a,,c"), ["a", "", "c"]);
    assert_eq!(tokenize_line("a,b,"), ["a", "b", ""]);
    assert_eq!(tokenize_line(""), [""]);
}

#[test]
fn tokenizer_prefers_tabs() {
    assert_eq!(tokenize_line("a,b\tc"), ["a,b", "c"]);
}

#[test]
fn tokenizer_handles_quotes() {
    assert_eq!(tokenize_line(r#""Re:Zero, Season 2",Rem"#), ["Re:Zero, Season 2", "Rem"]);
    assert_eq!(tokenize_line(r#""""quoted""""#), [r#""quoted""#]);
    assert_eq!(tokenize_line(r#"O"Brien,x"#), [r#"O"Brien"#, "x"]);
}

#[test]
fn karuta_export_parses() {
    let text = "\
code,number,edition,character,series,quality,obtainedTimestamp,burnValue,tag,frame,morphed,trimmed,dye.code,dye.name,worker.effort,worker.style,worker.purity,wishlists
v6n8,124,4,Rem,Re:Zero,3,1700000000000,42,waifu,,false,false,,,120,B,A,310
\"x9p2\",45,2,Emilia,\"Re:Zero\",4,1700000000001,99,,Mystic Frame,true,false,dXyZ,Blue,80,C,S,290
";
    let cards = parse_tabular(text);
    assert_eq!(cards.len(), 2);

    let rem = &cards[0];
    assert_eq!(rem.code, "v6n8");
    assert_eq!(rem.name, "Rem");
    assert_eq!(rem.print, 124);
    assert_eq!(rem.number, 124);
    assert_eq!(rem.edition, 4);
    assert_eq!(rem.quality, "★★★☆");
    assert_eq!(rem.tag, "waifu");
    assert_eq!(rem.worker_effort, "120");
    assert_eq!(rem.wishlists, "310");
    assert_eq!(rem.morphed, "false");

    let emilia = &cards[1];
    assert_eq!(emilia.code, "x9p2");
    assert_eq!(emilia.frame, "Mystic Frame");
    assert_eq!(emilia.dye_code, "dXyZ");
    assert_eq!(emilia.dye_name, "Blue");
    assert_eq!(emilia.quality, "★★★★");
}

#[test]
fn header_is_case_and_quote_insensitive() {
    let cards = parse_tabular("\"CODE\",\"Name\",\"Series\"\nabc1,Rem,Re:Zero\n");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].series, "Re:Zero");
}

#[test]
fn rows_without_code_are_dropped() {
    let text = "code,name\n,Rem\nab,TooShort\nabc1,Emilia\n\n";
    let cards = parse_tabular(text);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].code, "abc1");
}

#[test]
fn unknown_columns_become_passthrough() {
    let cards = parse_tabular("code,name,rarity,\nabc1,Rem,SSR,ignored\n");
    assert_eq!(cards[0].extra.get("rarity").map(String::as_str), Some("SSR"));
    assert_eq!(cards[0].extra.len(), 1);
}

#[test]
fn short_rows_leave_fields_default() {
    let cards = parse_tabular("code\tname\tseries\tedition\r\nabc1\tRem\r\n");
    assert_eq!(cards[0].series, "Unknown");
    assert_eq!(cards[0].edition, 1);
}

#[test]
fn code_header_detection() {
    assert!(has_code_header("\n\nCode,name\nabc,x"));
    assert!(has_code_header("card_code\tx"));
    assert!(!has_code_header("abc1,Rem,Re:Zero"));
    assert!(!has_code_header(""));
}

#[test]
fn quoted_fields_may_span_lines() {
    let text = "code,name,alias\nabc1,Rem,\"first\nsecond\"\nabc2,Ram,\n";
    let cards = parse_tabular(text);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].alias, "first\nsecond");
    assert_eq!(cards[1].code, "abc2");
}

#[test]
fn delimiter_comes_from_the_header() {
    let text = "code,name,series\nabc1,Rem,\"Re:Zero\tSeason 2\"\n";
    let cards = parse_tabular(text);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Rem");
    assert_eq!(cards[0].series, "Re:Zero\tSeason 2");
}
