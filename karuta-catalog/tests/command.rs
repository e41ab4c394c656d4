use karuta_catalog::{CatalogError, CommandKind, format_bot_command};

const CODES: [&str; 2] = ["v6n8", "k1a2"];

#[test]
fn argumentless_commands() {
    assert_eq!(format_bot_command(CommandKind::MultiTrade, &CODES, None), "k!mt v6n8 k1a2");
    assert_eq!(format_bot_command(CommandKind::Burn, &CODES, Some("ignored")), "k!burn v6n8 k1a2");
}

#[test]
fn defaults_fill_missing_arguments() {
    assert_eq!(format_bot_command(CommandKind::Give, &CODES, None), "k!give @user v6n8 k1a2");
    assert_eq!(format_bot_command(CommandKind::Tag, &CODES, Some("")), "k!tag \"tag\" v6n8 k1a2");
    assert_eq!(format_bot_command(CommandKind::Frame, &CODES, None), "k!frame frame v6n8 k1a2");
    assert_eq!(format_bot_command(CommandKind::Dye, &CODES, Some("  ")), "k!dye dye v6n8 k1a2");
}

#[test]
fn explicit_arguments() {
    assert_eq!(
        format_bot_command(CommandKind::Give, &CODES, Some("<@1234>")),
        "k!give <@1234> v6n8 k1a2"
    );
    assert_eq!(format_bot_command(CommandKind::Dye, &["v6n8"], Some("dXyZ")), "k!dye dXyZ v6n8");
}

#[test]
fn owned_codes_work_too() {
    let owned = vec!["abc".to_string()];
    assert_eq!(format_bot_command(CommandKind::Burn, &owned, None), "k!burn abc");
}

#[test]
fn command_names_parse() {
    for kind in CommandKind::ALL {
        assert_eq!(kind.short_name().parse::<CommandKind>().unwrap(), kind);
    }
    assert_eq!("k!give".parse::<CommandKind>().unwrap(), CommandKind::Give);
    assert_eq!("KTAG".parse::<CommandKind>().unwrap(), CommandKind::Tag);
    assert_eq!(
        "kview".parse::<CommandKind>(),
        Err(CatalogError::UnknownCommand("kview".into()))
    );
}
