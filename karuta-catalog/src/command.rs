//! Karuta bot command strings for a selection of cards.

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MultiTrade,
    Give,
    Burn,
    Tag,
    Frame,
    Dye,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::MultiTrade,
        CommandKind::Give,
        CommandKind::Burn,
        CommandKind::Tag,
        CommandKind::Frame,
        CommandKind::Dye,
    ];

    /// Short identifier accepted by [`FromStr`].
    pub fn short_name(self) -> &'static str {
        match self {
            CommandKind::MultiTrade => "kmt",
            CommandKind::Give => "kgive",
            CommandKind::Burn => "kburn",
            CommandKind::Tag => "ktag",
            CommandKind::Frame => "kframe",
            CommandKind::Dye => "kdye",
        }
    }

    /// The bot verb, including the `k!` prefix.
    pub fn verb(self) -> &'static str {
        match self {
            CommandKind::MultiTrade => "k!mt",
            CommandKind::Give => "k!give",
            CommandKind::Burn => "k!burn",
            CommandKind::Tag => "k!tag",
            CommandKind::Frame => "k!frame",
            CommandKind::Dye => "k!dye",
        }
    }

    /// Argument used when the caller gives none. `None` for commands that
    /// take no argument.
    pub fn default_argument(self) -> Option<&'static str> {
        match self {
            CommandKind::MultiTrade | CommandKind::Burn => None,
            CommandKind::Give => Some("@user"),
            CommandKind::Tag => Some("tag"),
            CommandKind::Frame => Some("frame"),
            CommandKind::Dye => Some("dye"),
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for CommandKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let lower = lower.strip_prefix("k!").map(|rest| format!("k{rest}")).unwrap_or(lower);
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.short_name() == lower)
            .ok_or_else(|| CatalogError::UnknownCommand(s.to_string()))
    }
}

/// Render a bot command acting on `codes`.
///
/// An empty or missing `argument` falls back to the command's default.
/// The tag argument is quoted so multi-word tags survive.
///
/// ```
/// use karuta_catalog::{CommandKind, format_bot_command};
///
/// assert_eq!(format_bot_command(CommandKind::Burn, &["abc", "def"], None), "k!burn abc def");
/// assert_eq!(
///     format_bot_command(CommandKind::Tag, &["abc"], Some("best girl")),
///     "k!tag \"best girl\" abc"
/// );
/// ```
pub fn format_bot_command<S: AsRef<str>>(kind: CommandKind, codes: &[S], argument: Option<&str>) -> String {
    let codes = codes.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
    let argument = argument
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .or(kind.default_argument());

    match (kind, argument) {
        (CommandKind::Tag, Some(arg)) => format!("{} \"{arg}\" {codes}", kind.verb()),
        (CommandKind::MultiTrade | CommandKind::Burn, _) | (_, None) => {
            format!("{} {codes}", kind.verb())
        }
        (_, Some(arg)) => format!("{} {arg} {codes}", kind.verb()),
    }
}
