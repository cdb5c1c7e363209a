//! `!pos` chat command parsing.

/// A parsed `!pos` chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosCommand {
    /// `!pos` or `!pos help`
    Help,
    /// `!pos list`
    List,
    /// `!pos fuel`
    Fuel,
    /// `!pos details <id>` with a valid positive ID
    Details(i64),
    /// `!pos details` without an ID argument
    DetailsMissingId,
    /// `!pos details <arg>` with an unparseable or non-positive ID
    DetailsInvalidId(String),
    /// `!pos stats`
    Stats,
    /// `!pos restart`
    Restart,
    /// `!pos shutdown`
    Shutdown,
    /// Recognized prefix, unrecognized subcommand
    Unknown,
}

impl PosCommand {
    /// Counter key for usage and error bookkeeping.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List => "list",
            Self::Fuel => "fuel",
            Self::Details(_) | Self::DetailsMissingId | Self::DetailsInvalidId(_) => "details",
            Self::Stats => "stats",
            Self::Restart => "restart",
            Self::Shutdown => "shutdown",
            Self::Unknown => "unknown",
        }
    }
}

/// Parse a message body as a `!pos` command.
///
/// Returns `None` for messages not addressed to the bot. Prefix and
/// subcommand match case-insensitively; the details argument must be a
/// positive integer.
pub fn parse_command(content: &str) -> Option<PosCommand> {
    let lower = content.to_ascii_lowercase();
    if lower != "!pos" && !lower.starts_with("!pos ") {
        return None;
    }

    let mut parts = content.split_whitespace();
    parts.next();

    let sub = match parts.next() {
        None => return Some(PosCommand::Help),
        Some(sub) => sub,
    };

    let command = match sub.to_ascii_lowercase().as_str() {
        "help" => PosCommand::Help,
        "list" => PosCommand::List,
        "fuel" => PosCommand::Fuel,
        "details" => match parts.next() {
            None => PosCommand::DetailsMissingId,
            Some(arg) => match arg.parse::<i64>() {
                Ok(id) if id > 0 => PosCommand::Details(id),
                _ => PosCommand::DetailsInvalidId(arg.to_string()),
            },
        },
        "stats" => PosCommand::Stats,
        "restart" => PosCommand::Restart,
        "shutdown" => PosCommand::Shutdown,
        _ => PosCommand::Unknown,
    };

    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_prefix_is_help() {
        assert_eq!(parse_command("!pos"), Some(PosCommand::Help));
        assert_eq!(parse_command("!pos help"), Some(PosCommand::Help));
    }

    #[test]
    fn unrelated_messages_are_ignored() {
        assert_eq!(parse_command("hello there"), None);
        assert_eq!(parse_command("!poseidon"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn subcommands_match_case_insensitively() {
        assert_eq!(parse_command("!POS FUEL"), Some(PosCommand::Fuel));
        assert_eq!(parse_command("!pos List"), Some(PosCommand::List));
        assert_eq!(parse_command("!pos SHUTDOWN"), Some(PosCommand::Shutdown));
    }

    #[test]
    fn details_argument_validation() {
        assert_eq!(
            parse_command("!pos details 1000000471"),
            Some(PosCommand::Details(1000000471))
        );
        assert_eq!(
            parse_command("!pos details"),
            Some(PosCommand::DetailsMissingId)
        );
        assert_eq!(
            parse_command("!pos details banana"),
            Some(PosCommand::DetailsInvalidId("banana".into()))
        );
        assert_eq!(
            parse_command("!pos details -5"),
            Some(PosCommand::DetailsInvalidId("-5".into()))
        );
        assert_eq!(
            parse_command("!pos details 0"),
            Some(PosCommand::DetailsInvalidId("0".into()))
        );
    }

    #[test]
    fn unknown_subcommand_is_flagged() {
        assert_eq!(parse_command("!pos dance"), Some(PosCommand::Unknown));
    }
}
