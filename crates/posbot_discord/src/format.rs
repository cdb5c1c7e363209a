//! Embed and message formatting for the command surface.

use chrono::{DateTime, Utc};
use posbot_cache::CommandStat;
use posbot_core::{format_hours, Pos, Severity, StarbaseState};
use posbot_monitor::{fuel_severity, MonitorConfig};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use std::collections::BTreeMap;
use std::time::Duration;

/// Embed accent for informational content.
pub const COLOR_BLUE: u32 = 395_860;
/// Embed accent for healthy states.
pub const COLOR_GREEN: u32 = 549_640;
/// Embed accent for warning states.
pub const COLOR_ORANGE: u32 = 16_750_848;
/// Embed accent for critical states.
pub const COLOR_RED: u32 = 15_011_085;
/// Embed accent for neutral stats output.
pub const COLOR_WHITE: u32 = 16_777_215;

/// Accent color and emoji for a starbase lifecycle state.
pub fn state_style(state: StarbaseState) -> (u32, &'static str) {
    match state {
        StarbaseState::Online => (COLOR_GREEN, ":satellite_orbital:"),
        StarbaseState::Onlining => (COLOR_GREEN, ":construction_site:"),
        StarbaseState::Anchored => (COLOR_ORANGE, ":anchor:"),
        StarbaseState::Unanchored => (COLOR_RED, ":warning:"),
        StarbaseState::Reinforced => (COLOR_RED, ":space_invader:"),
    }
}

/// Swap the literal word "Moon" in a location name for the moon emoji.
pub fn moonify(location: &str) -> String {
    location.replace("Moon", ":full_moon_with_face:")
}

/// Remaining validity of a cached record, for embed footers.
pub fn format_ttl(cached_until: DateTime<Utc>) -> String {
    let left = cached_until.signed_duration_since(Utc::now()).num_seconds();
    if left <= 0 {
        return "0s".to_string();
    }
    format!("{}m {}s", left / 60, left % 60)
}

/// Build the per-POS embed used by the fuel and details commands.
///
/// Constantly-required fuel rows get markdown emphasis as they cross the
/// warning and critical thresholds, and the embed accent tracks the worst
/// row.
pub fn pos_embed(pos: &Pos, title: String, thresholds: &MonitorConfig) -> CreateEmbed {
    let (_, state_emoji) = state_style(*pos.state());
    let mut embed = CreateEmbed::new()
        .title(title)
        .description(format!("POS owned by **{}**", pos.owner_name()))
        .field("Location", moonify(pos.location_name()), true)
        .field("State", format!("{} {}", state_emoji, pos.state()), true)
        .field("Size", pos.size().to_string(), true);

    let mut worst = Severity::Nominal;
    for fuel in pos.fuel() {
        let mut remain = match fuel.hours_remaining() {
            Some(hours) => format_hours(*hours),
            None => "n/a".to_string(),
        };
        if *fuel.constantly_required() {
            if let Some(hours) = fuel.hours_remaining() {
                match fuel_severity(*hours, thresholds) {
                    Severity::Critical => {
                        remain = format!("__**{}**__", remain);
                        worst = Severity::Critical;
                    }
                    Severity::Warning => {
                        remain = format!("**{}**", remain);
                        worst = worst.max(Severity::Warning);
                    }
                    Severity::Nominal => {}
                }
            }
        }
        let constantly = if *fuel.constantly_required() {
            "yes"
        } else {
            "no"
        };
        embed = embed.field(
            format!("Fuel *{}*", fuel.type_name()),
            format!(
                "*quantity*: {}, *remaining*: {}, *used/h*: {}, *constantly required*: {}",
                fuel.quantity(),
                remain,
                fuel.required_per_hour(),
                constantly
            ),
            false,
        );
    }

    let color = match worst {
        Severity::Critical => COLOR_RED,
        Severity::Warning => COLOR_ORANGE,
        Severity::Nominal => COLOR_GREEN,
    };
    embed.color(color).footer(CreateEmbedFooter::new(format!(
        "POS cached for {}",
        format_ttl(*pos.cached_until())
    )))
}

/// Build one listing-row embed for the list command.
#[allow(clippy::too_many_arguments)]
pub fn list_embed(
    index: usize,
    total: usize,
    location: &str,
    state: StarbaseState,
    monitored: bool,
    owner: &str,
    cached_until: DateTime<Utc>,
) -> CreateEmbed {
    let (color, state_emoji) = state_style(state);
    let check = if monitored {
        ":white_check_mark:"
    } else {
        ":x:"
    };
    CreateEmbed::new()
        .color(color)
        .title(format!(":stars: POS {}/{}", index + 1, total))
        .description(format!("POS owned by **{}**", owner))
        .field("Location", moonify(location), true)
        .field("State", format!("{} {}", state_emoji, state), true)
        .field("Monitored", check, true)
        .footer(CreateEmbedFooter::new(format!(
            "POS overview cached for {}",
            format_ttl(cached_until)
        )))
}

/// Build the stats embed: version, uptime and per-command counters.
pub fn stats_embed(
    version: &str,
    uptime: Duration,
    stats: &BTreeMap<String, CommandStat>,
) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .color(COLOR_WHITE)
        .title(":bar_chart: **POSbot** stats")
        .description("Runtime and command usage stats for **POSbot**")
        .field(
            "POSbot",
            format!(
                "**Version**: {}, **uptime**: {}",
                version,
                format_hours(uptime.as_secs_f64() / 3600.0)
            ),
            false,
        );

    for (command, stat) in stats {
        let usage_unit = if stat.usage == 1 { "time" } else { "times" };
        let error_unit = if stat.error == 1 { "time" } else { "times" };
        embed = embed.field(
            format!("Command usage `!pos {}`", command),
            format!(
                "**Usage**: {} {}, **error**: {} {}",
                stat.usage, usage_unit, stat.error, error_unit
            ),
            true,
        );
    }

    embed.footer(CreateEmbedFooter::new(format!(
        "Stats generated at: {}",
        Utc::now().to_rfc2822()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[test]
    fn moonify_replaces_every_occurrence() {
        assert_eq!(
            moonify("Tribute - M-OEE8 VII - Moon 3"),
            "Tribute - M-OEE8 VII - :full_moon_with_face: 3"
        );
        assert_eq!(moonify("Jita IV"), "Jita IV");
    }

    #[test]
    fn ttl_floors_at_zero() {
        let past = Utc::now() - ChronoDuration::minutes(5);
        assert_eq!(format_ttl(past), "0s");
    }

    #[test]
    fn ttl_renders_minutes_and_seconds() {
        let future = Utc::now() + ChronoDuration::seconds(125);
        let rendered = format_ttl(future);
        assert!(rendered == "2m 4s" || rendered == "2m 5s", "{rendered}");
    }

    #[test]
    fn reinforced_is_red() {
        let (color, emoji) = state_style(StarbaseState::Reinforced);
        assert_eq!(color, COLOR_RED);
        assert_eq!(emoji, ":space_invader:");
    }
}
