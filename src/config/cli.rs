use crate::domain::matcher::Matcher;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "sendcloud")]
#[command(about = "Look up SendCloud service points from the command line")]
pub struct CliConfig {
    #[arg(long, help = "TOML settings file with credentials and endpoints")]
    pub config: Option<String>,

    #[arg(long, help = "API key (overrides the settings file)")]
    pub api_key: Option<String>,

    #[arg(long, help = "API secret (overrides the settings file)")]
    pub api_secret: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List service points matching the filters
    ServicePoints(MatcherArgs),
    /// Resolve a postal code and house number (or code) to a service point ID
    Resolve(MatcherArgs),
}

#[derive(Debug, Clone, Args)]
pub struct MatcherArgs {
    #[arg(long)]
    pub country: String,
    #[arg(long)]
    pub spid: Option<String>,
    #[arg(long)]
    pub carrier: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
    #[arg(long)]
    pub house_number: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long, help = "Parcel weight in kilograms")]
    pub weight: Option<f64>,
    #[arg(long, help = "Search radius in metres")]
    pub radius: Option<i64>,
}

impl From<MatcherArgs> for Matcher {
    fn from(args: MatcherArgs) -> Self {
        Matcher {
            country: args.country,
            spid: args.spid,
            carrier: args.carrier,
            city: args.city,
            postal_code: args.postal_code,
            house_number: args.house_number,
            latitude: args.latitude,
            longitude: args.longitude,
            address: args.address,
            weight: args.weight,
            radius: args.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_command() {
        let config = CliConfig::parse_from([
            "sendcloud",
            "--api-key",
            "key",
            "--api-secret",
            "secret",
            "resolve",
            "--country",
            "nl",
            "--carrier",
            "postnl",
            "--latitude",
            "52.37",
            "--longitude",
            "-4.89",
            "--postal-code",
            "1012 AB",
            "--house-number",
            "14",
        ]);

        assert_eq!(config.api_key.as_deref(), Some("key"));
        let Command::Resolve(args) = config.command else {
            panic!("expected resolve command");
        };
        let matcher = Matcher::from(args);
        assert_eq!(matcher.longitude, Some(-4.89));
        assert_eq!(matcher.postal_code.as_deref(), Some("1012 AB"));
        assert_eq!(matcher.spid, None);
    }

    #[test]
    fn test_parse_service_points_command() {
        let config = CliConfig::parse_from([
            "sendcloud",
            "service-points",
            "--country",
            "be",
            "--weight",
            "2.5",
        ]);

        let Command::ServicePoints(args) = config.command else {
            panic!("expected service-points command");
        };
        assert_eq!(args.weight, Some(2.5));
        assert_eq!(args.city, None);
    }
}
