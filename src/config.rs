use log::Level;

const DEFAULT_TOAST_DURATION_MS: u32 = 4_000;
const DEFAULT_SPOTLIGHT_INTERVAL_MS: u32 = 3_000;
const DEFAULT_LOG_LEVEL: Level = Level::Info;
const DEFAULT_CONTACT_RECIPIENT: &str = "Vincenzo";

const TOAST_DURATION_MS_BOUNDS: (u32, u32) = (1_000, 20_000);
const SPOTLIGHT_INTERVAL_MS_BOUNDS: (u32, u32) = (500, 60_000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub receiver: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub relay: Option<RelayConfig>,
    pub contact_recipient: String,
    pub toast_duration_ms: u32,
    pub spotlight_interval_ms: u32,
    pub log_level: Level,
}

impl SiteConfig {
    /// Values are baked in at compile time; trunk forwards its environment to
    /// rustc.
    pub fn from_build_env() -> Self {
        Self::from_values(|name| match name {
            "PORTFOLIO_EMAILJS_SERVICE_ID" => option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            "PORTFOLIO_EMAILJS_TEMPLATE_ID" => option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
            "PORTFOLIO_EMAILJS_PUBLIC_KEY" => option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
            "PORTFOLIO_EMAILJS_RECEIVER" => option_env!("PORTFOLIO_EMAILJS_RECEIVER"),
            "PORTFOLIO_CONTACT_RECIPIENT" => option_env!("PORTFOLIO_CONTACT_RECIPIENT"),
            "PORTFOLIO_TOAST_DURATION_MS" => option_env!("PORTFOLIO_TOAST_DURATION_MS"),
            "PORTFOLIO_SPOTLIGHT_INTERVAL_MS" => option_env!("PORTFOLIO_SPOTLIGHT_INTERVAL_MS"),
            "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
            _ => None,
        })
    }

    fn from_values<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let non_empty = |name: &str| parse_non_empty_string(lookup(name));

        let relay = match (
            non_empty("PORTFOLIO_EMAILJS_SERVICE_ID"),
            non_empty("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
            non_empty("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(RelayConfig {
                service_id,
                template_id,
                public_key,
                receiver: non_empty("PORTFOLIO_EMAILJS_RECEIVER"),
            }),
            _ => None,
        };

        Self {
            relay,
            contact_recipient: non_empty("PORTFOLIO_CONTACT_RECIPIENT")
                .unwrap_or_else(|| DEFAULT_CONTACT_RECIPIENT.to_string()),
            toast_duration_ms: parse_u32_with_bounds(
                lookup("PORTFOLIO_TOAST_DURATION_MS"),
                DEFAULT_TOAST_DURATION_MS,
                TOAST_DURATION_MS_BOUNDS,
            ),
            spotlight_interval_ms: parse_u32_with_bounds(
                lookup("PORTFOLIO_SPOTLIGHT_INTERVAL_MS"),
                DEFAULT_SPOTLIGHT_INTERVAL_MS,
                SPOTLIGHT_INTERVAL_MS_BOUNDS,
            ),
            log_level: parse_log_level(lookup("PORTFOLIO_LOG_LEVEL"), DEFAULT_LOG_LEVEL),
        }
    }
}

fn parse_u32_with_bounds(raw: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(raw: Option<&str>, default: Level) -> Level {
    match parse_non_empty_string(raw)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "trace" => Level::Trace,
        "debug" => Level::Debug,
        "info" => Level::Info,
        "warn" => Level::Warn,
        "error" => Level::Error,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> SiteConfig {
        let values: HashMap<&str, &str> = pairs.iter().copied().collect();
        SiteConfig::from_values(|name| values.get(name).copied())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config.relay, None);
        assert_eq!(config.contact_recipient, "Vincenzo");
        assert_eq!(config.toast_duration_ms, 4_000);
        assert_eq!(config.spotlight_interval_ms, 3_000);
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn relay_needs_service_template_and_key() {
        let partial = config_from(&[
            ("PORTFOLIO_EMAILJS_SERVICE_ID", "service_1"),
            ("PORTFOLIO_EMAILJS_TEMPLATE_ID", "  "),
            ("PORTFOLIO_EMAILJS_PUBLIC_KEY", "key"),
        ]);
        assert_eq!(partial.relay, None);

        let complete = config_from(&[
            ("PORTFOLIO_EMAILJS_SERVICE_ID", " service_1 "),
            ("PORTFOLIO_EMAILJS_TEMPLATE_ID", "template_1"),
            ("PORTFOLIO_EMAILJS_PUBLIC_KEY", "key"),
        ]);
        assert_eq!(
            complete.relay,
            Some(RelayConfig {
                service_id: "service_1".into(),
                template_id: "template_1".into(),
                public_key: "key".into(),
                receiver: None,
            })
        );
    }

    #[test]
    fn out_of_bounds_numbers_fall_back_to_defaults() {
        let config = config_from(&[
            ("PORTFOLIO_TOAST_DURATION_MS", "50"),
            ("PORTFOLIO_SPOTLIGHT_INTERVAL_MS", "1500"),
        ]);

        assert_eq!(config.toast_duration_ms, 4_000);
        assert_eq!(config.spotlight_interval_ms, 1_500);
    }

    #[test]
    fn log_level_is_case_insensitive_with_fallback() {
        assert_eq!(parse_log_level(Some("DEBUG"), Level::Info), Level::Debug);
        assert_eq!(parse_log_level(Some("loud"), Level::Warn), Level::Warn);
        assert_eq!(parse_log_level(None, Level::Error), Level::Error);
    }
}
