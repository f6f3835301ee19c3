use crate::cli::MicroArg;
use crate::format::duration::MicroUnit;

pub const DEFAULT_LOG_FILTER: &str = "nanofmt=warn";

/// What the values on the command line stand for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Duration,
    Size,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub kind:       ValueKind,
    pub micro:      MicroUnit,
    pub json:       bool,
    pub verbose:    bool,
    pub log_filter: String,
}

impl Config {
    /// Builds a config, taking the log filter from `--log-filter`, then
    /// `RUST_LOG`, then the crate default.
    pub fn from_args_and_env(a: &crate::cli::Args, rust_log: Option<String>) -> Self {
        let mut cfg = Config::from(a);
        if a.log_filter.is_none() {
            if let Some(filter) = rust_log.filter(|f| !f.trim().is_empty()) {
                cfg.log_filter = filter;
            }
        }
        cfg
    }
}

impl From<&crate::cli::Args> for Config {
    fn from(a: &crate::cli::Args) -> Self {
        Self {
            kind:       if a.size { ValueKind::Size } else { ValueKind::Duration },
            micro:      match (a.micro_unit, a.micro_sign) {
                (Some(MicroArg::Ascii), _) => MicroUnit::Ascii,
                (Some(MicroArg::Sign), _) | (None, true) => MicroUnit::Sign,
                (None, false) => MicroUnit::default(),
            },
            json:       a.json,
            verbose:    a.verbose,
            log_filter: a.log_filter.clone().unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    #[test]
    fn defaults_to_durations() {
        let args = Args::parse_from(["nanofmt", "1500"]);
        let cfg = Config::from(&args);
        assert_eq!(cfg.kind, ValueKind::Duration);
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
        assert!(!cfg.json);
    }

    #[test]
    fn size_and_micro_flags() {
        let args = Args::parse_from(["nanofmt", "--size", "--micro-sign", "--json", "1"]);
        let cfg = Config::from(&args);
        assert_eq!(cfg.kind, ValueKind::Size);
        assert_eq!(cfg.micro, MicroUnit::Sign);
        assert!(cfg.json);
    }

    #[test]
    fn micro_unit_overrides_build_default() {
        let cfg = Config::from(&Args::parse_from(["nanofmt", "--micro-unit", "ascii"]));
        assert_eq!(cfg.micro, MicroUnit::Ascii);
        let cfg = Config::from(&Args::parse_from(["nanofmt", "--micro-unit", "sign"]));
        assert_eq!(cfg.micro, MicroUnit::Sign);
        let cfg = Config::from(&Args::parse_from(["nanofmt"]));
        assert_eq!(cfg.micro, MicroUnit::build_default());
        assert!(Args::try_parse_from(["nanofmt", "--micro-unit", "ascii", "--micro-sign"]).is_err());
        assert!(Args::try_parse_from(["nanofmt", "--micro-unit", "greek"]).is_err());
    }

    #[test]
    fn negative_values_are_not_flags() {
        let args = Args::parse_from(["nanofmt", "-1500", "-5242880"]);
        assert_eq!(args.values, ["-1500", "-5242880"]);
    }

    #[test]
    fn log_filter_precedence() {
        let args = Args::parse_from(["nanofmt"]);
        let cfg = Config::from_args_and_env(&args, Some("nanofmt=debug".into()));
        assert_eq!(cfg.log_filter, "nanofmt=debug");

        let cfg = Config::from_args_and_env(&args, Some("  ".into()));
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);

        let args = Args::parse_from(["nanofmt", "--log-filter", "trace"]);
        let cfg = Config::from_args_and_env(&args, Some("nanofmt=debug".into()));
        assert_eq!(cfg.log_filter, "trace");
    }
}
