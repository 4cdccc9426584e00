//! The demo catalog: names every demo and runs a selection of them in order.

use std::fmt;
use std::io::{BufRead, Cursor, Write};
use std::path::PathBuf;
use std::str::FromStr;

use colored::Colorize;
use serde::Deserialize;
use tracing::info;

use crate::config::CatalogConfig;
use crate::{adapter, command, decorator, factory, iterator, observer, singleton, strategy, template};
use crate::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Demo {
    Adapter,
    Command,
    Decorator,
    Factory,
    Iterator,
    Observer,
    Singleton,
    Strategy,
    Template,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::Adapter,
        Demo::Command,
        Demo::Decorator,
        Demo::Factory,
        Demo::Iterator,
        Demo::Observer,
        Demo::Singleton,
        Demo::Strategy,
        Demo::Template,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Adapter => "adapter",
            Demo::Command => "command",
            Demo::Decorator => "decorator",
            Demo::Factory => "factory",
            Demo::Iterator => "iterator",
            Demo::Observer => "observer",
            Demo::Singleton => "singleton",
            Demo::Strategy => "strategy",
            Demo::Template => "template",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|demo| demo.name()).collect()
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Adapter => "Adapter",
            Demo::Command => "Command",
            Demo::Decorator => "Decorator",
            Demo::Factory => "Factory Method",
            Demo::Iterator => "Iterator",
            Demo::Observer => "Observer",
            Demo::Singleton => "Singleton",
            Demo::Strategy => "Strategy",
            Demo::Template => "Template Method",
        }
    }

    /// Runs this demo. Only the template demo reads `input`.
    pub fn run(self, out: &mut dyn Write, input: &mut dyn BufRead) -> Result<()> {
        match self {
            Demo::Adapter => adapter::run(out),
            Demo::Command => command::run(out),
            Demo::Decorator => decorator::run(out),
            Demo::Factory => factory::run(out),
            Demo::Iterator => iterator::run(out),
            Demo::Observer => observer::run(out),
            Demo::Singleton => singleton::run(out),
            Demo::Strategy => strategy::run(out),
            Demo::Template => template::run(out, input),
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|demo| demo.name() == wanted)
            .ok_or_else(|| PatternError::UnknownDemo(s.to_string()))
    }
}

impl TryFrom<String> for Demo {
    type Error = PatternError;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

// =============================================================================
// Command line
// =============================================================================

/// What the `catalog` binary was asked to do.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogArgs {
    pub config_path: Option<PathBuf>,
    /// Demos named on the command line; empty means "use the config's list".
    pub demos: Vec<Demo>,
}

impl CatalogArgs {
    /// Loads the config file if one was given and applies the named demos over it.
    pub fn into_config(self) -> Result<CatalogConfig> {
        let mut config = match self.config_path {
            Some(path) => CatalogConfig::load(&path)?,
            None => CatalogConfig::default(),
        };
        if !self.demos.is_empty() {
            config.demos = self.demos;
        }
        Ok(config)
    }
}

/// Parses `[--config <path>] [demo ...]` (program name already skipped).
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CatalogArgs> {
    let mut parsed = CatalogArgs::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().ok_or(PatternError::MissingArgument("--config"))?;
            parsed.config_path = Some(PathBuf::from(path));
        } else {
            parsed.demos.push(arg.parse()?);
        }
    }
    Ok(parsed)
}

// =============================================================================
// Runner
// =============================================================================

/// Runs every demo in `config.demos`, in order.
pub fn run_catalog(config: &CatalogConfig, out: &mut dyn Write, input: &mut dyn BufRead) -> Result<()> {
    for demo in &config.demos {
        info!(demo = demo.name(), "running demo");
        if config.banners {
            writeln!(out, "{}", format!("=== {} ===", demo.title()).bold().cyan())?;
        }

        match (&config.coffee_answer, demo) {
            (Some(answer), Demo::Template) => {
                let mut scripted = Cursor::new(format!("{answer}\n"));
                demo.run(out, &mut scripted)?;
            }
            _ => demo.run(out, input)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Observer".parse::<Demo>().unwrap(), Demo::Observer);
        assert_eq!(" template ".parse::<Demo>().unwrap(), Demo::Template);
        for demo in Demo::ALL {
            assert_eq!(demo.to_string().parse::<Demo>().unwrap(), demo);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "visitor".parse::<Demo>().unwrap_err();
        assert!(matches!(err, PatternError::UnknownDemo(ref name) if name == "visitor"));
        assert_eq!(err.to_string(), "unknown demo 'visitor'");
        assert_eq!(Demo::names().len(), Demo::ALL.len());
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let parsed = parse_args(args(&[])).unwrap();
        assert_eq!(parsed, CatalogArgs::default());
        assert_eq!(parsed.into_config().unwrap(), CatalogConfig::default());
    }

    #[test]
    fn test_parse_args_demos_and_config() {
        let parsed = parse_args(args(&["Observer", "--config", "demos.toml", "strategy"])).unwrap();
        assert_eq!(parsed.config_path, Some(PathBuf::from("demos.toml")));
        assert_eq!(parsed.demos, [Demo::Observer, Demo::Strategy]);
    }

    #[test]
    fn test_config_flag_without_path_is_an_error() {
        let result = parse_args(args(&["--config"]));
        assert!(matches!(result, Err(PatternError::MissingArgument("--config"))));

        let result = parse_args(args(&["adapter", "--config"]));
        assert!(matches!(result, Err(PatternError::MissingArgument(_))));
    }

    #[test]
    fn test_parse_args_rejects_unknown_demo() {
        let result = parse_args(args(&["adapter", "visitor"]));
        assert!(matches!(result, Err(PatternError::UnknownDemo(ref name)) if name == "visitor"));
    }

    #[test]
    fn test_named_demos_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "demos = [\"adapter\"]\nbanners = false\n").unwrap();

        let parsed = parse_args(vec![
            "--config".to_string(),
            path.display().to_string(),
            "factory".to_string(),
        ])
        .unwrap();
        let config = parsed.into_config().unwrap();
        assert_eq!(config.demos, [Demo::Factory]);
        assert!(!config.banners);
    }

    #[test]
    fn test_catalog_without_banners_is_plain_demo_output() {
        let config = CatalogConfig {
            demos: vec![Demo::Decorator, Demo::Strategy],
            banners: false,
            coffee_answer: None,
        };

        let mut out = Vec::<u8>::new();
        run_catalog(&config, &mut out, &mut &b""[..]).unwrap();

        let mut expected = Vec::<u8>::new();
        decorator::run(&mut expected).unwrap();
        strategy::run(&mut expected).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_banners_and_scripted_coffee_answer() {
        let config = CatalogConfig {
            demos: vec![Demo::Template],
            banners: true,
            coffee_answer: Some("yes".to_string()),
        };

        let mut out = Vec::new();
        run_catalog(&config, &mut out, &mut &b""[..]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== Template Method ==="));
        assert!(text.contains("Adding milk and sugar"));
    }

    #[test]
    fn test_template_without_input_fails() {
        let config = CatalogConfig {
            demos: vec![Demo::Template],
            banners: false,
            coffee_answer: None,
        };

        let result = run_catalog(&config, &mut std::io::sink(), &mut &b""[..]);
        assert!(matches!(result, Err(PatternError::InputClosed)));
    }
}
