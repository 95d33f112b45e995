use std::path::PathBuf;

use crate::error::{LoxError, Result};

/// Driver settings taken from the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Script to run; the interactive prompt is used when absent.
    pub script: Option<PathBuf>,
    /// Dump every scanned token before parsing.
    pub print_tokens: bool,
}

impl Config {
    /// Parses arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        for arg in args {
            match arg.as_str() {
                "--tokens" => config.print_tokens = true,
                flag if flag.starts_with("--") => return Err(LoxError::Usage),
                _ if config.script.is_some() => return Err(LoxError::Usage),
                _ => config.script = Some(arg.into()),
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn no_arguments_means_prompt() {
        assert_eq!(Config::from_args(args(&[])).unwrap(), Config::default());
    }

    #[test]
    fn script_and_token_flag() {
        let config = Config::from_args(args(&["--tokens", "main.lox"])).unwrap();
        assert!(config.print_tokens);
        assert_eq!(config.script, Some(PathBuf::from("main.lox")));
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(
            Config::from_args(args(&["a.lox", "b.lox"])),
            Err(LoxError::Usage)
        ));
        assert!(matches!(
            Config::from_args(args(&["--verbose"])),
            Err(LoxError::Usage)
        ));
    }
}
