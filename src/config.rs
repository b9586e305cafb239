//! Run configuration, computed once at startup and passed explicitly.

use termcolor::ColorChoice;

use crate::cli::args::{ColorMode, KataArgs};

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// The run mode flag: when set, exercise suites also run their
    /// submission cases.
    pub with_submit: bool,
    pub use_colors: bool,
    /// Only suites whose name contains this substring run.
    pub filter: Option<String>,
}

impl RunConfig {
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }

    pub fn selects(&self, suite_name: &str) -> bool {
        match &self.filter {
            Some(f) => suite_name.to_lowercase().contains(&f.to_lowercase()),
            None => true,
        }
    }
}

impl From<&KataArgs> for RunConfig {
    fn from(args: &KataArgs) -> Self {
        let use_colors = match args.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        };
        Self {
            with_submit: args.submit,
            use_colors,
            filter: args.filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn submit_flag_sets_run_mode() {
        let args = KataArgs::try_parse_from(["kata", "-s", "--color", "never"]).unwrap();
        let config = RunConfig::from(&args);
        assert!(config.with_submit);
        assert!(!config.use_colors);
    }

    #[test]
    fn run_mode_defaults_off() {
        let args = KataArgs::try_parse_from(["kata", "--color", "always"]).unwrap();
        let config = RunConfig::from(&args);
        assert!(!config.with_submit);
        assert_eq!(config.color_choice(), ColorChoice::Always);
    }

    #[test]
    fn filter_is_a_case_insensitive_substring() {
        let config = RunConfig {
            filter: Some("Contact".to_string()),
            ..RunConfig::default()
        };
        assert!(config.selects("contacts"));
        assert!(!config.selects("pricing"));
        assert!(RunConfig::default().selects("anything"));
    }
}
