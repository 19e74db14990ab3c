use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".twentyone.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rule: ConfigRule,
    pub table: ConfigTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRule {
    pub dealer_soft_total: u16,
    pub dealer_hit_on_soft17: bool,
    pub exhaustion_policy: String,
}

impl Default for ConfigRule {
    fn default() -> Self {
        let rule = twentyone::Rule::default();
        ConfigRule {
            dealer_soft_total: rule.dealer_soft_total,
            dealer_hit_on_soft17: rule.dealer_hit_on_soft17,
            exhaustion_policy: rule.exhaustion_policy.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigTable {
    pub player_name: String,
    pub dealer_name: String,
    /// Seeds the shuffle. A fresh random deck every run when absent.
    pub seed: Option<u64>,
}

impl Default for ConfigTable {
    fn default() -> Self {
        let rule = twentyone::Rule::default();
        ConfigTable {
            player_name: rule.player_name,
            dealer_name: rule.dealer_name,
            seed: None,
        }
    }
}

impl TryInto<twentyone::Rule> for Config {
    type Error = serde::de::value::Error;

    fn try_into(self) -> Result<twentyone::Rule, Self::Error> {
        let rule = twentyone::Rule {
            dealer_soft_total: self.rule.dealer_soft_total,
            dealer_hit_on_soft17: self.rule.dealer_hit_on_soft17,
            exhaustion_policy: self.rule.exhaustion_policy.parse()?,
            player_name: self.table.player_name,
            dealer_name: self.table.dealer_name,
        };

        Ok(rule)
    }
}

/// `~/.twentyone.yml`, if there is a home directory.
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home_dir| home_dir.join(CONFIG_FILE_NAME))
}

pub fn parse_config(content: &str) -> Result<Config, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: impl AsRef<Path>) -> anyhow::Result<Config> {
    let filename = filename.as_ref();
    let file_content = fs::read_to_string(filename)
        .with_context(|| format!("cannot read config file {}", filename.display()))?;
    parse_config(&file_content)
        .with_context(|| format!("cannot parse config file {}", filename.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use twentyone::ExhaustionPolicy;

    #[test]
    fn can_convert_rule() {
        let config = Config::default();
        let converted_rule: twentyone::Rule = config.try_into().unwrap();
        assert_eq!(converted_rule.dealer_soft_total, 17);
        assert!(converted_rule.dealer_hit_on_soft17);
        assert_eq!(converted_rule.exhaustion_policy, ExhaustionPolicy::Reshuffle);
        assert_eq!(converted_rule.player_name, "Player1");
        assert_eq!(converted_rule.dealer_name, "The dealer");
    }

    #[test]
    fn should_return_error_when_converting_rule() {
        let mut config = Config::default();
        config.rule.exhaustion_policy = String::from("Not a policy");
        let convert_result: Result<twentyone::Rule, serde::de::value::Error> = config.try_into();
        assert!(convert_result.is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = parse_config(
            r#"
rule:
  exhaustion_policy: Fail
table:
  player_name: Alice
  seed: 99
"#,
        )
        .unwrap();
        assert_eq!(config.rule.dealer_soft_total, 17);
        assert_eq!(config.table.dealer_name, "The dealer");
        assert_eq!(config.table.seed, Some(99));

        let rule: twentyone::Rule = config.try_into().unwrap();
        assert_eq!(rule.exhaustion_policy, ExhaustionPolicy::Fail);
        assert_eq!(rule.player_name, "Alice");
    }

    #[test]
    fn empty_document_is_the_default_config() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.table.player_name, "Player1");
        assert_eq!(config.rule.exhaustion_policy, "Reshuffle");
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = parse_config_from_file("/definitely/not/here.yml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yml"));
    }
}
