use std::{fmt, result::Result as StdResult, str::FromStr};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration bundled into the library and parsed in `JNI_OnLoad`.
pub const EMBEDDED_CONFIG: &str = include_str!("../study-jni.toml");

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StudyConfig {
    pub log: LogConfig,
    pub classes: ClassConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub tag: String,
    pub level: String,
}

/// JNI binary names (`pkg/Name`) of the managed classes the bridge resolves.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
    pub main_activity: String,
    pub student: String,
    pub person: String,
    pub dog: String,
}

impl StudyConfig {
    pub fn embedded() -> Result<Self> {
        EMBEDDED_CONFIG.parse().map_err(Error::config)
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse()
            .map_err(|_| Error::config(format!("unknown log level `{}`", self.level)))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            tag: "lee".to_owned(),
            level: "debug".to_owned(),
        }
    }
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            main_activity: "com/sawyer/studyjni/MainActivity".to_owned(),
            student: "com/sawyer/studyjni/Student".to_owned(),
            person: "com/sawyer/studyjni/Person".to_owned(),
            dog: "com/sawyer/studyjni/Dog".to_owned(),
        }
    }
}

impl FromStr for StudyConfig {
    type Err = toml::de::Error;
    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl fmt::Display for StudyConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        toml::to_string_pretty(self)
            .map_err(|_| fmt::Error)
            .and_then(|s| write!(f, "{}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_default() {
        let config = StudyConfig::embedded().unwrap();
        assert_eq!(config, StudyConfig::default());
        assert_eq!(config.log.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn rendered_config_parses_back() {
        let mut config = StudyConfig::default();
        config.log.tag = "study".to_owned();
        config.classes.dog = "org/example/Dog".to_owned();
        let parsed: StudyConfig = config.to_string().parse().unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let text = EMBEDDED_CONFIG.replace("[classes]", "[classes]\ncat = \"x/Cat\"");
        assert!(text.parse::<StudyConfig>().is_err());
    }

    #[test]
    fn bad_level_is_a_config_error() {
        let log = LogConfig {
            tag: "lee".to_owned(),
            level: "chatty".to_owned(),
        };
        let err = log.level_filter().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("chatty"));
    }
}
