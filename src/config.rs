//! # Grocery Configuration Module
//!
//! This module defines the settings used when building a grocery list and how
//! they are read from the environment (after `.env` has been loaded).

use std::env;

// Environment variable names
pub const SKIP_STAPLES_VAR: &str = "GROCERY_SKIP_STAPLES";
pub const GROUP_BY_CATEGORY_VAR: &str = "GROCERY_GROUP_BY_CATEGORY";
pub const MAX_NAME_LENGTH_VAR: &str = "GROCERY_MAX_NAME_LENGTH";
pub const OUTPUT_FORMAT_VAR: &str = "GROCERY_OUTPUT_FORMAT";

pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

/// How the command-line front end prints the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Checklist grouped under category headings
    Text,
    /// JSON array of grocery items
    Json,
}

/// Configuration for grocery list generation
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryConfig {
    /// Drop pantry staples (salt, oil, ...) from the list
    pub skip_staples: bool,
    /// Order the list by store section instead of first appearance
    pub group_by_category: bool,
    /// Maximum length for ingredient names (longer names are cut at a word boundary)
    pub max_name_length: usize,
    pub output_format: OutputFormat,
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            skip_staples: true,
            group_by_category: true,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            output_format: OutputFormat::Text,
        }
    }
}

impl GroceryConfig {
    /// Read the configuration from process environment variables
    ///
    /// Unset variables keep their defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SKIP_STAPLES_VAR) {
            config.skip_staples = parse_bool(SKIP_STAPLES_VAR, &value)?;
        }
        if let Some(value) = lookup(GROUP_BY_CATEGORY_VAR) {
            config.group_by_category = parse_bool(GROUP_BY_CATEGORY_VAR, &value)?;
        }
        if let Some(value) = lookup(MAX_NAME_LENGTH_VAR) {
            config.max_name_length = match value.trim().parse::<usize>() {
                Ok(length) if length > 0 => length,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: MAX_NAME_LENGTH_VAR.to_string(),
                        value,
                    })
                }
            };
        }
        if let Some(value) = lookup(OUTPUT_FORMAT_VAR) {
            config.output_format = match value.trim().to_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::InvalidOutputFormat(value)),
            };
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Errors raised while reading configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A flag that is not a recognisable boolean
    InvalidBool { key: String, value: String },
    /// A length that is not a positive integer
    InvalidNumber { key: String, value: String },
    /// An output format other than "text" or "json"
    InvalidOutputFormat(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBool { key, value } => {
                write!(f, "Invalid boolean for {key}: '{value}'")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "Invalid positive number for {key}: '{value}'")
            }
            ConfigError::InvalidOutputFormat(value) => {
                write!(f, "Invalid output format '{value}', expected 'text' or 'json'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
