//! `KEY=VALUE` parameter parsing.
//!
//! Mutating verbs take a trailing sequence of `KEY=VALUE` tokens, split
//! once on the first `=` (values may themselves contain `=`). Operations
//! pull out the specific keys they need via [`ParamMap::require`], which
//! names the missing key in its error.

use std::collections::HashMap;

use crate::error::CliError;

/// String-keyed parameter map built from `KEY=VALUE` CLI tokens.
#[derive(Debug, Default)]
pub struct ParamMap {
    entries: HashMap<String, String>,
}

impl ParamMap {
    /// Parse a sequence of `KEY=VALUE` tokens.
    ///
    /// A token without `=` is a usage error naming the token.
    pub fn parse(tokens: &[String]) -> Result<Self, CliError> {
        let mut entries = HashMap::new();
        for token in tokens {
            let Some((key, value)) = token.split_once('=') else {
                return Err(CliError::Validation {
                    field: token.clone(),
                    reason: "expected KEY=VALUE".into(),
                });
            };
            entries.insert(key.to_owned(), value.to_owned());
        }
        Ok(Self { entries })
    }

    /// Get a required key, erroring with the key name when absent.
    pub fn require(&self, key: &str) -> Result<&str, CliError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| CliError::Validation {
                field: key.to_owned(),
                reason: format!("missing required parameter '{key}=...'"),
            })
    }

    /// All entries as a JSON object (template deployment parameters).
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn splits_once_on_first_equals() {
        let map = ParamMap::parse(&tokens(&["key=a=b=c"])).unwrap();
        assert_eq!(map.require("key").unwrap(), "a=b=c");
    }

    #[test]
    fn token_without_equals_is_usage_error() {
        let result = ParamMap::parse(&tokens(&["vlanId"]));
        assert!(matches!(result, Err(CliError::Validation { .. })));
    }

    #[test]
    fn require_names_the_missing_key() {
        let map = ParamMap::parse(&tokens(&["vlanId=87"])).unwrap();
        let err = map.require("interfaceName").unwrap_err();
        assert!(err.to_string().contains("interfaceName"));
    }

    #[test]
    fn to_json_builds_string_object() {
        let map = ParamMap::parse(&tokens(&["VLANID=3001", "VLANNAME=Data"])).unwrap();
        let json = map.to_json();
        assert_eq!(json["VLANID"], "3001");
        assert_eq!(json["VLANNAME"], "Data");
    }
}
