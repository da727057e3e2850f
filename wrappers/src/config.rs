//!
//! Runtime settings of a [`Jsonb`](crate::Jsonb) instance.
//!
//! | variable | meaning |
//! |---|---|
//! | `COLLJSON_PRETTY` | `1`, `true` or `yes` to indent the output |
//! | `COLLJSON_KINDS` | comma separated kind names, unset or empty means all |
//!

use crate::common::ContainerKind;
use std::env;
use tracing::{debug, warn};

pub const ENV_PRETTY: &str = "COLLJSON_PRETTY";
pub const ENV_KINDS: &str = "COLLJSON_KINDS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonbConfig {
    /// Indent the JSON text written by `to_json`.
    pub pretty: bool,
    /// Container kinds the registry gets a factory for.
    pub kinds: Vec<ContainerKind>,
}

impl Default for JsonbConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            kinds: ContainerKind::ALL.to_vec(),
        }
    }
}

impl JsonbConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Same as `from_env`, with variables resolved by `get`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let pretty = get(ENV_PRETTY).map(|v| parse_flag(&v)).unwrap_or(false);
        let kinds = get(ENV_KINDS)
            .map(|v| parse_kinds(&v))
            .unwrap_or_else(|| ContainerKind::ALL.to_vec());

        let cfg = Self { pretty, kinds };
        debug!(?cfg, "config loaded from environment");
        cfg
    }
}

fn parse_flag(v: &str) -> bool {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => true,
        "" | "0" | "false" | "no" => false,
        other => {
            warn!(var = ENV_PRETTY, value = other, "unrecognized flag, treated as false");
            false
        }
    }
}

fn parse_kinds(v: &str) -> Vec<ContainerKind> {
    let mut kinds = vec![];
    v.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .for_each(|s| match s.parse::<ContainerKind>() {
            Ok(k) if !kinds.contains(&k) => kinds.push(k),
            Ok(_) => {}
            Err(_) => warn!(var = ENV_KINDS, name = s, "unknown container kind ignored"),
        });

    if kinds.is_empty() {
        if !v.trim().is_empty() {
            warn!(var = ENV_KINDS, "no usable kind listed, enabling all of them");
        }
        return ContainerKind::ALL.to_vec();
    }
    kinds
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> JsonbConfig {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        JsonbConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults() {
        assert_eq!(JsonbConfig::default(), lookup(&[]));
        assert_eq!(JsonbConfig::default(), lookup(&[(ENV_KINDS, " ")]));
    }

    #[test]
    fn pretty_flag() {
        assert!(lookup(&[(ENV_PRETTY, "1")]).pretty);
        assert!(lookup(&[(ENV_PRETTY, "YES")]).pretty);
        assert!(lookup(&[(ENV_PRETTY, " true ")]).pretty);
        assert!(!lookup(&[(ENV_PRETTY, "no")]).pretty);
        assert!(!lookup(&[(ENV_PRETTY, "maybe")]).pretty);
    }

    #[test]
    fn kind_list() {
        let cfg = lookup(&[(ENV_KINDS, "tree_multiset, ImmutableList,bogus,tree_multiset")]);
        assert_eq!(
            vec![ContainerKind::TreeMultiset, ContainerKind::ImmutableList],
            cfg.kinds
        );
        assert_eq!(
            ContainerKind::ALL.to_vec(),
            lookup(&[(ENV_KINDS, "bogus,,")]).kinds
        );
    }
}
