//! Settings - Stack-wide switches, with environment overrides

/// Stack settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Run full schema validation when elements are registered
    pub type_check: bool,
    /// Attach `"//": {"metadata": ...}` entries to synthesized output
    pub emit_metadata: bool,
    /// Pretty-print synthesized JSON
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            type_check: false,
            emit_metadata: true,
            pretty: true,
        }
    }
}

impl Settings {
    pub const TYPE_CHECK_ENV: &'static str = "BERTH_TYPE_CHECK";
    pub const EMIT_METADATA_ENV: &'static str = "BERTH_EMIT_METADATA";
    pub const PRETTY_ENV: &'static str = "BERTH_PRETTY";

    /// Defaults overridden by `BERTH_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |name: &str| lookup(name).and_then(|raw| parse_flag(name, &raw));

        if let Some(v) = flag(Self::TYPE_CHECK_ENV) {
            self.type_check = v;
        }
        if let Some(v) = flag(Self::EMIT_METADATA_ENV) {
            self.emit_metadata = v;
        }
        if let Some(v) = flag(Self::PRETTY_ENV) {
            self.pretty = v;
        }
        self
    }

    pub fn type_check(mut self, enabled: bool) -> Self {
        self.type_check = enabled;
        self
    }

    pub fn emit_metadata(mut self, enabled: bool) -> Self {
        self.emit_metadata = enabled;
        self
    }

    pub fn pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }
}

fn parse_flag(name: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        other => {
            log::warn!("ignoring {}={:?}: expected a boolean", name, other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_env(vars: &[(&str, &str)]) -> Settings {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::default().with_overrides(|name| env.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert!(!settings.type_check);
        assert!(settings.emit_metadata);
        assert!(settings.pretty);
    }

    #[test]
    fn env_overrides_defaults() {
        let settings = with_env(&[("BERTH_TYPE_CHECK", "yes"), ("BERTH_PRETTY", "0")]);
        assert!(settings.type_check);
        assert!(settings.emit_metadata);
        assert!(!settings.pretty);
    }

    #[test]
    fn unrecognized_values_are_ignored() {
        let settings = with_env(&[("BERTH_EMIT_METADATA", "maybe")]);
        assert!(settings.emit_metadata);
    }

    #[test]
    fn builder_methods() {
        let settings = Settings::default().type_check(true).pretty(false);
        assert!(settings.type_check);
        assert!(!settings.pretty);
    }
}
