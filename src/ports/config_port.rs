//! Configuration access port trait.
//!
//! Adapters only need to supply raw strings; typed lookups are derived here
//! so every config source reads numbers and flags the same way.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.get_string(section, key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get_string(section, key)
            .and_then(|v| parse_flag(&v))
            .unwrap_or(default)
    }
}

/// `true`/`yes`/`1` or `false`/`no`/`0`, case-insensitive.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
