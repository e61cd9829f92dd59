/// Helm `--set` overrides
use std::collections::BTreeMap;
use thiserror::Error;

/// Chart values passed to helm as `--set key=value`, kept in key order
pub type Overrides = BTreeMap<String, String>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    #[error("incorrect format for custom flag \"{0}\", expected key=value")]
    MissingSeparator(String),

    #[error("custom flag \"{0}\" has an empty key")]
    EmptyKey(String),
}

/// Merge user-supplied `key=value` flags over the defaults in `overrides`
///
/// Each flag is split on its first `=`, so values may themselves contain
/// `=`. Later flags win over earlier ones and over defaults.
pub fn merge_flags<I, S>(overrides: &mut Overrides, custom_flags: I) -> Result<(), OverrideError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for flag in custom_flags {
        let flag = flag.as_ref();
        let (key, value) = flag
            .split_once('=')
            .ok_or_else(|| OverrideError::MissingSeparator(flag.to_string()))?;

        if key.is_empty() {
            return Err(OverrideError::EmptyKey(flag.to_string()));
        }

        overrides.insert(key.to_string(), value.to_string());
    }

    Ok(())
}
