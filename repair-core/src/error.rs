use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{field} must be greater than zero")]
    ZeroThreshold { field: &'static str },

    #[error("warning threshold {warn} exceeds alert threshold {alert}")]
    ThresholdOrder { warn: u32, alert: u32 },

    #[error("{field} must not be empty")]
    Blank { field: &'static str },
}

/// Parse a snake_case enum value, tagging failures with the enum's display name.
pub fn parse_variant<T>(kind: &'static str, raw: &str) -> Result<T, ModelError>
where
    T: std::str::FromStr,
{
    raw.parse::<T>().map_err(|_| ModelError::UnknownVariant {
        kind,
        value: raw.to_string(),
    })
}
