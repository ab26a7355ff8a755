use crate::error::SettingsError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSettings {
    /// Brand shown at the top of the sidebar.
    #[serde(default = "default_shop_name")]
    pub shop_name: String,

    /// Placeholder identity shown in the header until auth exists.
    #[serde(default = "default_operator_name")]
    pub operator_name: String,

    #[serde(default = "default_pickup_warn_attempts")]
    pub pickup_warn_attempts: u32,

    #[serde(default = "default_pickup_alert_attempts")]
    pub pickup_alert_attempts: u32,
}

fn default_shop_name() -> String {
    "Device Tracker".into()
}

fn default_operator_name() -> String {
    "Admin User".into()
}

fn default_pickup_warn_attempts() -> u32 {
    2
}

fn default_pickup_alert_attempts() -> u32 {
    3
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            shop_name: default_shop_name(),
            operator_name: default_operator_name(),
            pickup_warn_attempts: default_pickup_warn_attempts(),
            pickup_alert_attempts: default_pickup_alert_attempts(),
        }
    }
}

impl ShopSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.shop_name.trim().is_empty() {
            return Err(SettingsError::Blank { field: "shop_name" });
        }
        if self.pickup_warn_attempts == 0 {
            return Err(SettingsError::ZeroThreshold {
                field: "pickup_warn_attempts",
            });
        }
        if self.pickup_alert_attempts == 0 {
            return Err(SettingsError::ZeroThreshold {
                field: "pickup_alert_attempts",
            });
        }
        if self.pickup_warn_attempts > self.pickup_alert_attempts {
            return Err(SettingsError::ThresholdOrder {
                warn: self.pickup_warn_attempts,
                alert: self.pickup_alert_attempts,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = ShopSettings::default();
        assert_eq!(settings.shop_name, "Device Tracker");
        assert_eq!(settings.operator_name, "Admin User");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: ShopSettings =
            serde_json::from_str(r#"{"pickup_alert_attempts": 5}"#).unwrap();
        assert_eq!(settings.pickup_warn_attempts, 2);
        assert_eq!(settings.pickup_alert_attempts, 5);
        assert_eq!(settings.operator_name, "Admin User");
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let settings = ShopSettings {
            pickup_warn_attempts: 4,
            pickup_alert_attempts: 3,
            ..ShopSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::ThresholdOrder { warn: 4, alert: 3 })
        );
    }

    #[test]
    fn rejects_zero_and_blank() {
        let zero = ShopSettings {
            pickup_warn_attempts: 0,
            ..ShopSettings::default()
        };
        assert!(matches!(
            zero.validate(),
            Err(SettingsError::ZeroThreshold { .. })
        ));

        let blank = ShopSettings {
            shop_name: "  ".into(),
            ..ShopSettings::default()
        };
        assert_eq!(
            blank.validate(),
            Err(SettingsError::Blank { field: "shop_name" })
        );
    }
}
