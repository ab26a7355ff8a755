use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDate,
}

/// Intake lifecycle of a device on the bench.
///
/// Kept separate from [`crate::repairs::RepairStatus`]: the two describe
/// overlapping stages but are not interchangeable.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeviceStatus {
    Received,
    InProgress,
    WaitingParts,
    Repaired,
    ReadyPickup,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    /// Not checked against the customer list.
    pub customer_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub issue: String,
    pub status: DeviceStatus,
    pub estimated_completion_date: NaiveDate,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairNote {
    pub id: String,
    pub device_id: String,
    pub technician_id: String,
    pub note: String,
    pub created_at: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_level: u32,
    pub minimum_stock: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{parse_variant, ModelError};

    #[test]
    fn device_status_uses_snake_case_names() {
        assert_eq!(DeviceStatus::ReadyPickup.as_ref(), "ready_pickup");
        let parsed: DeviceStatus = parse_variant("device status", "waiting_parts").unwrap();
        assert_eq!(parsed, DeviceStatus::WaitingParts);

        let json = serde_json::to_string(&DeviceStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn unknown_device_status_is_rejected() {
        let err = parse_variant::<DeviceStatus>("device status", "lost").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownVariant {
                kind: "device status",
                value: "lost".into()
            }
        );
        assert_eq!(err.to_string(), "unknown device status 'lost'");
    }

    #[test]
    fn device_serializes_kind_as_type() {
        let device = Device {
            id: "1".into(),
            customer_id: "1".into(),
            kind: "Laptop".into(),
            brand: "Apple".into(),
            model: "MacBook Pro".into(),
            serial_number: "C02XL0THJGH7".into(),
            issue: "Won't power on".into(),
            status: DeviceStatus::InProgress,
            estimated_completion_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        };
        let value = serde_json::to_value(&device).unwrap();
        assert_eq!(value["type"], "Laptop");
        assert_eq!(value["status"], "in_progress");
        assert_eq!(value["estimated_completion_date"], "2024-03-20");
    }
}
