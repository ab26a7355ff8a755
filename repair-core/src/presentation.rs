//! Badge colours and labels for the closed status/priority enums.

use crate::entities::DeviceStatus;
use crate::error::parse_variant;
use crate::repairs::{Priority, RepairStatus};
use serde::Serialize;
use std::str::FromStr;
use tracing::warn;

/// Background/foreground class pair for a pill badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Badge {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Badge {
    pub const FALLBACK: Badge = Badge::new("bg-gray-100", "text-gray-800");

    const fn new(background: &'static str, foreground: &'static str) -> Self {
        Self {
            background,
            foreground,
        }
    }

    pub fn class(&self) -> String {
        format!("{} {}", self.background, self.foreground)
    }
}

const RED: Badge = Badge::new("bg-red-100", "text-red-800");
const YELLOW: Badge = Badge::new("bg-yellow-100", "text-yellow-800");
const GREEN: Badge = Badge::new("bg-green-100", "text-green-800");
const BLUE: Badge = Badge::new("bg-blue-100", "text-blue-800");
const PURPLE: Badge = Badge::new("bg-purple-100", "text-purple-800");
const ORANGE: Badge = Badge::new("bg-orange-100", "text-orange-800");

pub trait Presentable: AsRef<str> {
    const KIND: &'static str;

    fn badge(&self) -> Badge;

    /// `waiting_parts` -> `WAITING PARTS`
    fn label(&self) -> String {
        self.as_ref().replace('_', " ").to_uppercase()
    }
}

impl Presentable for DeviceStatus {
    const KIND: &'static str = "device status";

    fn badge(&self) -> Badge {
        match self {
            DeviceStatus::Received => Badge::FALLBACK,
            DeviceStatus::InProgress => YELLOW,
            DeviceStatus::WaitingParts => RED,
            DeviceStatus::Repaired => GREEN,
            DeviceStatus::ReadyPickup => BLUE,
            DeviceStatus::Completed => PURPLE,
        }
    }
}

impl Presentable for RepairStatus {
    const KIND: &'static str = "repair status";

    fn badge(&self) -> Badge {
        match self {
            RepairStatus::Diagnosing => PURPLE,
            RepairStatus::Repairing => BLUE,
            RepairStatus::WaitingParts => ORANGE,
        }
    }
}

impl Presentable for Priority {
    const KIND: &'static str = "priority";

    fn badge(&self) -> Badge {
        match self {
            Priority::High => RED,
            Priority::Medium => YELLOW,
            Priority::Low => GREEN,
        }
    }
}

/// Badge for a raw value that may not belong to `T`; unknown values get
/// [`Badge::FALLBACK`] and a warning instead of an error.
pub fn badge_for_raw<T>(raw: &str) -> Badge
where
    T: Presentable + FromStr,
{
    match parse_variant::<T>(T::KIND, raw) {
        Ok(value) => value.badge(),
        Err(err) => {
            warn!(%err, "no badge mapping; using fallback");
            Badge::FALLBACK
        }
    }
}

/// Human wording used in the update modal's select boxes.
pub fn option_label_status(status: RepairStatus) -> &'static str {
    match status {
        RepairStatus::Diagnosing => "Diagnosing",
        RepairStatus::Repairing => "Repairing",
        RepairStatus::WaitingParts => "Waiting for Parts",
    }
}

pub fn option_label_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

/// Contact-attempt badge: alert at or above `alert`, warning at or above `warn`.
pub fn attempts_badge(attempts: u32, warn: u32, alert: u32) -> Badge {
    if attempts >= alert {
        RED
    } else if attempts >= warn {
        YELLOW
    } else {
        GREEN
    }
}
