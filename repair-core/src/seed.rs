//! Sample records the pages start from until a backend supplies real ones.

use crate::entities::{Customer, Device, DeviceStatus};
use crate::pickups::PendingPickup;
use crate::repairs::{Priority, Repair, RepairStatus};
use chrono::{NaiveDate, NaiveDateTime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "(555) 123-4567".into(),
            created_at: date(2024, 1, 15),
        },
        Customer {
            id: "2".into(),
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            phone: "(555) 987-6543".into(),
            created_at: date(2024, 2, 1),
        },
    ]
}

pub fn devices() -> Vec<Device> {
    vec![
        Device {
            id: "1".into(),
            customer_id: "1".into(),
            kind: "Laptop".into(),
            brand: "Apple".into(),
            model: "MacBook Pro".into(),
            serial_number: "C02XL0THJGH7".into(),
            issue: "Won't power on".into(),
            status: DeviceStatus::InProgress,
            estimated_completion_date: date(2024, 3, 20),
            created_at: date(2024, 3, 15),
            updated_at: date(2024, 3, 15),
        },
        Device {
            id: "2".into(),
            customer_id: "2".into(),
            kind: "Phone".into(),
            brand: "Samsung".into(),
            model: "Galaxy S21".into(),
            serial_number: "RZ8M91JZEXA".into(),
            issue: "Cracked screen".into(),
            status: DeviceStatus::WaitingParts,
            estimated_completion_date: date(2024, 3, 25),
            created_at: date(2024, 3, 14),
            updated_at: date(2024, 3, 14),
        },
    ]
}

pub fn repairs() -> Vec<Repair> {
    vec![
        Repair {
            id: "1".into(),
            customer: "John Doe".into(),
            device: "MacBook Pro 2021".into(),
            issue: "Won't power on".into(),
            start_date: date(2024, 3, 14),
            estimated_completion: date(2024, 3, 17),
            technician: "Mike Wilson".into(),
            priority: Priority::High,
            status: RepairStatus::Diagnosing,
        },
        Repair {
            id: "2".into(),
            customer: "Sarah Brown".into(),
            device: "iPhone 14 Pro".into(),
            issue: "Cracked screen".into(),
            start_date: date(2024, 3, 15),
            estimated_completion: date(2024, 3, 16),
            technician: "Alice Johnson".into(),
            priority: Priority::Medium,
            status: RepairStatus::Repairing,
        },
        Repair {
            id: "3".into(),
            customer: "Robert Chen".into(),
            device: "Dell XPS 15".into(),
            issue: "Battery replacement".into(),
            start_date: date(2024, 3, 13),
            estimated_completion: date(2024, 3, 18),
            technician: "David Smith".into(),
            priority: Priority::Low,
            status: RepairStatus::WaitingParts,
        },
    ]
}

pub fn pickups() -> Vec<PendingPickup> {
    vec![
        PendingPickup {
            id: "1".into(),
            customer: "John Doe".into(),
            device: "MacBook Pro 2021".into(),
            ready_date: midnight(2024, 3, 15),
            contact_attempts: 2,
            phone: "(555) 123-4567".into(),
        },
        PendingPickup {
            id: "2".into(),
            customer: "Jane Smith".into(),
            device: "iPhone 13".into(),
            ready_date: midnight(2024, 3, 14),
            contact_attempts: 1,
            phone: "(555) 987-6543".into(),
        },
        PendingPickup {
            id: "3".into(),
            customer: "Mike Johnson".into(),
            device: "Samsung Galaxy S21".into(),
            ready_date: midnight(2024, 3, 13),
            contact_attempts: 3,
            phone: "(555) 456-7890".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let ids: HashSet<_> = customers().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 2);
        let ids: HashSet<_> = repairs().into_iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);
        let ids: HashSet<_> = pickups().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn device_owners_exist() {
        let owners: HashSet<_> = customers().into_iter().map(|c| c.id).collect();
        assert!(devices().iter().all(|d| owners.contains(&d.customer_id)));
    }
}
