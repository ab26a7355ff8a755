//! Render-ready projections of page state.
//!
//! Every function here is a pure function of its inputs; the UI draws these
//! structs and the desk binary prints them.

use crate::dashboard::Dashboard;
use crate::entities::{Customer, Device};
use crate::nav::{navigation, NavItem, Route};
use crate::pickups::PendingPickup;
use crate::presentation::{
    attempts_badge, option_label_priority, option_label_status, Presentable,
};
use crate::repairs::{Priority, Repair, RepairStatus};
use crate::search::ListPage;
use crate::settings::ShopSettings;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatCardDto {
    pub name: String,
    pub value: String,
    pub tone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepairRowDto {
    pub id: String,
    pub customer: String,
    pub device: String,
    pub issue: String,
    pub technician: String,
    pub status_label: String,
    pub status_class: String,
    pub priority_label: String,
    pub priority_class: String,
    pub started: String,
    pub estimated: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickupRowDto {
    pub id: String,
    pub customer: String,
    pub device: String,
    pub ready_date: String,
    pub ready_time: String,
    pub attempts_label: String,
    pub attempts_class: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionDto {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairModalDto {
    pub repair_id: String,
    pub heading: String,
    pub status: String,
    pub priority: String,
    pub status_options: Vec<OptionDto>,
    pub priority_options: Vec<OptionDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardDto {
    pub stats: Vec<StatCardDto>,
    pub repairs: Vec<RepairRowDto>,
    pub pickups: Vec<PickupRowDto>,
    pub modal: Option<RepairModalDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerRowDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceRowDto {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub serial_number: String,
    pub issue: String,
    pub status_label: String,
    pub status_class: String,
    pub estimated: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDto<R> {
    pub query: String,
    pub total: usize,
    pub rows: Vec<R>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShellDto {
    pub shop_name: String,
    pub title: String,
    pub operator: String,
    pub nav: Vec<NavItem>,
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn long_date(at: NaiveDateTime) -> String {
    at.format("%b %-d, %Y").to_string()
}

fn clock_time(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

fn numeric_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn shell(current_path: &str, settings: &ShopSettings) -> ShellDto {
    let title = Route::from_path(current_path)
        .map(|route| route.label())
        .unwrap_or_default();
    ShellDto {
        shop_name: settings.shop_name.clone(),
        title: title.to_string(),
        operator: settings.operator_name.clone(),
        nav: navigation(current_path),
    }
}

pub fn repair_row(repair: &Repair) -> RepairRowDto {
    RepairRowDto {
        id: repair.id.clone(),
        customer: repair.customer.clone(),
        device: repair.device.clone(),
        issue: repair.issue.clone(),
        technician: repair.technician.clone(),
        status_label: repair.status.label(),
        status_class: repair.status.badge().class(),
        priority_label: repair.priority.label(),
        priority_class: repair.priority.badge().class(),
        started: format!("Start: {}", short_date(repair.start_date)),
        estimated: format!("Est: {}", short_date(repair.estimated_completion)),
    }
}

pub fn pickup_row(pickup: &PendingPickup, settings: &ShopSettings) -> PickupRowDto {
    let badge = attempts_badge(
        pickup.contact_attempts,
        settings.pickup_warn_attempts,
        settings.pickup_alert_attempts,
    );
    PickupRowDto {
        id: pickup.id.clone(),
        customer: pickup.customer.clone(),
        device: pickup.device.clone(),
        ready_date: long_date(pickup.ready_date),
        ready_time: clock_time(pickup.ready_date),
        attempts_label: format!("{} attempts", pickup.contact_attempts),
        attempts_class: badge.class(),
        phone: pickup.phone.clone(),
    }
}

pub fn repair_modal(draft: &Repair) -> RepairModalDto {
    let status_options = RepairStatus::iter()
        .map(|status| OptionDto {
            value: status.as_ref().to_string(),
            label: option_label_status(status).to_string(),
        })
        .collect();
    let priority_options = [Priority::Low, Priority::Medium, Priority::High]
        .into_iter()
        .map(|priority| OptionDto {
            value: priority.as_ref().to_string(),
            label: option_label_priority(priority).to_string(),
        })
        .collect();

    RepairModalDto {
        repair_id: draft.id.clone(),
        heading: format!("{} - {}", draft.customer, draft.device),
        status: draft.status.as_ref().to_string(),
        priority: draft.priority.as_ref().to_string(),
        status_options,
        priority_options,
    }
}

pub fn stat_cards(dashboard: &Dashboard) -> Vec<StatCardDto> {
    let board = dashboard.board();
    let queue = dashboard.pickups();
    [
        ("Active Repairs", board.repairs().len(), "blue"),
        ("Pending Pickup", queue.pickups().len(), "green"),
        ("Urgent", board.count_with_priority(Priority::High), "red"),
        ("Completed Today", queue.collected() as usize, "indigo"),
    ]
    .into_iter()
    .map(|(name, value, tone)| StatCardDto {
        name: name.into(),
        value: value.to_string(),
        tone: tone.into(),
    })
    .collect()
}

pub fn dashboard(dashboard: &Dashboard, settings: &ShopSettings) -> DashboardDto {
    DashboardDto {
        stats: stat_cards(dashboard),
        repairs: dashboard.board().repairs().iter().map(repair_row).collect(),
        pickups: dashboard
            .pickups()
            .pickups()
            .iter()
            .map(|p| pickup_row(p, settings))
            .collect(),
        modal: dashboard.board().draft().map(repair_modal),
    }
}

pub fn customer_row(customer: &Customer) -> CustomerRowDto {
    CustomerRowDto {
        id: customer.id.clone(),
        name: customer.name.clone(),
        email: customer.email.clone(),
        phone: customer.phone.clone(),
        joined: numeric_date(customer.created_at),
    }
}

pub fn device_row(device: &Device) -> DeviceRowDto {
    DeviceRowDto {
        id: device.id.clone(),
        title: format!("{} {}", device.brand, device.model),
        kind: device.kind.clone(),
        serial_number: device.serial_number.clone(),
        issue: device.issue.clone(),
        status_label: device.status.label(),
        status_class: device.status.badge().class(),
        estimated: numeric_date(device.estimated_completion_date),
    }
}

pub fn customer_list(page: &ListPage<Customer>) -> ListDto<CustomerRowDto> {
    ListDto {
        query: page.query().to_string(),
        total: page.records().len(),
        rows: page.visible().into_iter().map(customer_row).collect(),
    }
}

pub fn device_list(page: &ListPage<Device>) -> ListDto<DeviceRowDto> {
    ListDto {
        query: page.query().to_string(),
        total: page.records().len(),
        rows: page.visible().into_iter().map(device_row).collect(),
    }
}
