pub mod dashboard;
pub mod dto;
pub mod effects;
pub mod entities;
pub mod error;
pub mod nav;
pub mod pickups;
pub mod presentation;
pub mod repairs;
pub mod search;
pub mod seed;
pub mod settings;

pub use dashboard::{ActionOutcome, Dashboard, DashboardAction};
pub use error::{ModelError, SettingsError};
pub use settings::ShopSettings;
