use repair_core::entities::{Customer, Device};
use repair_core::search::ListPage;
use repair_core::{seed, Dashboard, ShopSettings};

/// One instance of every page, each owning its own seeded collection.
#[derive(Clone, Debug)]
pub struct DeskState {
    pub settings: ShopSettings,
    pub dashboard: Dashboard,
    pub customers: ListPage<Customer>,
    pub devices: ListPage<Device>,
}

impl DeskState {
    pub fn seeded(settings: ShopSettings) -> Self {
        Self {
            settings,
            dashboard: Dashboard::seeded(),
            customers: ListPage::new(seed::customers()),
            devices: ListPage::new(seed::devices()),
        }
    }
}
