use crate::state::DeskState;
use repair_core::dto::{self, CustomerRowDto, DashboardDto, DeviceRowDto, ListDto, ShellDto};
use repair_core::nav::Route;
use repair_core::repairs::{Priority, RepairStatus};
use repair_core::{ActionOutcome, DashboardAction};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageDto {
    Dashboard(DashboardDto),
    Customers(ListDto<CustomerRowDto>),
    Devices(ListDto<DeviceRowDto>),
    /// Sidebar target with no page behind it.
    Unrouted { path: String },
}

#[derive(Clone, Debug, Serialize)]
pub struct ScreenDto {
    pub shell: ShellDto,
    pub page: PageDto,
}

/// Project the page at `path`. Unknown paths render like unrouted targets.
pub fn render(state: &DeskState, path: &str) -> ScreenDto {
    let page = match Route::from_path(path) {
        Some(route) if !route.is_routed() => {
            debug!(path = route.path(), "navigation target without a page");
            PageDto::Unrouted {
                path: route.path().into(),
            }
        }
        Some(Route::Customers) => PageDto::Customers(dto::customer_list(&state.customers)),
        Some(Route::Devices) => PageDto::Devices(dto::device_list(&state.devices)),
        // the dashboard is the only routed target left
        Some(_) => PageDto::Dashboard(dto::dashboard(&state.dashboard, &state.settings)),
        None => {
            warn!(%path, "unknown path");
            PageDto::Unrouted { path: path.into() }
        }
    };
    ScreenDto {
        shell: dto::shell(path, &state.settings),
        page,
    }
}

/// Apply a search term to whichever list page `path` names.
pub fn search(state: &mut DeskState, path: &str, query: &str) -> bool {
    match Route::from_path(path) {
        Some(Route::Customers) => state.customers.set_query(query),
        Some(Route::Devices) => state.devices.set_query(query),
        _ => return false,
    }
    true
}

/// The walkthrough `--demo` replays against a fresh dashboard.
pub fn demo_script() -> Vec<(&'static str, Vec<DashboardAction>)> {
    vec![
        (
            "contact pickup 2",
            vec![DashboardAction::Contact {
                pickup_id: "2".into(),
            }],
        ),
        (
            "update repair 1 to repairing and save",
            vec![
                DashboardAction::OpenUpdate {
                    repair_id: "1".into(),
                },
                DashboardAction::EditStatus(RepairStatus::Repairing),
                DashboardAction::SaveChanges,
            ],
        ),
        (
            "raise repair 2 to high, then cancel",
            vec![
                DashboardAction::OpenUpdate {
                    repair_id: "2".into(),
                },
                DashboardAction::EditPriority(Priority::High),
                DashboardAction::CloseModal,
            ],
        ),
        (
            "pickup 3 collected",
            vec![DashboardAction::MarkPickedUp {
                pickup_id: "3".into(),
            }],
        ),
    ]
}

/// Apply one demo step; returns how many actions were ignored.
pub fn apply_step(state: &mut DeskState, actions: Vec<DashboardAction>) -> usize {
    actions
        .into_iter()
        .map(|action| state.dashboard.apply(action))
        .filter(|outcome| *outcome == ActionOutcome::Ignored)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use repair_core::ShopSettings;

    fn state() -> DeskState {
        DeskState::seeded(ShopSettings::default())
    }

    #[test]
    fn renders_routed_pages() {
        let state = state();
        let screen = render(&state, "/");
        assert_eq!(screen.shell.title, "Dashboard");
        match screen.page {
            PageDto::Dashboard(page) => {
                assert_eq!(page.repairs.len(), 3);
                assert!(page.modal.is_none());
            }
            other => panic!("expected dashboard, got {other:?}"),
        }

        assert!(matches!(render(&state, "/customers").page, PageDto::Customers(_)));
        assert!(matches!(render(&state, "/devices").page, PageDto::Devices(_)));
    }

    #[test]
    fn unrouted_targets_render_placeholder() {
        let state = state();
        let screen = render(&state, "/inventory");
        assert_eq!(screen.shell.title, "Inventory");
        match screen.page {
            PageDto::Unrouted { path } => assert_eq!(path, "/inventory"),
            other => panic!("expected placeholder, got {other:?}"),
        }

        let screen = render(&state, "/missing");
        assert_eq!(screen.shell.title, "");
        assert!(matches!(screen.page, PageDto::Unrouted { .. }));
    }

    #[test]
    fn every_sidebar_target_with_a_page_renders_one() {
        let state = state();
        for item in dto::shell("/", &state.settings).nav {
            let unrouted = matches!(render(&state, item.href).page, PageDto::Unrouted { .. });
            assert_eq!(unrouted, !item.route.is_routed(), "{}", item.href);
        }
    }

    #[test]
    fn search_only_applies_to_list_pages() {
        let mut state = state();
        assert!(search(&mut state, "/customers", "jane"));
        assert!(!search(&mut state, "/", "jane"));

        match render(&state, "/customers").page {
            PageDto::Customers(list) => {
                assert_eq!(list.query, "jane");
                assert_eq!(list.rows.len(), 1);
                assert_eq!(list.rows[0].email, "jane@example.com");
            }
            other => panic!("expected customers, got {other:?}"),
        }
    }

    #[test]
    fn demo_script_applies_cleanly() {
        let mut state = state();
        for (_, actions) in demo_script() {
            assert_eq!(apply_step(&mut state, actions), 0);
        }

        let repairs = state.dashboard.board().repairs();
        assert_eq!(repairs[0].status, RepairStatus::Repairing);
        assert_eq!(repairs[1].priority, Priority::Medium);

        let pickups = state.dashboard.pickups().pickups();
        let ids: Vec<_> = pickups.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(pickups[1].contact_attempts, 2);
    }

    #[test]
    fn page_json_is_tagged() {
        let value = serde_json::to_value(render(&state(), "/devices")).unwrap();
        assert_eq!(value["page"]["page"], "devices");
        assert_eq!(value["page"]["rows"][0]["title"], "Apple MacBook Pro");
        assert_eq!(value["shell"]["nav"][2]["active"], true);
    }
}
