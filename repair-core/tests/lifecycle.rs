use proptest::prelude::*;
use repair_core::dto;
use repair_core::repairs::{Priority, RepairStatus};
use repair_core::search::filter_records;
use repair_core::{seed, ActionOutcome, Dashboard, DashboardAction, ShopSettings};
use strum::IntoEnumIterator;

fn arb_status() -> impl Strategy<Value = RepairStatus> {
    prop::sample::select(RepairStatus::iter().collect::<Vec<_>>())
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::iter().collect::<Vec<_>>())
}

fn arb_edit() -> impl Strategy<Value = DashboardAction> {
    prop_oneof![
        arb_status().prop_map(DashboardAction::EditStatus),
        arb_priority().prop_map(DashboardAction::EditPriority),
    ]
}

/// Ids "1".."3" exist in the seed; "4" never does.
fn arb_id() -> impl Strategy<Value = String> {
    (1u8..=4).prop_map(|n| n.to_string())
}

fn arb_action() -> impl Strategy<Value = DashboardAction> {
    prop_oneof![
        arb_id().prop_map(|repair_id| DashboardAction::OpenUpdate { repair_id }),
        arb_edit(),
        Just(DashboardAction::SaveChanges),
        Just(DashboardAction::CloseModal),
        arb_id().prop_map(|pickup_id| DashboardAction::Contact { pickup_id }),
        arb_id().prop_map(|pickup_id| DashboardAction::MarkPickedUp { pickup_id }),
    ]
}

fn open(id: &str) -> DashboardAction {
    DashboardAction::OpenUpdate {
        repair_id: id.into(),
    }
}

proptest! {
    /// Cancel after any edits leaves the stored repairs exactly as before.
    #[test]
    fn cancel_never_touches_store(id in 1u8..=3, edits in prop::collection::vec(arb_edit(), 0..8)) {
        let mut dashboard = Dashboard::seeded();
        let before = dashboard.board().repairs().to_vec();

        dashboard.apply(open(&id.to_string()));
        for edit in edits {
            dashboard.apply(edit);
        }
        prop_assert_eq!(dashboard.apply(DashboardAction::CloseModal), ActionOutcome::Applied);

        prop_assert_eq!(dashboard.board().repairs(), before.as_slice());
        prop_assert!(dashboard.board().draft().is_none());
    }

    /// Save replaces exactly the edited record and keeps the length.
    #[test]
    fn save_replaces_only_matching_id(id in 1u8..=3, edits in prop::collection::vec(arb_edit(), 0..8)) {
        let id = id.to_string();
        let mut dashboard = Dashboard::seeded();
        let before = dashboard.board().repairs().to_vec();

        dashboard.apply(open(&id));
        for edit in edits {
            dashboard.apply(edit);
        }
        let draft = dashboard.board().draft().cloned().unwrap();
        prop_assert_eq!(dashboard.apply(DashboardAction::SaveChanges), ActionOutcome::Applied);

        let after = dashboard.board().repairs();
        prop_assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after) {
            if old.id == id {
                prop_assert_eq!(new, &draft);
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    /// Contact bumps one counter by one; picked-up removes exactly one id.
    #[test]
    fn pickup_actions_are_exact(id in 1u8..=3) {
        let id = id.to_string();
        let mut dashboard = Dashboard::seeded();
        let before = dashboard.pickups().pickups().to_vec();

        dashboard.apply(DashboardAction::Contact { pickup_id: id.clone() });
        for (old, new) in before.iter().zip(dashboard.pickups().pickups()) {
            let expected = if old.id == id { old.contact_attempts + 1 } else { old.contact_attempts };
            prop_assert_eq!(new.contact_attempts, expected);
            prop_assert_eq!(&new.customer, &old.customer);
            prop_assert_eq!(&new.phone, &old.phone);
            prop_assert_eq!(new.ready_date, old.ready_date);
        }

        dashboard.apply(DashboardAction::MarkPickedUp { pickup_id: id.clone() });
        let after = dashboard.pickups().pickups();
        prop_assert_eq!(after.len(), before.len() - 1);
        prop_assert!(after.iter().all(|p| p.id != id));
    }

    /// No action sequence adds or drops repairs, and contact counts never fall.
    #[test]
    fn arbitrary_sequences_hold_invariants(actions in prop::collection::vec(arb_action(), 0..32)) {
        let settings = ShopSettings::default();
        let mut dashboard = Dashboard::seeded();

        for action in actions {
            let before = dashboard.pickups().pickups().to_vec();
            dashboard.apply(action);

            prop_assert_eq!(dashboard.board().repairs().len(), 3);
            for pickup in dashboard.pickups().pickups() {
                let old = before.iter().find(|p| p.id == pickup.id).unwrap();
                prop_assert!(pickup.contact_attempts >= old.contact_attempts);
            }
            prop_assert_eq!(
                dto::dashboard(&dashboard, &settings),
                dto::dashboard(&dashboard, &settings)
            );
        }
    }

    /// Filtering is idempotent and keeps source order.
    #[test]
    fn filtering_is_idempotent(query in "[a-zA-Z0-9@() .-]{0,5}") {
        let customers = seed::customers();
        let once: Vec<_> = filter_records(&customers, &query).into_iter().cloned().collect();
        let twice: Vec<_> = filter_records(&once, &query).into_iter().cloned().collect();
        prop_assert_eq!(&once, &twice);

        let mut source = customers.iter();
        for hit in &once {
            prop_assert!(source.any(|c| c == hit), "hits must appear in source order");
        }
    }
}

#[test]
fn contact_scenario() {
    let mut dashboard = Dashboard::seeded();
    let before = dashboard.pickups().pickups().to_vec();

    dashboard.apply(DashboardAction::Contact {
        pickup_id: "2".into(),
    });

    let after = dashboard.pickups().pickups();
    assert_eq!(after[1].id, "2");
    assert_eq!(after[1].contact_attempts, 2);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
}

#[test]
fn update_and_save_scenario() {
    let mut dashboard = Dashboard::seeded();
    let before = dashboard.board().repairs().to_vec();
    assert_eq!(before[0].status, RepairStatus::Diagnosing);

    dashboard.apply(open("1"));
    dashboard.apply(DashboardAction::EditStatus(RepairStatus::Repairing));
    dashboard.apply(DashboardAction::SaveChanges);

    let after = dashboard.board().repairs();
    assert_eq!(after[0].status, RepairStatus::Repairing);
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2], before[2]);
}

#[test]
fn customer_search_scenario() {
    let customers = seed::customers();
    let jane = filter_records(&customers, "jane");
    assert_eq!(jane.len(), 1);
    assert_eq!(jane[0].email, "jane@example.com");
    assert_eq!(filter_records(&customers, "555").len(), customers.len());
}
