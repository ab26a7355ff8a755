//! Dashboard page state: active repairs, pending pickups and the actions
//! that drive them.

use crate::effects::{Effect, Effectful};
use crate::pickups::{PendingPickup, PickupQueue};
use crate::repairs::{Priority, Repair, RepairBoard, RepairStatus};
use crate::seed;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardAction {
    OpenUpdate { repair_id: String },
    EditStatus(RepairStatus),
    EditPriority(Priority),
    SaveChanges,
    CloseModal,
    Contact { pickup_id: String },
    MarkPickedUp { pickup_id: String },
}

impl DashboardAction {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardAction::OpenUpdate { .. } => "open_update",
            DashboardAction::EditStatus(_) => "edit_status",
            DashboardAction::EditPriority(_) => "edit_priority",
            DashboardAction::SaveChanges => "save_changes",
            DashboardAction::CloseModal => "close_modal",
            DashboardAction::Contact { .. } => "contact",
            DashboardAction::MarkPickedUp { .. } => "mark_picked_up",
        }
    }
}

impl Effectful for DashboardAction {
    fn effect(&self) -> Effect {
        match self {
            DashboardAction::OpenUpdate { .. }
            | DashboardAction::EditStatus(_)
            | DashboardAction::EditPriority(_)
            | DashboardAction::CloseModal => Effect::Draft,
            DashboardAction::SaveChanges | DashboardAction::Contact { .. } => Effect::Mutate,
            DashboardAction::MarkPickedUp { .. } => Effect::Irreversible,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Applied,
    /// Nothing matched; state is unchanged.
    Ignored,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dashboard {
    board: RepairBoard,
    pickups: PickupQueue,
}

impl Dashboard {
    pub fn new(repairs: Vec<Repair>, pickups: Vec<PendingPickup>) -> Self {
        Self {
            board: RepairBoard::new(repairs),
            pickups: PickupQueue::new(pickups),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::repairs(), seed::pickups())
    }

    pub fn board(&self) -> &RepairBoard {
        &self.board
    }

    pub fn pickups(&self) -> &PickupQueue {
        &self.pickups
    }

    pub fn apply(&mut self, action: DashboardAction) -> ActionOutcome {
        let applied = match &action {
            DashboardAction::OpenUpdate { repair_id } => self.board.open_update(repair_id),
            DashboardAction::EditStatus(status) => self.board.edit_status(*status),
            DashboardAction::EditPriority(priority) => self.board.edit_priority(*priority),
            DashboardAction::SaveChanges => self.board.save().is_some(),
            DashboardAction::CloseModal => self.board.cancel(),
            DashboardAction::Contact { pickup_id } => self.pickups.contact(pickup_id).is_some(),
            DashboardAction::MarkPickedUp { pickup_id } => {
                self.pickups.mark_picked_up(pickup_id).is_some()
            }
        };

        if !applied {
            debug!(action = action.name(), "action ignored");
            return ActionOutcome::Ignored;
        }

        let effect = action.effect();
        if !effect.reversible() {
            info!(action = action.name(), ?action, "record removed");
        } else if effect.touches_store() {
            debug!(action = action.name(), ?action, "record updated");
        } else {
            debug!(action = action.name(), "draft updated");
        }
        ActionOutcome::Applied
    }
}
