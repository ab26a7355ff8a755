use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};
use tracing::{debug, warn};

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
pub enum Priority {
    High,
    Medium,
    Low,
}

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
pub enum RepairStatus {
    Diagnosing,
    Repairing,
    WaitingParts,
}

/// An active work ticket on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repair {
    pub id: String,
    pub customer: String,
    pub device: String,
    pub issue: String,
    pub start_date: NaiveDate,
    pub estimated_completion: NaiveDate,
    pub technician: String,
    pub priority: Priority,
    pub status: RepairStatus,
}

/// Active repairs plus the update modal's working copy.
///
/// The draft is a detached clone. Edits land on the draft only and the
/// stored list changes in exactly one place, [`RepairBoard::save`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepairBoard {
    repairs: Vec<Repair>,
    draft: Option<Repair>,
}

impl RepairBoard {
    pub fn new(repairs: Vec<Repair>) -> Self {
        Self {
            repairs,
            draft: None,
        }
    }

    pub fn repairs(&self) -> &[Repair] {
        &self.repairs
    }

    pub fn draft(&self) -> Option<&Repair> {
        self.draft.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Opens the modal on a copy of `id`. Replaces any draft already open.
    pub fn open_update(&mut self, id: &str) -> bool {
        match self.repairs.iter().find(|r| r.id == id) {
            Some(repair) => {
                if let Some(previous) = self.draft.replace(repair.clone()) {
                    debug!(previous = %previous.id, repair = %id, "replacing open draft");
                }
                true
            }
            None => {
                warn!(repair = %id, "update requested for unknown repair");
                false
            }
        }
    }

    pub fn edit_status(&mut self, status: RepairStatus) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.status = status;
                true
            }
            None => false,
        }
    }

    pub fn edit_priority(&mut self, priority: Priority) -> bool {
        match self.draft.as_mut() {
            Some(draft) => {
                draft.priority = priority;
                true
            }
            None => false,
        }
    }

    /// Commits the draft by replacing the stored record with the same id.
    ///
    /// The modal closes even if the record vanished in the meantime; in that
    /// case nothing is written and `None` is returned.
    pub fn save(&mut self) -> Option<&Repair> {
        let draft = self.draft.take()?;
        let Some(index) = self.repairs.iter().position(|r| r.id == draft.id) else {
            warn!(repair = %draft.id, "draft no longer matches a stored repair; discarded");
            return None;
        };
        self.repairs[index] = draft;
        Some(&self.repairs[index])
    }

    /// Discards the draft. Returns whether a modal was open.
    pub fn cancel(&mut self) -> bool {
        self.draft.take().is_some()
    }

    pub fn count_with_priority(&self, priority: Priority) -> usize {
        self.repairs.iter().filter(|r| r.priority == priority).count()
    }
}
