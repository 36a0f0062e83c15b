use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Lifecycle of a record that is hidden rather than removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeletionStatus {
    Active,
    Deleted { at: DateTime<Utc> },
}

impl Default for DeletionStatus {
    fn default() -> Self {
        DeletionStatus::Active
    }
}

impl DeletionStatus {
    /// Rebuilds the status from the `is_deleted` / `deleted_at` column pair.
    /// Rows flagged deleted without a timestamp fall back to the epoch.
    pub fn from_columns(is_deleted: bool, deleted_at: Option<DateTime<FixedOffset>>) -> Self {
        if !is_deleted {
            return DeletionStatus::Active;
        }

        DeletionStatus::Deleted {
            at: deleted_at
                .map(|at| at.with_timezone(&Utc))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }

    pub fn to_columns(self) -> (bool, Option<DateTime<FixedOffset>>) {
        match self {
            DeletionStatus::Active => (false, None),
            DeletionStatus::Deleted { at } => (true, Some(at.fixed_offset())),
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, DeletionStatus::Deleted { .. })
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            DeletionStatus::Active => None,
            DeletionStatus::Deleted { at } => Some(*at),
        }
    }
}

/// Capability shared by entities that support soft deletion.
pub trait Deletable {
    fn deletion_status(&self) -> DeletionStatus;

    fn set_deletion_status(&mut self, status: DeletionStatus);

    fn is_deleted(&self) -> bool {
        self.deletion_status().is_deleted()
    }

    /// Marks the entity deleted. A second call keeps the first timestamp.
    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        if !self.is_deleted() {
            self.set_deletion_status(DeletionStatus::Deleted { at });
        }
    }
}
