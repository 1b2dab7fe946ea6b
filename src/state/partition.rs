//! One async state partition and its pure transition function.

use crate::error::FetchError;
use serde::Serialize;
use std::fmt;

/// Identifies one in-flight fetch. Assigned per trigger, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Where a partition is in its fetch lifecycle.
///
/// `Idle` only exists before the first trigger; afterwards a partition moves
/// between `Pending` and one of the two outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// Lifecycle events produced by one trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Lifecycle<T> {
    Pending {
        request_id: RequestId,
    },
    Fulfilled {
        request_id: RequestId,
        payload: Vec<T>,
    },
    Rejected {
        request_id: RequestId,
        error: Option<FetchError>,
    },
}

impl<T> Lifecycle<T> {
    pub fn request_id(&self) -> RequestId {
        match self {
            Lifecycle::Pending { request_id }
            | Lifecycle::Fulfilled { request_id, .. }
            | Lifecycle::Rejected { request_id, .. } => *request_id,
        }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            Lifecycle::Pending { .. } => "pending",
            Lifecycle::Fulfilled { .. } => "fulfilled",
            Lifecycle::Rejected { .. } => "rejected",
        }
    }
}

/// `{loading, error, data}` for one named slice of state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlicePartition<T> {
    phase: Phase,
    error: Option<String>,
    data: Vec<T>,
}

impl<T> Default for SlicePartition<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            error: None,
            data: Vec::new(),
        }
    }
}

impl<T: Clone> SlicePartition<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase == Phase::Pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Apply one lifecycle event, returning the next partition.
    pub fn apply(&self, event: &Lifecycle<T>) -> Self {
        match event {
            Lifecycle::Pending { .. } => Self {
                phase: Phase::Pending,
                error: None,
                data: self.data.clone(),
            },
            Lifecycle::Fulfilled { payload, .. } => Self {
                phase: Phase::Fulfilled,
                error: self.error.clone(),
                data: payload.clone(),
            },
            Lifecycle::Rejected { error, .. } => Self {
                phase: Phase::Rejected,
                error: match error {
                    Some(e) => Some(e.message.clone()),
                    None => self.error.clone(),
                },
                data: self.data.clone(),
            },
        }
    }

    /// Replace `data` wholesale, leaving phase and error alone. The caller
    /// is trusted: the sequence is not checked against the current contents.
    pub fn replace_data(&self, data: Vec<T>) -> Self {
        Self {
            phase: self.phase,
            error: self.error.clone(),
            data,
        }
    }
}
