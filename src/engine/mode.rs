//! Camera mode state machine.
//!
//! [`ModeMachine`] holds the current [`CameraMode`], the configured cycle
//! order, and at most one outstanding orientation-permission request. The
//! engine performs the side effects of each transition; this module only
//! decides which transition happens.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::command::Capability;
use crate::controls::ControllerKind;

/// Which input source drives the camera.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Touch and mouse gestures orbit and zoom.
    Gesture,
    /// Device heading drives yaw; gestures still zoom.
    Gyro,
    /// Unconstrained roam with keys, mouse and touch.
    Free,
}

impl CameraMode {
    /// Upper-case label for overlays and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gesture => "GESTURE",
            Self::Gyro => "GYRO",
            Self::Free => "FREE",
        }
    }

    /// Whether `controller` may write `capability` in this mode.
    #[must_use]
    pub fn grants(self, controller: ControllerKind, capability: Capability) -> bool {
        match (self, controller) {
            (Self::Gesture, ControllerKind::Gesture)
            | (Self::Free, ControllerKind::Free) => true,
            (Self::Gyro, ControllerKind::Gyro) => capability == Capability::Yaw,
            (Self::Gyro, ControllerKind::Gesture) => capability == Capability::Zoom,
            _ => false,
        }
    }
}

impl std::fmt::Display for CameraMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one orientation-permission request. Resolutions carrying an
/// outdated ticket are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionTicket(pub u64);

/// Answer to a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The user allowed orientation access.
    Granted,
    /// The user refused, or the platform failed the request.
    Denied,
}

/// What a [`ModeMachine::resolve`] call means for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The ticket was superseded or never issued; nothing changes.
    Stale,
    /// Permission granted; commit the transition to `target`.
    Granted {
        /// Mode the request was made for.
        target: CameraMode,
    },
    /// Permission denied; fall back to GESTURE.
    Denied {
        /// Mode the request was made for.
        target: CameraMode,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    ticket: PermissionTicket,
    target: CameraMode,
}

/// Current mode, cycle order and the outstanding permission request.
#[derive(Debug, Clone)]
pub struct ModeMachine {
    cycle: Vec<CameraMode>,
    current: CameraMode,
    pending: Option<Pending>,
    next_ticket: u64,
}

impl ModeMachine {
    /// Start in the first mode of `cycle` (GESTURE if empty).
    #[must_use]
    pub fn new(cycle: Vec<CameraMode>) -> Self {
        let current = cycle.first().copied().unwrap_or(CameraMode::Gesture);
        Self {
            cycle,
            current,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Committed mode.
    #[must_use]
    pub fn current(&self) -> CameraMode {
        self.current
    }

    /// Mode a pending permission request would enter, if any.
    #[must_use]
    pub fn pending_target(&self) -> Option<CameraMode> {
        self.pending.map(|p| p.target)
    }

    /// Ticket of the outstanding request, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<PermissionTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// The mode `toggle_mode` moves to next. Advances from the pending
    /// target when a request is outstanding.
    #[must_use]
    pub fn next_target(&self) -> CameraMode {
        let from = self.pending_target().unwrap_or(self.current);
        match self.cycle.iter().position(|m| *m == from) {
            Some(i) => self.cycle[(i + 1) % self.cycle.len()],
            None => self.cycle.first().copied().unwrap_or(from),
        }
    }

    /// Record a permission request for `target`, superseding any earlier
    /// one.
    pub fn begin_request(&mut self, target: CameraMode) -> PermissionTicket {
        self.next_ticket += 1;
        let ticket = PermissionTicket(self.next_ticket);
        self.pending = Some(Pending { ticket, target });
        ticket
    }

    /// Drop any outstanding request. Returns whether one was dropped.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Make `mode` current and drop any outstanding request. Returns the
    /// previous mode.
    pub fn commit(&mut self, mode: CameraMode) -> CameraMode {
        self.pending = None;
        std::mem::replace(&mut self.current, mode)
    }

    /// Match a permission answer against the outstanding request.
    pub fn resolve(&mut self, ticket: PermissionTicket, status: PermissionStatus) -> Resolution {
        match self.pending {
            Some(p) if p.ticket == ticket => {
                self.pending = None;
                match status {
                    PermissionStatus::Granted => Resolution::Granted { target: p.target },
                    PermissionStatus::Denied => Resolution::Denied { target: p.target },
                }
            }
            _ => Resolution::Stale,
        }
    }
}
