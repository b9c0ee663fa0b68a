//! Name gate data structures.

use std::fmt;

/// Where the gate sends an admitted visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRoute {
    /// The guest of honour.
    Birthday,
    /// Everyone else.
    Wishers,
}

impl GateRoute {
    pub fn from_verdict(guest_of_honour: bool) -> Self {
        if guest_of_honour {
            Self::Birthday
        } else {
            Self::Wishers
        }
    }
}

/// An admitted visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    pub name: String,
    pub route: GateRoute,
}

impl Visitor {
    /// Banner shown across the top of the site.
    pub fn greeting(&self) -> String {
        match self.route {
            GateRoute::Birthday => format!("Happy Birthday, {}! 🎂", self.name),
            GateRoute::Wishers => format!("Thanks for the wishes, {}! 🎉", self.name),
        }
    }
}

/// Gate screen phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Opening dance; the form is hidden.
    Dancing,
    /// The name form is shown.
    NameEntry,
    /// A name was sent; dancing while the check runs.
    Submitting,
    /// The check failed; the form returns shortly.
    Retrying,
    /// Done; the visitor may enter.
    Admitted,
}

impl fmt::Display for GatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dancing => "dancing",
            Self::NameEntry => "name entry",
            Self::Submitting => "submitting",
            Self::Retrying => "retrying",
            Self::Admitted => "admitted",
        };
        f.write_str(label)
    }
}

/// Deferred gate transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    ShowForm,
    SubmitDanceDone,
}

/// Limb angles (radians) and offsets for one frame of the dance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DancerPose {
    /// Body turn around the vertical axis.
    pub sway: f64,
    /// Vertical bounce.
    pub bob: f64,
    pub left_arm: f64,
    pub right_arm: f64,
    pub left_leg: f64,
    pub right_leg: f64,
}

impl DancerPose {
    /// Pose at `elapsed_ms` into the dance.
    pub fn at(elapsed_ms: u64) -> Self {
        let t = elapsed_ms as f64 / 1000.0;
        Self {
            sway: (t * 1.5).sin() * 0.5,
            bob: (t * 4.0).sin() * 0.2,
            left_arm: (t * 3.0).sin() * 1.2,
            right_arm: -(t * 3.0).sin() * 1.2,
            left_leg: (t * 2.0).sin() * 0.8,
            right_leg: -(t * 2.0).sin() * 0.8,
        }
    }
}
