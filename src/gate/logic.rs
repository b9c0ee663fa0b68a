//! Name gate flow: opening dance, name form, verification round-trip.

use super::types::*;
use super::verifier::{NameVerifier, VerifyError};
use crate::core::constants::*;
use crate::core::timer::TimerQueue;
use crate::log;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Longest name the form accepts.
pub const MAX_NAME_LEN: usize = 32;

type VerifyResult = Result<bool, VerifyError>;

/// How verification runs after submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyDispatch {
    /// On a worker thread; the gate polls for the result each tick.
    Background,
    /// Synchronously inside `submit`.
    Inline,
}

/// A submitted name awaiting both its verdict and the minimum dance time.
struct PendingCheck {
    name: String,
    receiver: Option<Receiver<VerifyResult>>,
    outcome: Option<VerifyResult>,
    dance_done: bool,
}

/// The loading-dance screen with its name form.
pub struct NameGate {
    pub phase: GatePhase,
    pub name_input: String,
    /// Validation or server error shown under the form.
    pub message: Option<String>,
    /// Time since the gate opened, drives the dance.
    pub elapsed_ms: u64,
    pub visitor: Option<Visitor>,
    timers: TimerQueue<GateEvent>,
    verifier: Arc<dyn NameVerifier>,
    dispatch: VerifyDispatch,
    pending: Option<PendingCheck>,
}

impl NameGate {
    pub fn new(verifier: Arc<dyn NameVerifier>, dispatch: VerifyDispatch) -> Self {
        let mut timers = TimerQueue::new();
        timers.schedule(GATE_INITIAL_DANCE_MS, GateEvent::ShowForm);
        Self {
            phase: GatePhase::Dancing,
            name_input: String::new(),
            message: None,
            elapsed_ms: 0,
            visitor: None,
            timers,
            verifier,
            dispatch,
            pending: None,
        }
    }

    pub fn form_visible(&self) -> bool {
        self.phase == GatePhase::NameEntry
    }

    pub fn is_admitted(&self) -> bool {
        self.phase == GatePhase::Admitted
    }

    pub fn current_pose(&self) -> DancerPose {
        DancerPose::at(self.elapsed_ms)
    }

    pub fn handle_char(&mut self, c: char) {
        if self.form_visible() && !c.is_control() && self.name_input.chars().count() < MAX_NAME_LEN {
            self.name_input.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.form_visible() {
            self.name_input.pop();
        }
    }

    /// Send the typed name for verification.
    pub fn submit(&mut self) {
        if !self.form_visible() {
            return;
        }
        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            self.message = Some("Please enter a name.".to_string());
            return;
        }

        self.message = None;
        self.phase = GatePhase::Submitting;
        self.timers
            .schedule(GATE_SUBMIT_DANCE_MS, GateEvent::SubmitDanceDone);
        log!("gate: checking name {:?}", name);

        let mut pending = PendingCheck {
            name: name.clone(),
            receiver: None,
            outcome: None,
            dance_done: false,
        };
        match self.dispatch {
            VerifyDispatch::Inline => pending.outcome = Some(self.verifier.verify(&name)),
            VerifyDispatch::Background => {
                let (tx, rx) = mpsc::channel();
                let verifier = Arc::clone(&self.verifier);
                thread::spawn(move || {
                    // The gate may be gone by now; a dropped receiver is fine.
                    let _ = tx.send(verifier.verify(&name));
                });
                pending.receiver = Some(rx);
            }
        }
        self.pending = Some(pending);
    }

    /// Advance the dance and pending transitions. Returns true if the phase
    /// changed.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        let before = self.phase;

        for event in self.timers.advance(dt_ms) {
            match event {
                GateEvent::ShowForm => {
                    if matches!(self.phase, GatePhase::Dancing | GatePhase::Retrying) {
                        self.phase = GatePhase::NameEntry;
                    }
                }
                GateEvent::SubmitDanceDone => {
                    if let Some(pending) = self.pending.as_mut() {
                        pending.dance_done = true;
                    }
                }
            }
        }

        self.poll_verification();
        self.phase != before
    }

    fn poll_verification(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        if pending.outcome.is_none() {
            if let Some(receiver) = pending.receiver.as_ref() {
                match receiver.try_recv() {
                    Ok(result) => pending.outcome = Some(result),
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => {
                        pending.outcome = Some(Err(VerifyError::Transport(
                            "verification stopped unexpectedly".to_string(),
                        )));
                    }
                }
            }
        }

        if !pending.dance_done || pending.outcome.is_none() {
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };
        match pending.outcome {
            Some(Ok(verdict)) => {
                let visitor = Visitor {
                    name: pending.name,
                    route: GateRoute::from_verdict(verdict),
                };
                log!("gate: admitted {:?} as {:?}", visitor.name, visitor.route);
                self.visitor = Some(visitor);
                self.phase = GatePhase::Admitted;
            }
            Some(Err(err)) => {
                log!("gate: verification failed: {}", err);
                self.message = Some(format!("Server error: {}", err));
                self.phase = GatePhase::Retrying;
                self.timers.schedule(GATE_RETRY_DELAY_MS, GateEvent::ShowForm);
            }
            None => {}
        }
    }

    /// Drop pending timers and any in-flight check.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
        self.pending = None;
    }
}
