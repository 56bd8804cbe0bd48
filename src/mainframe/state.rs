//! Session state for one terminal session

use crate::data::{crew_member, Clearance, Id, SystemAlert};
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Most recent alerts kept in the session
pub const MAX_ALERTS: usize = 5;

/// Most recent commands kept in the session
pub const MAX_HISTORY: usize = 20;

/// A FIFO buffer that evicts its oldest entry once full
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedLog<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedLog<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}

/// The mutable session record
#[derive(Debug, Clone)]
pub struct TerminalState {
    pub session_id: Id,
    pub is_logged_in: bool,
    pub current_user: Option<String>,
    pub session_start: DateTime<Local>,
    pub alien_detected: bool,
    /// Never armed by any command; SELF_DESTRUCT only describes the sequence
    pub self_destruct_active: bool,
    pub system_alerts: BoundedLog<SystemAlert>,
    pub command_history: BoundedLog<String>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            session_id: Id::new(),
            is_logged_in: false,
            current_user: None,
            session_start: Local::now(),
            alien_detected: true,
            self_destruct_active: false,
            system_alerts: BoundedLog::new(MAX_ALERTS),
            command_history: BoundedLog::new(MAX_HISTORY),
        }
    }

    pub fn login(&mut self, user: &str) {
        self.is_logged_in = true;
        self.current_user = Some(user.trim().to_uppercase());
    }

    /// End the session; history and alerts survive
    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.current_user = None;
    }

    pub fn record_command(&mut self, command: &str) {
        self.command_history.push(command.to_string());
    }

    pub fn push_alert(&mut self, alert: SystemAlert) {
        self.system_alerts.push(alert);
    }

    /// Clearance of the logged-in crew member, if any
    pub fn clearance(&self) -> Option<Clearance> {
        self.current_user
            .as_deref()
            .and_then(crew_member)
            .map(|c| c.clearance)
    }

    pub fn apply(&mut self, effect: super::Effect) {
        match effect {
            super::Effect::PushAlert(alert) => self.push_alert(alert),
            super::Effect::EndSession => self.logout(),
        }
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}
