use core::fmt;

use crate::{Room, Status};

/// What the vacuum senses in its current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percept {
    pub room: Room,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Suck,
    MoveTo(Room),
    NoOp,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Suck => f.write_str("suck"),
            Action::MoveTo(room) => write!(f, "move to {room}"),
            Action::NoOp => f.write_str("no-op"),
        }
    }
}

pub trait VacuumAgent {
    fn name(&self) -> &'static str;

    fn decide(&mut self, percept: Percept) -> Action;
}

/// Acts on the current percept only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflexAgent;

impl VacuumAgent for ReflexAgent {
    fn name(&self) -> &'static str {
        "reflex"
    }

    fn decide(&mut self, percept: Percept) -> Action {
        match percept.status {
            Status::Dirty => Action::Suck,
            Status::Clean => Action::MoveTo(percept.room.other()),
        }
    }
}

/// Remembers the last known status of each room and stays put once both are known clean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelBasedAgent {
    model: [Option<Status>; 2],
}

impl ModelBasedAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn believed(&self, room: Room) -> Option<Status> {
        self.model[room.index()]
    }
}

impl VacuumAgent for ModelBasedAgent {
    fn name(&self) -> &'static str {
        "model-based"
    }

    fn decide(&mut self, percept: Percept) -> Action {
        self.model[percept.room.index()] = Some(percept.status);

        if percept.status == Status::Dirty {
            // Sucking always leaves the room clean.
            self.model[percept.room.index()] = Some(Status::Clean);
            return Action::Suck;
        }

        let other = percept.room.other();
        if self.believed(other) == Some(Status::Clean) {
            Action::NoOp
        } else {
            Action::MoveTo(other)
        }
    }
}
