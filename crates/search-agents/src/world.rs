use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use search_core::DeterministicRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Room {
    A,
    B,
}

impl Room {
    pub const ALL: [Room; 2] = [Room::A, Room::B];

    pub fn other(self) -> Room {
        match self {
            Room::A => Room::B,
            Room::B => Room::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Room::A => 0,
            Room::B => 1,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Room::A => "A",
            Room::B => "B",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    Clean,
    Dirty,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Clean => "clean",
            Status::Dirty => "dirty",
        })
    }
}

/// Room statuses plus the vacuum's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VacuumWorld {
    statuses: [Status; 2],
    position: Room,
}

impl VacuumWorld {
    pub fn new(a: Status, b: Status, position: Room) -> Self {
        Self {
            statuses: [a, b],
            position,
        }
    }

    /// Each room dirty with probability 1/2, vacuum placed in either room.
    pub fn random<R: DeterministicRng + ?Sized>(rng: &mut R) -> Self {
        let mut status = || {
            if rng.next_bool() {
                Status::Dirty
            } else {
                Status::Clean
            }
        };
        let a = status();
        let b = status();
        let position = if rng.next_bool() { Room::B } else { Room::A };
        Self::new(a, b, position)
    }

    /// Every combination of room statuses and vacuum position.
    pub fn all() -> impl Iterator<Item = VacuumWorld> {
        let statuses = [Status::Clean, Status::Dirty];
        statuses.into_iter().flat_map(move |a| {
            statuses.into_iter().flat_map(move |b| {
                Room::ALL
                    .into_iter()
                    .map(move |position| VacuumWorld::new(a, b, position))
            })
        })
    }

    pub fn position(&self) -> Room {
        self.position
    }

    pub fn status(&self, room: Room) -> Status {
        self.statuses[room.index()]
    }

    pub fn is_clean(&self) -> bool {
        self.statuses.iter().all(|&s| s == Status::Clean)
    }

    pub(crate) fn clean_current(&mut self) {
        self.statuses[self.position.index()] = Status::Clean;
    }

    pub(crate) fn move_to(&mut self, room: Room) {
        self.position = room;
    }
}

impl fmt::Display for VacuumWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A: {}, B: {}; vacuum in {}",
            self.status(Room::A),
            self.status(Room::B),
            self.position
        )
    }
}
