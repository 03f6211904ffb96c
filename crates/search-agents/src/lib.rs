//! Two-room vacuum world and the agents that clean it.
//!
//! An agent only sees a [`Percept`] (its room and that room's status) and answers with an
//! [`Action`]; [`run_agent`] applies actions to a [`VacuumWorld`] until every room is clean.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod run;
pub mod world;

pub use agent::{Action, ModelBasedAgent, Percept, ReflexAgent, VacuumAgent};
pub use run::{run_agent, AgentRun};
pub use world::{Room, Status, VacuumWorld};
