use crate::{Action, Percept, VacuumAgent, VacuumWorld};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRun {
    pub steps: usize,
    pub actions: Vec<Action>,
    /// Whether every room was clean when the run stopped.
    pub clean: bool,
}

/// Let `agent` act on `world` while any room is dirty, for at most `max_steps` actions.
pub fn run_agent<A>(agent: &mut A, world: &mut VacuumWorld, max_steps: usize) -> AgentRun
where
    A: VacuumAgent + ?Sized,
{
    let mut actions = Vec::new();

    while !world.is_clean() && actions.len() < max_steps {
        let room = world.position();
        let percept = Percept {
            room,
            status: world.status(room),
        };
        let action = agent.decide(percept);
        match action {
            Action::Suck => world.clean_current(),
            Action::MoveTo(to) => world.move_to(to),
            Action::NoOp => {}
        }
        tracing::debug!(agent = agent.name(), %action, %world, "vacuum step");
        actions.push(action);
    }

    let clean = world.is_clean();
    tracing::debug!(agent = agent.name(), steps = actions.len(), clean, "vacuum run finished");

    AgentRun {
        steps: actions.len(),
        actions,
        clean,
    }
}
