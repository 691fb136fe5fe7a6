use pt_core::{AgentId, PtError, WorldPos};
use pt_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent {agent} cannot spawn at {position}: {reason}")]
    InvalidSpawn {
        agent:    AgentId,
        position: WorldPos,
        reason:   &'static str,
    },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Core(#[from] PtError),
}

pub type SimResult<T> = Result<T, SimError>;
