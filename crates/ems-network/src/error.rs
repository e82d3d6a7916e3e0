//! Network-subsystem error type.

use thiserror::Error;

use ems_core::NodeId;

/// Errors produced by `ems-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("node {0} not found in graph")]
    UnknownNode(NodeId),

    #[error("location {0:?} not found in graph")]
    LocationNotFound(String),

    #[error("no road between {from:?} and {to:?}")]
    NoSuchRoad { from: String, to: String },

    #[error("invalid {field} {value} on road {from:?} - {to:?}")]
    InvalidWeight { from: String, to: String, field: &'static str, value: f64 },

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    /// Cost reported alongside a failed search.
    ///
    /// Every failure is "unreachable", so this is always `+inf`.
    pub fn cost(&self) -> f64 {
        f64::INFINITY
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
