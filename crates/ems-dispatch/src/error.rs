use ems_core::EmsError;
use ems_network::NetworkError;
use thiserror::Error;

use crate::ReservationId;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("planner configuration error: {0}")]
    Config(#[from] EmsError),

    #[error("reservation {0} is not held by this planner")]
    UnknownReservation(ReservationId),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
