//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::registration::{
    CancelReservationCommand, CancelReservationHandler, CancelReservationResult,
    GetUserLecturesHandler, GetUserLecturesQuery, ListUsersHandler, ListUsersQuery,
    RegisterForLectureCommand, RegisterForLectureHandler, RegisterForLectureResult,
    UpdateEmailCommand, UpdateEmailHandler, UserFilter,
};
