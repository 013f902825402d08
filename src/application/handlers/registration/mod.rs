//! Registration handlers.
//!
//! ## Commands
//! - Registering a user for a lecture
//! - Cancelling a reservation
//! - Changing a user's email
//!
//! ## Queries
//! - Listing users (all, or only those holding reservations)
//! - Listing a user's lectures

mod cancel_reservation;
mod get_user_lectures;
mod list_users;
mod register_for_lecture;
mod update_email;

#[cfg(test)]
mod test_support;

// Commands
pub use cancel_reservation::{
    CancelReservationCommand, CancelReservationHandler, CancelReservationResult,
};
pub use register_for_lecture::{
    RegisterForLectureCommand, RegisterForLectureHandler, RegisterForLectureResult,
};
pub use update_email::{UpdateEmailCommand, UpdateEmailHandler};

// Queries
pub use get_user_lectures::{GetUserLecturesHandler, GetUserLecturesQuery};
pub use list_users::{ListUsersHandler, ListUsersQuery, UserFilter};
