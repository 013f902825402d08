//! Registration domain module.
//!
//! Users reserve seats in lecture slots. Each reservation consumes one unit
//! of the lecture's capacity and is recorded on both sides of the
//! relationship.
//!
//! # Module Structure
//!
//! - `user` - User aggregate (login, email, reserved lecture keys)
//! - `lecture` - Lecture aggregate (capacity, attendee logins)
//! - `request` - `LectureRequest` input and `Enrollment` join entries
//! - `engine` - Reservation rules spanning a user and a lecture
//! - `errors` - Registration error taxonomy

mod engine;
mod errors;
mod lecture;
mod request;
mod user;

pub use engine::{cancel, register, CancelOutcome};
pub use errors::RegistrationError;
pub use lecture::Lecture;
pub use request::{Enrollment, LectureRequest};
pub use user::User;
