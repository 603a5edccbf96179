//! # Kiosk Commands
//!
//! The function-call contract the presentation layer consumes. Each command
//! takes only the state it needs, returns a serializable response or an
//! [`crate::error::ApiError`], and logs at debug level.

pub mod board;
pub mod customer;
pub mod partner;

pub use board::{list_packages, move_package, search_packages, BoardResponse, PackageView};
pub use customer::{
    choose_role, generate_test_code, nearby_businesses, verify_test_pickup, PickupAttempt,
};
pub use partner::{
    notify_dropoff, register_business, sign_in, sign_up_business, verify_pickup,
    BusinessSummary, RegistrationResponse,
};
