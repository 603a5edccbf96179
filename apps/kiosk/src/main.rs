//! # ParcelPoint Kiosk Entry Point
//!
//! Sets up logging and runs the scripted walkthrough. The actual wiring
//! lives in lib.rs for better testability.

fn main() {
    parcelpoint_kiosk::init_tracing();
    parcelpoint_kiosk::run();
}
