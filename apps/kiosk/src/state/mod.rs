//! # Kiosk State
//!
//! State objects managed by the kiosk, one per concern.
//!
//! ## Why Multiple State Types?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Kiosk State Management                               │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │  RegistryState   │ │   BoardState     │ │    CodesState        │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • registrations │ │  • mock package  │ │  • test code issuer  │   │
//! │  │  • drop-off      │ │    containers    │ │  • sampling RNG      │   │
//! │  │    ledger        │ │                  │ │                      │   │
//! │  │  • its own RNG   │ │                  │ │                      │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐                             │
//! │  │  SessionState    │ │   KioskConfig    │                             │
//! │  │  • role, last    │ │  • store name    │                             │
//! │  │    test code     │ │  • seed counts   │                             │
//! │  └──────────────────┘ └──────────────────┘                             │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs. Locks stay        │
//! │       narrow; nothing holds two mutexes at once.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod board;
mod codes;
mod config;
mod registry;
mod session;

pub use board::BoardState;
pub use codes::CodesState;
pub use config::KioskConfig;
pub use registry::RegistryState;
pub use session::{Role, Session, SessionState};
