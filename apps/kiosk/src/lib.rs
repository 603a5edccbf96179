//! # ParcelPoint Kiosk Library
//!
//! Thin orchestration layer over `parcel-core` and `parcel-store`.
//!
//! ## Module Organization
//! ```text
//! parcelpoint_kiosk/
//! ├── lib.rs          ◄─── You are here (startup & demo walkthrough)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── registry.rs ◄─── Business registry + its RNG
//! │   ├── board.rs    ◄─── Mock package board
//! │   ├── codes.rs    ◄─── Test code issuer + sampling RNG
//! │   ├── session.rs  ◄─── Per-visitor role and test code
//! │   └── config.rs   ◄─── Startup configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── customer.rs ◄─── Role pick, test codes, nearby businesses
//! │   ├── partner.rs  ◄─── Register, sign in, drop-off, pickup
//! │   └── board.rs    ◄─── Dashboard list/move/search
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! There is no persistent anything: every run starts from an empty registry
//! and a freshly seeded board, and ends by forgetting it all.

pub mod commands;
pub mod error;
pub mod state;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use parcel_core::validation::RegistrationForm;
use parcel_core::PackageStatus;
use state::{BoardState, CodesState, KioskConfig, RegistryState, Role, SessionState};

/// Initializes tracing with an env-filter.
///
/// Default level INFO; override with `RUST_LOG` (e.g.
/// `RUST_LOG=parcel_store=debug`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Runs the scripted kiosk walkthrough.
///
/// ## Startup Sequence
/// 1. Initialize tracing (caller does this via [`init_tracing`])
/// 2. Build state objects from [`KioskConfig`]
/// 3. Seed the package board once
/// 4. Walk every flow: customer test pickup, directory lookup, business
///    registration, drop-off, pickup verification, dashboard moves
pub fn run() {
    let config = KioskConfig::default();
    info!(store = %config.store_name, "starting kiosk");

    let registry = RegistryState::new();
    let board = BoardState::new();
    let codes = CodesState::new();
    let session = SessionState::new();

    // Seeded exactly once; seeding again would duplicate records.
    let mut seed_rng = StdRng::from_entropy();
    board.with_board_mut(|b| b.seed(&mut seed_rng, config.seed_counts));
    info!(total = board.with_board(|b| b.len()), "package board ready");

    println!("=== {} ===", config.store_name);

    // --- Customer side ------------------------------------------------------
    commands::choose_role(&session, Role::Customer);

    let code = commands::generate_test_code(&codes, &session);
    println!("Generated Test Code: {}", code);
    let attempt = commands::verify_test_pickup(&session, &code);
    println!("{}", attempt.message);

    match commands::nearby_businesses(&codes, "12 Elm St") {
        Ok(entries) => {
            println!("Drop-off locations near you:");
            for entry in entries {
                println!("  {}", entry);
            }
        }
        Err(err) => println!("{}", err.message),
    }

    // --- Partner side -------------------------------------------------------
    commands::choose_role(&session, Role::Partner);

    let form = RegistrationForm::new("Corner Market", "12 Elm St");
    match commands::register_business(&registry, &form) {
        Ok(response) => {
            println!("{}", response.message);

            match commands::notify_dropoff(&registry, "1Z999AA10123456784", &response.code, "Alex Rivera")
            {
                Ok(receipt) => {
                    println!("{}", receipt.message());
                    match commands::verify_pickup(&registry, &receipt.pickup_code) {
                        Ok(confirmation) => println!("{}", confirmation.message()),
                        Err(err) => println!("{}", err.message),
                    }
                    // Second attempt demonstrates the already-picked-up no-op.
                    if let Err(err) = commands::verify_pickup(&registry, &receipt.pickup_code) {
                        println!("{}", err.message);
                    }
                }
                Err(err) => println!("{}", err.message),
            }
        }
        Err(err) => println!("{}", err.message),
    }

    // --- Dashboard ----------------------------------------------------------
    let dashboard = commands::list_packages(&board);
    println!(
        "Dashboard: {} on the way, {} ready for pickup, {} picked up",
        dashboard.on_the_way.len(),
        dashboard.ready_for_pickup.len(),
        dashboard.picked_up.len()
    );

    if let Some(first) = dashboard.on_the_way.first() {
        match commands::move_package(
            &board,
            &first.tracking_id,
            PackageStatus::OnTheWay,
            PackageStatus::ReadyForPickup,
        ) {
            Ok(updated) => println!(
                "Moved {}: now {} on the way, {} ready for pickup",
                first.tracking_id,
                updated.on_the_way.len(),
                updated.ready_for_pickup.len()
            ),
            Err(err) => println!("{}", err.message),
        }

        let matches = commands::search_packages(&board, &first.tracking_id);
        println!("Search '{}': {} match(es)", first.tracking_id, matches.len());
    }

    info!("kiosk walkthrough complete");
}
