//! Ephemeral keyed flags
//!
//! This module provides:
//! - **Flags**: Named boolean flags that self-expire after a per-trigger delay
//! - **Timers**: One owned deactivation timer per key, replaced atomically on re-trigger
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Caller intent (trigger)                      │
//! │        "mark 'pulse' active, revert after 6000ms"               │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                       trigger("pulse", 6s)
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  KeyState (runtime state)                        │
//! │  "'pulse' is active, epoch 4, timer pending"                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                      View layer (is_active)
//! ```

mod flags;


pub use flags::{EphemeralFlags, TriggerError};
