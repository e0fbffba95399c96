//! Event system for decoupled inter-module communication.
//!
//! The settings panel never touches the overlay's state directly: it
//! publishes an [`AppEvent::ApplyConfig`] and the overlay applies it on its
//! next frame.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │   Overlay   │     │  Settings   │
//! │  (buttons)  │     │   Panel     │
//! └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()
//!        ▼                   ▼
//! ┌─────────────────────────────────┐
//! │            EventBus             │
//! │         (mpsc channel)          │
//! └───────────────┬─────────────────┘
//!                 │ drain()
//!                 ▼
//! ┌─────────────────────────────────┐
//! │           Dispatcher            │
//! │     (once per overlay frame)    │
//! └─────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
