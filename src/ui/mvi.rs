//! Model-View-Intent primitives for the session screens.
//!
//! ```text
//! key / task event ──→ Intent ──→ Reducer ──→ SessionState ──→ screen
//!        ↑                                                      │
//!        └──────────────────────────────────────────────────────┘
//! ```
//!
//! Reducers never perform I/O. Loading images, spawning the generation
//! task and saving files happen in `App` around the dispatch call.

/// Something that happened: a user action or a generation task event.
pub trait Intent: Send + 'static {}

/// Snapshot of everything a screen needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// The only place where state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
