//! Session state machine: Idle → Generating → Success | Error → Idle.
//!
//! - `state.rs` - Session state enum
//! - `intent.rs` - User/task actions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{
    Draft, DraftField, GenerationRequest, SessionState, INITIAL_PROGRESS, VALIDATION_MESSAGE,
};
