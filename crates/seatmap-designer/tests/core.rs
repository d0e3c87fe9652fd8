#[path = "core/editor_state.rs"]
mod editor_state;
#[path = "core/handles.rs"]
mod handles;
#[path = "core/serialization.rs"]
mod serialization;
#[path = "core/viewport.rs"]
mod viewport;
