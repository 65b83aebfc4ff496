pub mod bob_style;
pub mod components;
pub mod events;
pub mod head_bob_error;
pub mod head_bob_plugin;
pub mod head_bobber;
