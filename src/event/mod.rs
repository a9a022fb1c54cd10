//! Event system: input types, key bindings, click listeners and dispatch.

pub mod binding;
pub mod dispatch;
pub mod input;
pub mod listener;

pub use binding::{Binding, BindingAction, KeyBindingRegistry};
pub use dispatch::{bubble_path, dispatch_click};
pub use input::{ClickEvent, Key, KeyEvent, KeyOutcome, Modifiers, ParseKeyError};
pub use listener::{Generation, Listener, ListenerSet, Propagation, TargetScope};
