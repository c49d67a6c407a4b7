pub mod application;
pub mod error;
pub mod location;
pub mod mount;
pub mod router;
pub mod view;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{Application, KeyCommand, Keymap};
pub use location::{Location, RouterHandle};
pub use mount::Mount;
pub use router::{ParamPattern, ViewRouter};
pub use view::{BoxedView, ParamViewFactory, View, ViewFactory};
