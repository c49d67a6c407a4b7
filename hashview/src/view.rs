//! The view contract dispatched by the router.

use crate::location::RouterHandle;
use crate::mount::Mount;
use crate::Result;

/// A routed view.
///
/// The router constructs a view when its route matches, calls `render`
/// exactly once with the mount it owns, and calls `destroy` before the
/// next view replaces it. Both calls may fail; the router catches and
/// logs the error instead of propagating it.
///
/// # Example
/// ```ignore
/// struct AboutView;
///
/// impl View for AboutView {
///     fn render(&mut self, mount: &mut Mount) -> Result<()> {
///         mount.push_line("About this app");
///         Ok(())
///     }
/// }
/// ```
pub trait View: Send {
    /// Write this view's content into the mount.
    fn render(&mut self, mount: &mut Mount) -> Result<()>;

    /// Release anything the view holds before it is dropped on
    /// navigation. Defaults to a no-op.
    fn destroy(&mut self) -> Result<()> {
        Ok(())
    }
}

pub type BoxedView = Box<dyn View>;

/// Factory for a static route: receives the router handle.
pub type ViewFactory = Box<dyn Fn(&RouterHandle) -> Result<BoxedView> + Send>;

/// Factory for a parameterized route: receives the router handle plus
/// one captured segment per `:name`, in order of appearance.
pub type ParamViewFactory = Box<dyn Fn(&RouterHandle, &[String]) -> Result<BoxedView> + Send>;
