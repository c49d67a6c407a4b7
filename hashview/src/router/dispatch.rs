//! Fragment-driven view dispatch.
//!
//! `ViewRouter` owns the mount and the route tables, watches the
//! location for fragment changes, and walks each change through the
//! same sequence: tear down the current view, clear the mount, match
//! the path, construct and render the next view (or not-found output),
//! then notify navigation listeners.

use std::collections::HashMap;

use tokio::sync::watch;
use tracing::{error, warn};

use crate::location::{Location, RouterHandle};
use crate::mount::Mount;
use crate::router::pattern::{self, ParamPattern};
use crate::view::{BoxedView, ParamViewFactory, ViewFactory};
use crate::Result;

type NavListener = Box<dyn FnMut() -> Result<()> + Send>;

/// A fragment-driven dispatcher mapping paths to view lifecycles.
///
/// # Example
/// ```ignore
/// let location = Location::new();
/// let mut router = ViewRouter::new(Mount::new(), location);
///
/// router.add_route("/", |_| Ok(Box::new(HomeView::new())));
/// router.add_param_route("/chat/:user", |_, params| {
///     Ok(Box::new(ChatView::new(&params[0])))
/// })?;
///
/// router.init();
/// router.navigate("/chat/ada");
/// ```
pub struct ViewRouter {
    mount: Mount,
    location: Location,
    changes: watch::Receiver<String>,
    static_routes: HashMap<String, ViewFactory>,
    param_routes: Vec<(ParamPattern, ParamViewFactory)>,
    current: Option<BoxedView>,
    listeners: Vec<NavListener>,
}

impl ViewRouter {
    /// Create a router owning `mount` and subscribed to `location`.
    pub fn new(mount: Mount, location: Location) -> Self {
        let changes = location.subscribe();
        Self {
            mount,
            location,
            changes,
            static_routes: HashMap::new(),
            param_routes: Vec::new(),
            current: None,
            listeners: Vec::new(),
        }
    }

    /// A clonable handle suitable for handing to views.
    pub fn handle(&self) -> RouterHandle {
        RouterHandle::new(self.location.clone())
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Register a static route. The path is normalized; registering the
    /// same normalized path again replaces the earlier factory.
    pub fn add_route<F>(&mut self, path: &str, factory: F)
    where
        F: Fn(&RouterHandle) -> Result<BoxedView> + Send + 'static,
    {
        let path = pattern::normalize(path);
        self.static_routes.insert(path, Box::new(factory));
    }

    /// Register a parameterized route such as `/chat/:user`.
    ///
    /// Registration order decides priority among parameterized routes;
    /// static routes always win over them. Fails if the template does
    /// not compile.
    pub fn add_param_route<F>(&mut self, template: &str, factory: F) -> Result<()>
    where
        F: Fn(&RouterHandle, &[String]) -> Result<BoxedView> + Send + 'static,
    {
        let compiled = ParamPattern::compile(template)?;
        self.param_routes.push((compiled, Box::new(factory)));
        Ok(())
    }

    /// Whether `path` would resolve to any registered route.
    pub fn has_route(&self, path: &str) -> bool {
        let path = pattern::normalize(path);
        self.static_routes.contains_key(&path)
            || self.param_routes.iter().any(|(p, _)| p.matches(&path))
    }

    /// Request navigation to `path`.
    ///
    /// Writes the location fragment; dispatch happens when the change
    /// is observed, never re-entrantly from this call.
    pub fn navigate(&self, path: &str) {
        self.handle().navigate(path);
    }

    /// Append a navigation listener. Listeners run in registration
    /// order after each completed dispatch (success or not-found).
    pub fn on_navigate<F>(&mut self, listener: F)
    where
        F: FnMut() -> Result<()> + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Dispatch once for the current fragment, before any change event
    /// has fired. Consumes a pending change notification so the first
    /// loop iteration does not dispatch the same fragment twice.
    pub fn init(&mut self) {
        let _ = self.changes.borrow_and_update();
        self.handle_route_change();
    }

    /// Wait until the location fragment changes.
    pub async fn changed(&mut self) -> bool {
        self.changes.changed().await.is_ok()
    }

    /// Run the route-change sequence for the current fragment.
    ///
    /// Never propagates an error: per-view failures are logged and
    /// replaced with error output, and anything else is caught here and
    /// rendered as a generic application error. The router stays usable
    /// for the next navigation either way.
    pub fn handle_route_change(&mut self) {
        let fragment = self.location.fragment();
        if let Err(err) = self.dispatch(&fragment) {
            error!(error = %err, fragment = %fragment, "route dispatch failed");
            self.mount.show_application_error();
        }
    }

    fn dispatch(&mut self, fragment: &str) -> Result<()> {
        let path = pattern::parse_fragment(fragment)?;

        self.teardown_current();
        self.mount.clear();

        let handle = self.handle();
        let built = if let Some(factory) = self.static_routes.get(&path) {
            Some(factory(&handle))
        } else {
            self.param_routes.iter().find_map(|(param, factory)| {
                param
                    .captures(&path)
                    .map(|captured| factory(&handle, &captured))
            })
        };

        match built {
            Some(Ok(mut view)) => match view.render(&mut self.mount) {
                Ok(()) => {
                    self.current = Some(view);
                    self.notify_listeners();
                }
                Err(err) => {
                    error!(error = %err, path = %path, "view render failed");
                    self.mount.show_view_error();
                }
            },
            Some(Err(err)) => {
                error!(error = %err, path = %path, "view construction failed");
                self.mount.show_view_error();
            }
            None => {
                let requested = pattern::requested_path(fragment);
                warn!(path = %requested, "no route matched");
                self.mount.show_not_found(&requested);
                self.notify_listeners();
            }
        }

        Ok(())
    }

    fn teardown_current(&mut self) {
        if let Some(mut view) = self.current.take() {
            if let Err(err) = view.destroy() {
                warn!(error = %err, "view destroy failed");
            }
        }
    }

    fn notify_listeners(&mut self) {
        for listener in &mut self.listeners {
            if let Err(err) = listener() {
                warn!(error = %err, "navigation listener failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;
    use crate::Error;
    use std::sync::{Arc, Mutex};

    type CallLog = Arc<Mutex<Vec<String>>>;

    fn new_log() -> CallLog {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn entries(log: &CallLog) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    struct RecordingView {
        label: &'static str,
        log: CallLog,
    }

    impl View for RecordingView {
        fn render(&mut self, mount: &mut Mount) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("render:{}", self.label));
            mount.push_line(format!("[{}]", self.label));
            Ok(())
        }

        fn destroy(&mut self) -> Result<()> {
            self.log
                .lock()
                .unwrap()
                .push(format!("destroy:{}", self.label));
            Ok(())
        }
    }

    struct FailingDestroyView {
        log: CallLog,
    }

    impl View for FailingDestroyView {
        fn render(&mut self, mount: &mut Mount) -> Result<()> {
            mount.push_line("[fragile]");
            Ok(())
        }

        fn destroy(&mut self) -> Result<()> {
            self.log.lock().unwrap().push("destroy:fragile".to_string());
            Err(Error::view("destroy blew up"))
        }
    }

    fn new_router() -> ViewRouter {
        ViewRouter::new(Mount::new(), Location::new())
    }

    fn add_recording(router: &mut ViewRouter, path: &str, label: &'static str, log: &CallLog) {
        let log = Arc::clone(log);
        router.add_route(path, move |_| {
            Ok(Box::new(RecordingView {
                label,
                log: Arc::clone(&log),
            }))
        });
    }

    fn count_navigations(router: &mut ViewRouter) -> Arc<Mutex<usize>> {
        let count = Arc::new(Mutex::new(0));
        let seen = Arc::clone(&count);
        router.on_navigate(move || {
            *seen.lock().unwrap() += 1;
            Ok(())
        });
        count
    }

    #[test]
    fn test_duplicate_registration_overwrites() {
        let log = new_log();
        let mut router = new_router();
        add_recording(&mut router, "/a", "first", &log);
        add_recording(&mut router, "a/", "second", &log);

        router.navigate("/a");
        router.handle_route_change();

        assert_eq!(router.mount().plain_text(), "[second]");
        assert_eq!(entries(&log), ["render:second"]);
    }

    #[test]
    fn test_has_route_normalization() {
        let log = new_log();
        let mut router = new_router();
        add_recording(&mut router, "/a/", "a", &log);

        assert!(router.has_route("a"));
        assert!(router.has_route("/a"));
        assert!(router.has_route("/a/"));
        assert!(!router.has_route("/b"));
    }

    #[test]
    fn test_has_route_covers_param_routes() {
        let mut router = new_router();
        router
            .add_param_route("/chat/:user", |_, _| {
                Ok(Box::new(RecordingView {
                    label: "chat",
                    log: new_log(),
                }))
            })
            .unwrap();

        assert!(router.has_route("/chat/42"));
        assert!(router.has_route("chat/42/"));
        assert!(!router.has_route("/chat/42/extra"));
    }

    #[test]
    fn test_static_route_beats_earlier_param_route() {
        let log = new_log();
        let mut router = new_router();
        let param_log = Arc::clone(&log);
        router
            .add_param_route("/users/:id", move |_, _| {
                param_log.lock().unwrap().push("construct:param".to_string());
                Ok(Box::new(RecordingView {
                    label: "param",
                    log: new_log(),
                }))
            })
            .unwrap();
        add_recording(&mut router, "/users/list", "list", &log);

        router.navigate("/users/list");
        router.handle_route_change();

        assert_eq!(router.mount().plain_text(), "[list]");
        assert_eq!(entries(&log), ["render:list"]);
    }

    #[test]
    fn test_param_routes_match_in_registration_order() {
        let log = new_log();
        let mut router = new_router();
        for label in ["first", "second"] {
            let log = Arc::clone(&log);
            router
                .add_param_route("/chat/:user", move |_, _| {
                    Ok(Box::new(RecordingView {
                        label,
                        log: Arc::clone(&log),
                    }))
                })
                .unwrap();
        }

        router.navigate("/chat/ada");
        router.handle_route_change();

        assert_eq!(entries(&log), ["render:first"]);
    }

    #[test]
    fn test_not_found_renders_requested_path_and_notifies() {
        let mut router = new_router();
        let navigations = count_navigations(&mut router);

        router.location().set_fragment("#/no/such/page/");
        router.handle_route_change();

        let shown = router.mount().plain_text();
        assert!(shown.contains("404"));
        assert!(shown.contains("/no/such/page/"));
        assert_eq!(*navigations.lock().unwrap(), 1);
    }

    #[test]
    fn test_destroy_error_does_not_block_navigation() {
        let log = new_log();
        let mut router = new_router();
        let fragile_log = Arc::clone(&log);
        router.add_route("/", move |_| {
            Ok(Box::new(FailingDestroyView {
                log: Arc::clone(&fragile_log),
            }))
        });
        add_recording(&mut router, "/next", "next", &log);

        router.init();
        assert_eq!(router.mount().plain_text(), "[fragile]");

        router.navigate("/next");
        router.handle_route_change();

        assert_eq!(router.mount().plain_text(), "[next]");
        assert_eq!(entries(&log), ["destroy:fragile", "render:next"]);
    }

    #[test]
    fn test_navigation_sequence_lifecycle() {
        let log = new_log();
        let mut router = new_router();
        add_recording(&mut router, "/", "home", &log);
        add_recording(&mut router, "/profile", "profile", &log);
        let navigations = count_navigations(&mut router);

        router.init();
        assert_eq!(router.mount().plain_text(), "[home]");
        assert_eq!(*navigations.lock().unwrap(), 1);

        router.navigate("/profile");
        router.handle_route_change();

        assert_eq!(router.mount().plain_text(), "[profile]");
        assert_eq!(
            entries(&log),
            ["render:home", "destroy:home", "render:profile"]
        );
        assert_eq!(*navigations.lock().unwrap(), 2);
    }

    #[test]
    fn test_param_route_receives_captured_segments() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let mut router = new_router();
        let seen = Arc::clone(&captured);
        router
            .add_param_route("/chat/:userId", move |_, params| {
                seen.lock().unwrap().push(params.to_vec());
                Ok(Box::new(RecordingView {
                    label: "chat",
                    log: new_log(),
                }))
            })
            .unwrap();

        router.navigate("/chat/42");
        router.handle_route_change();
        assert_eq!(
            captured.lock().unwrap().clone(),
            vec![vec!["42".to_string()]]
        );

        router.navigate("/chat/42/extra");
        router.handle_route_change();
        assert!(router.mount().plain_text().contains("404"));
        assert_eq!(captured.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_listener_error_does_not_stop_later_listeners() {
        let mut router = new_router();
        router.add_route("/", |_| {
            Ok(Box::new(RecordingView {
                label: "home",
                log: new_log(),
            }))
        });
        router.on_navigate(|| Err(Error::view("listener failed")));
        let navigations = count_navigations(&mut router);

        router.init();
        router.navigate("/missing");
        router.handle_route_change();

        assert_eq!(*navigations.lock().unwrap(), 2);
    }

    #[test]
    fn test_construction_error_shows_error_page_without_notifying() {
        let mut router = new_router();
        router.add_route("/broken", |_| Err(Error::view("no such user")));
        let navigations = count_navigations(&mut router);

        router.navigate("/broken");
        router.handle_route_change();

        assert!(router.mount().plain_text().contains("Could not load this page."));
        assert_eq!(*navigations.lock().unwrap(), 0);
    }

    #[test]
    fn test_render_error_shows_error_page_without_notifying() {
        struct FailingRenderView;
        impl View for FailingRenderView {
            fn render(&mut self, mount: &mut Mount) -> Result<()> {
                mount.push_line("partial output");
                Err(Error::view("render blew up"))
            }
        }

        let mut router = new_router();
        router.add_route("/broken", |_| Ok(Box::new(FailingRenderView)));
        let navigations = count_navigations(&mut router);

        router.navigate("/broken");
        router.handle_route_change();

        let shown = router.mount().plain_text();
        assert!(shown.contains("Could not load this page."));
        assert!(!shown.contains("partial output"));
        assert_eq!(*navigations.lock().unwrap(), 0);
    }

    #[test]
    fn test_malformed_fragment_leaves_router_usable() {
        let log = new_log();
        let mut router = new_router();
        add_recording(&mut router, "/a", "a", &log);
        let navigations = count_navigations(&mut router);

        router.location().set_fragment("oops");
        router.handle_route_change();

        assert!(router.mount().plain_text().contains("Application Error"));
        assert_eq!(*navigations.lock().unwrap(), 0);

        router.navigate("/a");
        router.handle_route_change();
        assert_eq!(router.mount().plain_text(), "[a]");
        assert_eq!(*navigations.lock().unwrap(), 1);
    }

    #[test]
    fn test_init_dispatches_pre_set_fragment() {
        let log = new_log();
        let mut router = new_router();
        add_recording(&mut router, "/profile", "profile", &log);

        router.navigate("/profile");
        router.init();

        assert_eq!(router.mount().plain_text(), "[profile]");
    }

    #[tokio::test]
    async fn test_changed_wakes_on_navigation() {
        let log = new_log();
        let mut router = new_router();
        add_recording(&mut router, "/", "home", &log);
        add_recording(&mut router, "/profile", "profile", &log);

        router.init();
        router.navigate("/profile");

        assert!(router.changed().await);
        router.handle_route_change();
        assert_eq!(router.mount().plain_text(), "[profile]");
    }
}
