//! Per-call resolution context.

use crate::registry::ClassRegistry;
use crate::schema::{Breakpoint, InteractionState, StyleBundle};

/// Everything the caller supplies besides the element's own bundle.
///
/// Built fresh for each resolution; all collaborators are borrowed, so the
/// context never owns the registry or the theme.
///
/// # Example
///
/// ```rust
/// use stylecast::cascade::ResolveContext;
/// use stylecast::registry::ClassRegistry;
/// use stylecast::schema::{Breakpoint, InteractionState, StyleBundle};
///
/// let registry = ClassRegistry::new();
/// let theme = StyleBundle::default();
///
/// let context = ResolveContext::new()
///     .breakpoint(Breakpoint::Mobile)
///     .state(InteractionState::Hover)
///     .classes(["card", "spacer"])
///     .theme(&theme)
///     .registry(&registry);
///
/// assert_eq!(context.applied_classes, vec!["card", "spacer"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolveContext<'a> {
    pub breakpoint: Breakpoint,
    pub state: InteractionState,
    /// Class names in application order; later names win ties.
    pub applied_classes: Vec<String>,
    pub global_theme: Option<&'a StyleBundle>,
    /// Live, unsaved edits layered above everything else.
    pub manual_override: Option<&'a StyleBundle>,
    pub registry: Option<&'a ClassRegistry>,
}

impl<'a> ResolveContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn state(mut self, state: InteractionState) -> Self {
        self.state = state;
        self
    }

    /// Replaces the applied class list. Names may be raw; resolution
    /// sanitizes them before the registry lookup.
    pub fn classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.applied_classes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one class to the applied list.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.applied_classes.push(name.into());
        self
    }

    pub fn theme(mut self, theme: &'a StyleBundle) -> Self {
        self.global_theme = Some(theme);
        self
    }

    pub fn manual(mut self, manual: &'a StyleBundle) -> Self {
        self.manual_override = Some(manual);
        self
    }

    pub fn registry(mut self, registry: &'a ClassRegistry) -> Self {
        self.registry = Some(registry);
        self
    }
}
