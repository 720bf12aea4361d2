//! Tier merging.

use log::trace;
use std::collections::BTreeSet;

use super::context::ResolveContext;
use super::provenance::{ProvenanceMap, Source};
use crate::registry::sanitize;
use crate::schema::{Presence, StyleBundle, StyleNode};

/// The outcome of resolving one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The effective bundle. Carries no overlays.
    pub bundle: StyleBundle,
    pub provenance: ProvenanceMap,
    /// Applied class names the registry does not know, in applied order.
    /// Reporting them is the caller's job.
    pub missing_classes: Vec<String>,
}

/// One layer of the stack, lowest first.
struct Tier<'a> {
    label: String,
    source: Source,
    responsive: bool,
    bundle: &'a StyleBundle,
}

/// Merges every tier into one effective bundle and tracks provenance.
///
/// Tier order, low to high:
///
/// 1. default constants
/// 2. global theme
/// 3. applied classes, in list order
/// 4. the element's own bundle
/// 5. active-breakpoint overrides of theme, classes and element (skipped at
///    the base breakpoint; other breakpoints never chain)
/// 6. active-state overlays of theme, classes and element (skipped for the
///    default state)
/// 7. the manual override
///
/// Within a tier only `Set` leaves win. `Unset` falls through to lower tiers
/// and is recorded as `cleared` on the surviving winner. Records merge key by
/// key; lists are leaves and are replaced wholesale.
///
/// Applied class names are sanitized before lookup, so `"Primary Button"`
/// finds `primary-button`. Never fails: unknown class names contribute
/// nothing and are listed in [`Resolution::missing_classes`] as given.
pub fn resolve(element: &StyleBundle, context: &ResolveContext<'_>) -> Resolution {
    let defaults = StyleBundle::defaults();
    let mut missing_classes = Vec::new();

    let classes: Vec<(&str, &StyleBundle)> = context
        .applied_classes
        .iter()
        .filter_map(|name| match context.registry.and_then(|r| r.get(&sanitize(name))) {
            Some(def) => Some((def.name.as_str(), &def.styling)),
            None => {
                missing_classes.push(name.clone());
                None
            }
        })
        .collect();

    let tiers = stack(element, context, &defaults, &classes);

    let mut bundle = StyleBundle::default();
    let mut provenance = ProvenanceMap::new();
    let mut responsive = BTreeSet::new();

    for tier in &tiers {
        bundle.overlay(tier.bundle);

        let mut leaves = 0usize;
        tier.bundle.visit("", &mut |path, presence| {
            leaves += 1;
            match presence {
                Presence::Set => {
                    provenance.record_set(path, tier.source);
                    if tier.responsive {
                        responsive.insert(path.to_string());
                    }
                }
                Presence::Unset => provenance.record_unset(path),
            }
        });
        trace!("applied {} tier: {} leaves ({})", tier.label, leaves, tier.source);
    }

    for path in &responsive {
        provenance.mark_responsive(path);
    }

    Resolution {
        bundle,
        provenance,
        missing_classes,
    }
}

fn stack<'a>(
    element: &'a StyleBundle,
    context: &ResolveContext<'a>,
    defaults: &'a StyleBundle,
    classes: &[(&'a str, &'a StyleBundle)],
) -> Vec<Tier<'a>> {
    let mut tiers = vec![Tier {
        label: "default".to_string(),
        source: Source::Default,
        responsive: false,
        bundle: defaults,
    }];

    let base = band(element, context.global_theme, classes, |b| Some(b));
    push_band(&mut tiers, base, "", false);

    let breakpoint = context.breakpoint;
    let overrides = band(element, context.global_theme, classes, |b| {
        b.breakpoint_override(breakpoint)
    });
    push_band(&mut tiers, overrides, breakpoint.as_str(), true);

    let state = context.state;
    let overlays = band(element, context.global_theme, classes, |b| b.state_overlay(state));
    push_band(&mut tiers, overlays, state.as_str(), false);

    if let Some(manual) = context.manual_override {
        tiers.push(Tier {
            label: "manual".to_string(),
            source: Source::User,
            responsive: false,
            bundle: manual,
        });
    }
    tiers
}

/// Theme, classes and element projected through `pick`, in that order.
fn band<'a>(
    element: &'a StyleBundle,
    theme: Option<&'a StyleBundle>,
    classes: &[(&'a str, &'a StyleBundle)],
    pick: impl Fn(&'a StyleBundle) -> Option<&'a StyleBundle>,
) -> Vec<(String, Source, &'a StyleBundle)> {
    let mut layers = Vec::new();
    if let Some(bundle) = theme.and_then(&pick) {
        layers.push(("theme".to_string(), Source::Global, bundle));
    }
    for &(name, class) in classes {
        if let Some(bundle) = pick(class) {
            layers.push((format!("class '{}'", name), Source::Class, bundle));
        }
    }
    if let Some(bundle) = pick(element) {
        layers.push(("element".to_string(), Source::User, bundle));
    }
    layers
}

fn push_band<'a>(
    tiers: &mut Vec<Tier<'a>>,
    band: Vec<(String, Source, &'a StyleBundle)>,
    axis: &str,
    responsive: bool,
) {
    for (label, source, bundle) in band {
        let label = if axis.is_empty() {
            label
        } else {
            format!("{}@{}", label, axis)
        };
        tiers.push(Tier {
            label,
            source,
            responsive,
            bundle,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ClassDefinition, ClassRegistry};
    use crate::schema::{Breakpoint, Field, InteractionState};
    use serde_json::json;

    fn bundle(value: serde_json::Value) -> StyleBundle {
        StyleBundle::from_value(&value).unwrap()
    }

    fn text(value: &str) -> Field<String> {
        Field::Set(value.to_string())
    }

    fn registry(classes: &[(&str, serde_json::Value)]) -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        for (name, styling) in classes {
            registry
                .create(ClassDefinition::new(*name, bundle(styling.clone())))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_no_overrides_yields_defaults() {
        let resolution = resolve(&StyleBundle::default(), &ResolveContext::new());
        assert_eq!(resolution.bundle, StyleBundle::defaults());
        assert!(resolution.missing_classes.is_empty());
        assert!(!resolution.provenance.is_empty());
        assert!(resolution
            .provenance
            .iter()
            .all(|(_, e)| e.source == Source::Default && !e.is_responsive && !e.cleared));
    }

    #[test]
    fn test_later_class_wins_but_earlier_fields_survive() {
        let registry = registry(&[
            ("a", json!({"typography": {"color": "red", "fontSize": "12px"}})),
            ("b", json!({"typography": {"color": "blue"}})),
        ]);
        let context = ResolveContext::new().classes(["a", "b"]).registry(&registry);
        let resolution = resolve(&StyleBundle::default(), &context);

        assert_eq!(resolution.bundle.typography.color, text("blue"));
        assert_eq!(resolution.bundle.typography.font_size, text("12px"));
        assert_eq!(resolution.provenance.source("typography.color"), Some(Source::Class));
    }

    #[test]
    fn test_unset_falls_through_and_is_recorded() {
        let theme = bundle(json!({"typography": {"color": "#333"}}));
        let element = bundle(json!({"typography": {"color": null}}));
        let context = ResolveContext::new().theme(&theme);
        let resolution = resolve(&element, &context);

        assert_eq!(resolution.bundle.typography.color, text("#333"));
        let entry = resolution.provenance.get("typography.color").unwrap();
        assert_eq!(entry.source, Source::Global);
        assert!(entry.cleared);
    }

    #[test]
    fn test_lists_replace_wholesale() {
        let theme = bundle(json!({"boxShadow": [{"y": 1}, {"y": 2}]}));
        let element = bundle(json!({"boxShadow": [{"y": 8}]}));
        let resolution = resolve(&element, &ResolveContext::new().theme(&theme));

        let shadows = resolution.bundle.box_shadow.value().unwrap();
        assert_eq!(shadows.len(), 1);
        assert_eq!(shadows[0].y, 8.0);
        assert_eq!(resolution.provenance.source("boxShadow"), Some(Source::User));
    }

    #[test]
    fn test_breakpoint_override_reports_underlying_category() {
        let registry = registry(&[(
            "title",
            json!({
                "typography": {"fontSize": "32px"},
                "responsive": {"mobile": {"typography": {"fontSize": "20px"}}}
            }),
        )]);
        let context = ResolveContext::new()
            .breakpoint(Breakpoint::Mobile)
            .classes(["title"])
            .registry(&registry);
        let resolution = resolve(&StyleBundle::default(), &context);

        assert_eq!(resolution.bundle.typography.font_size, text("20px"));
        let entry = resolution.provenance.get("typography.fontSize").unwrap();
        assert_eq!(entry.source, Source::Class);
        assert!(entry.is_responsive);
    }

    #[test]
    fn test_responsive_flag_survives_higher_winner() {
        let theme = bundle(json!({
            "responsive": {"tablet": {"layout": {"display": "grid"}}}
        }));
        let manual = bundle(json!({"layout": {"display": "flex"}}));
        let context = ResolveContext::new()
            .breakpoint(Breakpoint::Tablet)
            .theme(&theme)
            .manual(&manual);
        let resolution = resolve(&StyleBundle::default(), &context);

        let entry = resolution.provenance.get("layout.display").unwrap();
        assert_eq!(entry.source, Source::User);
        assert!(entry.is_responsive);
    }

    #[test]
    fn test_breakpoint_overrides_do_not_chain() {
        let element = bundle(json!({
            "typography": {"fontSize": "16px"},
            "responsive": {"tablet": {"typography": {"fontSize": "14px"}}}
        }));
        let context = ResolveContext::new().breakpoint(Breakpoint::Mobile);
        let resolution = resolve(&element, &context);

        assert_eq!(resolution.bundle.typography.font_size, text("16px"));
        assert!(!resolution.provenance.is_responsive("typography.fontSize"));
    }

    #[test]
    fn test_state_overlay_sits_above_breakpoint() {
        let element = bundle(json!({
            "typography": {"color": "black"},
            "responsive": {"mobile": {"typography": {"color": "gray"}}},
            "states": {"hover": {"typography": {"color": "red"}}}
        }));

        let hover = ResolveContext::new()
            .breakpoint(Breakpoint::Mobile)
            .state(InteractionState::Hover);
        assert_eq!(resolve(&element, &hover).bundle.typography.color, text("red"));

        let idle = ResolveContext::new().breakpoint(Breakpoint::Mobile);
        assert_eq!(resolve(&element, &idle).bundle.typography.color, text("gray"));
    }

    #[test]
    fn test_manual_override_beats_state_overlay() {
        let element = bundle(json!({"states": {"focus": {"typography": {"color": "red"}}}}));
        let manual = bundle(json!({"typography": {"color": "green"}}));
        let context = ResolveContext::new()
            .state(InteractionState::Focus)
            .manual(&manual);
        assert_eq!(resolve(&element, &context).bundle.typography.color, text("green"));
    }

    #[test]
    fn test_missing_classes_are_reported_not_fatal() {
        let registry = registry(&[("card", json!({"layout": {"display": "flex"}}))]);
        let context = ResolveContext::new()
            .classes(["ghost", "card", "phantom"])
            .registry(&registry);
        let resolution = resolve(&StyleBundle::default(), &context);

        assert_eq!(resolution.missing_classes, vec!["ghost", "phantom"]);
        assert_eq!(resolution.bundle.layout.display, text("flex"));
    }

    #[test]
    fn test_classes_without_registry_are_all_missing() {
        let context = ResolveContext::new().classes(["card"]);
        let resolution = resolve(&StyleBundle::default(), &context);
        assert_eq!(resolution.missing_classes, vec!["card"]);
    }

    #[test]
    fn test_raw_class_names_are_sanitized_before_lookup() {
        let registry = registry(&[("Primary Button", json!({"layout": {"display": "flex"}}))]);
        let context = ResolveContext::new()
            .classes(["Primary Button", "Ghost  Link"])
            .registry(&registry);
        let resolution = resolve(&StyleBundle::default(), &context);

        assert_eq!(resolution.bundle.layout.display, text("flex"));
        assert_eq!(resolution.provenance.source("layout.display"), Some(Source::Class));
        assert_eq!(resolution.missing_classes, vec!["Ghost  Link"]);
    }

    #[test]
    fn test_base_breakpoint_ignores_responsive_overrides() {
        let element = bundle(json!({
            "typography": {"fontSize": "16px"},
            "responsive": {"mobile": {"typography": {"fontSize": "12px"}}}
        }));
        let context = ResolveContext::new().breakpoint(Breakpoint::Desktop);
        let resolution = resolve(&element, &context);

        assert_eq!(resolution.bundle.typography.font_size, text("16px"));
        let entry = resolution.provenance.get("typography.fontSize").unwrap();
        assert_eq!(entry.source, Source::User);
        assert!(!entry.is_responsive);
        assert!(!resolution.provenance.is_responsive("typography.fontSize"));
    }

    #[test]
    fn test_theme_breakpoint_override_beats_element_base() {
        let theme = bundle(json!({"responsive": {"mobile": {"typography": {"color": "gray"}}}}));
        let element = bundle(json!({"typography": {"color": "black"}}));

        let mobile = ResolveContext::new().breakpoint(Breakpoint::Mobile).theme(&theme);
        let resolution = resolve(&element, &mobile);
        assert_eq!(resolution.bundle.typography.color, text("gray"));
        let entry = resolution.provenance.get("typography.color").unwrap();
        assert_eq!(entry.source, Source::Global);
        assert!(entry.is_responsive);

        let desktop = ResolveContext::new().breakpoint(Breakpoint::Desktop).theme(&theme);
        let resolution = resolve(&element, &desktop);
        assert_eq!(resolution.bundle.typography.color, text("black"));
        assert_eq!(resolution.provenance.source("typography.color"), Some(Source::User));
        assert!(!resolution.provenance.is_responsive("typography.color"));
    }

    #[test]
    fn test_breakpoint_unset_clears_without_marking_responsive() {
        let theme = bundle(json!({"typography": {"color": "#333"}}));
        let element = bundle(json!({
            "typography": {"color": "red"},
            "responsive": {"mobile": {"typography": {"color": null}}}
        }));
        let context = ResolveContext::new().breakpoint(Breakpoint::Mobile).theme(&theme);
        let resolution = resolve(&element, &context);

        assert_eq!(resolution.bundle.typography.color, text("red"));
        let entry = resolution.provenance.get("typography.color").unwrap();
        assert_eq!(entry.source, Source::User);
        assert!(entry.cleared);
        assert!(!entry.is_responsive);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::schema::Field;
    use proptest::prelude::*;

    fn color() -> impl Strategy<Value = Field<String>> {
        prop_oneof![
            Just(Field::Absent),
            Just(Field::Unset),
            "#[0-9a-f]{6}".prop_map(Field::Set),
        ]
    }

    proptest! {
        #[test]
        fn highest_set_tier_wins(theme in color(), element in color(), manual in color()) {
            let mut theme_bundle = StyleBundle::default();
            theme_bundle.typography.color = theme.clone();
            let mut element_bundle = StyleBundle::default();
            element_bundle.typography.color = element.clone();
            let mut manual_bundle = StyleBundle::default();
            manual_bundle.typography.color = manual.clone();

            let context = ResolveContext::new().theme(&theme_bundle).manual(&manual_bundle);
            let resolution = resolve(&element_bundle, &context);

            let expected = [(&manual, Source::User), (&element, Source::User), (&theme, Source::Global)]
                .into_iter()
                .find(|(field, _)| field.is_set());
            match expected {
                Some((field, source)) => {
                    prop_assert_eq!(&resolution.bundle.typography.color, field);
                    prop_assert_eq!(resolution.provenance.source("typography.color"), Some(source));
                }
                None => {
                    prop_assert!(resolution.bundle.typography.color.is_absent());
                    prop_assert!(resolution.provenance.get("typography.color").is_none());
                }
            }
        }

        #[test]
        fn resolution_is_deterministic(theme in color(), element in color()) {
            let mut theme_bundle = StyleBundle::default();
            theme_bundle.typography.color = theme;
            let mut element_bundle = StyleBundle::default();
            element_bundle.typography.color = element;

            let context = ResolveContext::new().theme(&theme_bundle);
            prop_assert_eq!(resolve(&element_bundle, &context), resolve(&element_bundle, &context));
        }
    }
}
