use serde_json::{json, Value};
use stylecast::registry::{sanitize, ClassDefinition, ClassRegistry};
use stylecast::schema::{Breakpoint, InteractionState, StyleBundle};
use stylecast::{render, resolve, ResolveContext, Source};

fn bundle(value: Value) -> StyleBundle {
    StyleBundle::from_value(&value).unwrap()
}

fn registry(classes: &[(&str, Value)]) -> ClassRegistry {
    let mut registry = ClassRegistry::new();
    for (name, styling) in classes {
        registry
            .create(ClassDefinition::new(*name, bundle(styling.clone())))
            .unwrap();
    }
    registry
}

#[test]
fn test_class_names_are_sanitized_on_create() {
    assert_eq!(sanitize("My Button!!"), "my-button");

    let registry = registry(&[("My Button!!", json!({}))]);
    assert!(registry.contains("my-button"));
    assert_eq!(registry.get("my-button").unwrap().label, "My Button!!");
}

#[test]
fn test_spacer_class_with_manual_left_margin() {
    let registry = registry(&[("spacer", json!({"layout": {"margin": {"top": "20px"}}}))]);
    let manual = bundle(json!({"layout": {"margin": {"left": "5px"}}}));
    let context = ResolveContext::new()
        .class("spacer")
        .registry(&registry)
        .manual(&manual);

    let (css, resolution) = render(&StyleBundle::new(), &context);

    assert_eq!(css.get("margin"), Some("20px 0 0 5px"));
    let provenance = &resolution.provenance;
    assert_eq!(provenance.source("layout.margin.top"), Some(Source::Class));
    assert_eq!(provenance.source("layout.margin.left"), Some(Source::User));
    assert_eq!(provenance.source("layout.margin.right"), Some(Source::Default));
    assert_eq!(provenance.source("layout.margin.bottom"), Some(Source::Default));
    assert!(provenance.is_inherited("layout.margin.top"));
    assert!(!provenance.is_inherited("layout.margin.left"));
}

#[test]
fn test_breakpoints_do_not_chain() {
    let element = bundle(json!({
        "responsive": {"tablet": {"typography": {"fontSize": "14px"}}}
    }));

    let tablet = ResolveContext::new().breakpoint(Breakpoint::Tablet);
    let (css, resolution) = render(&element, &tablet);
    assert_eq!(css.get("font-size"), Some("14px"));
    assert!(resolution.provenance.is_responsive("typography.fontSize"));

    let mobile = ResolveContext::new().breakpoint(Breakpoint::Mobile);
    let (css, resolution) = render(&element, &mobile);
    assert_eq!(css.get("font-size"), None);
    assert_eq!(resolution.provenance.get("typography.fontSize"), None);
}

#[test]
fn test_state_overlay_applies_above_breakpoint_override() {
    let element = bundle(json!({
        "typography": {"color": "#333"},
        "responsive": {"mobile": {"typography": {"color": "#111", "fontSize": "12px"}}},
        "states": {"hover": {"typography": {"color": "#000"}}}
    }));
    let context = ResolveContext::new()
        .breakpoint(Breakpoint::Mobile)
        .state(InteractionState::Hover);

    let (css, resolution) = render(&element, &context);
    assert_eq!(css.get("color"), Some("#000"));
    assert_eq!(css.get("font-size"), Some("12px"));
    // The mobile tier also wrote the color, even though hover won.
    assert!(resolution.provenance.is_responsive("typography.color"));
}

#[test]
fn test_class_order_and_element_precedence() {
    let registry = registry(&[
        ("muted", json!({"typography": {"color": "#888", "fontWeight": "300"}})),
        ("accent", json!({"typography": {"color": "#c00"}})),
    ]);
    let theme = bundle(json!({"typography": {"fontFamily": "Inter", "color": "#222"}}));

    let context = ResolveContext::new()
        .theme(&theme)
        .classes(["muted", "accent"])
        .registry(&registry);
    let (css, resolution) = render(&StyleBundle::new(), &context);
    assert_eq!(css.get("color"), Some("#c00"));
    assert_eq!(css.get("font-weight"), Some("300"));
    assert_eq!(css.get("font-family"), Some("Inter"));
    assert_eq!(resolution.provenance.source("typography.fontFamily"), Some(Source::Global));

    let element = bundle(json!({"typography": {"color": "#00f"}}));
    let (css, resolution) = render(&element, &context);
    assert_eq!(css.get("color"), Some("#00f"));
    assert_eq!(resolution.provenance.source("typography.color"), Some(Source::User));
}

#[test]
fn test_unset_falls_through_to_lower_tier() {
    let theme = bundle(json!({"typography": {"color": "#222"}}));
    let element = bundle(json!({"typography": {"color": null}}));
    let context = ResolveContext::new().theme(&theme);

    let (css, resolution) = render(&element, &context);
    assert_eq!(css.get("color"), Some("#222"));
    let entry = resolution.provenance.get("typography.color").unwrap();
    assert_eq!(entry.source, Source::Global);
    assert!(entry.cleared);
}

#[test]
fn test_deleted_class_contributes_nothing() {
    let mut registry = registry(&[("card", json!({"layout": {"display": "flex"}}))]);
    let element = bundle(json!({"typography": {"color": "#222"}}));

    let before = {
        let context = ResolveContext::new().class("card").registry(&registry);
        render(&element, &context).0
    };
    assert_eq!(before.get("display"), Some("flex"));

    registry.delete("card").unwrap();
    let context = ResolveContext::new().class("card").registry(&registry);
    let (after, resolution) = render(&element, &context);

    assert_eq!(resolution.missing_classes, vec!["card".to_string()]);
    assert_eq!(after, render(&element, &ResolveContext::new()).0);
    assert_eq!(after.get("display"), Some("block"));
}

#[test]
fn test_resolution_is_deterministic() {
    let registry = registry(&[("button", json!({
        "layout": {"padding": {"top": "4px", "bottom": "4px"}},
        "states": {"focus": {"border": {"top": {"style": "solid", "width": 2, "color": "#09f"}}}}
    }))]);
    let element = bundle(json!({
        "transform": {"rotateZ": 3},
        "responsive": {"tablet": {"layout": {"padding": {"left": "8px"}}}}
    }));
    let context = ResolveContext::new()
        .breakpoint(Breakpoint::Tablet)
        .state(InteractionState::Focus)
        .class("button")
        .registry(&registry);

    let first = resolve(&element, &context);
    let second = resolve(&element, &context);
    assert_eq!(first, second);
    assert_eq!(render(&element, &context).0, render(&element, &context).0);
}

#[test]
fn test_rendered_card_text() {
    let registry = registry(&[(
        "card",
        json!({
            "layout": {
                "display": "flex",
                "flex": {"direction": "column", "gap": "12px"},
                "padding": {"top": "16px", "right": "16px", "bottom": "16px", "left": "16px"}
            },
            "border": {"radius": {"linked": true, "topLeft": 8}},
            "boxShadow": [{"y": 2, "blur": 4, "color": "rgba(0,0,0,.1)"}]
        }),
    )]);
    let theme = bundle(json!({"typography": {"fontFamily": "Inter, sans-serif", "color": "#222"}}));
    let element = bundle(json!({
        "layout": {"margin": {"top": "20px"}},
        "typography": {"fontSize": "18px"},
        "background": {
            "type": "gradient",
            "gradient": {"stops": [{"color": "#fff", "position": 80}, {"color": "#000", "position": 0}]}
        },
        "transition": {"enabled": true, "duration": 200}
    }));
    let context = ResolveContext::new()
        .theme(&theme)
        .class("card")
        .registry(&registry);

    let (css, _) = render(&element, &context);
    insta::assert_snapshot!(css.to_css_text(), @r"
display: flex;
position: static;
margin: 20px 0 0 0;
padding: 16px 16px 16px 16px;
flex-direction: column;
gap: 12px;
font-family: Inter, sans-serif;
font-size: 18px;
color: #222;
background-image: linear-gradient(180deg, #000 0%, #fff 80%);
border-radius: 8px;
box-shadow: 0px 2px 4px 0px rgba(0,0,0,.1);
transition: all 200ms ease 0ms;
");
}

#[test]
fn test_rendered_hover_rule() {
    let element = bundle(json!({
        "typography": {"color": "#333"},
        "states": {"hover": {
            "typography": {"color": "#000", "textDecoration": "underline"},
            "filter": {"brightness": 120}
        }}
    }));
    let state = InteractionState::Hover;
    let context = ResolveContext::new().state(state);

    let (css, _) = render(&element, &context);
    let selector = format!(".link{}", state.selector_suffix());
    insta::assert_snapshot!(css.to_css_rule(&selector), @r"
.link:hover {
  display: block;
  position: static;
  margin: 0 0 0 0;
  padding: 0 0 0 0;
  color: #000;
  text-decoration: underline;
  filter: brightness(120%);
}
");
}
