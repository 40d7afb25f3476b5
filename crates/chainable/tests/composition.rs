//! End-to-end composition through the facade.
//!
//! Wraps several render-prop providers, combines them with `chain!` and
//! `all`, and exposes the result as both a render-prop component and a
//! higher-order component.

use chainable::prelude::*;
use chainable_host::testing::{RecordingComponent, text_leaf};
use serde_json::json;

fn render_text(node: &Node) -> String {
    Renderer::default()
        .render(node)
        .expect("render")
        .text_content()
}

fn providers() -> (RecordingComponent<i32>, RecordingComponent<String>) {
    (
        RecordingComponent::new("Counter", 3),
        RecordingComponent::new("User", "ada".to_owned()).with_key("render"),
    )
}

#[test]
fn chain_composes_nested_providers() {
    let (counter, user) = providers();
    let counted = from_render_prop::<i32>(&counter.component_type(), None);
    let named = from_non_standard_render_prop::<String>("render", &user.component_type(), None);
    let greeting = chain! {
        count <= counted;
        name <= named;
        let shout = name.to_uppercase();
        of(format!("{shout}x{count}"))
    };

    let output = Renderer::default()
        .render(&greeting.render(|text: String| Node::text(text)))
        .expect("render");

    assert_eq!(output.text_content(), "ADAx3");
    assert_eq!(counter.call_count(), 1);
    assert_eq!(user.call_count(), 1);
    let Output::Host { tag, children, .. } = output else {
        panic!("expected host output");
    };
    assert_eq!(tag, "Counter");
    assert!(matches!(&children[0], Output::Host { tag, .. } if tag == "User"));
}

#[test]
fn all_nests_providers_in_input_order() {
    let (counter, user) = providers();
    let both = all((
        from_render_prop::<i32>(&counter.component_type(), None),
        from_non_standard_render_prop::<String>("render", &user.component_type(), None),
    ));

    let output = Renderer::default()
        .render(&both.render(|(count, name)| Node::text(format!("{name}:{count}"))))
        .expect("render");

    assert_eq!(output.text_content(), "ada:3");
    let Output::Host { tag, .. } = output else {
        panic!("expected host output");
    };
    assert_eq!(tag, "Counter");
}

#[test]
fn composed_chainable_becomes_higher_order_component() {
    let (counter, user) = providers();
    let both = all((
        from_render_prop::<i32>(&counter.component_type(), None),
        from_non_standard_render_prop::<String>("render", &user.component_type(), None),
    ));
    let hoc = both.to_higher_order_component(|(count, name): (i32, String)| {
        Props::new().with("text", format!("{name}#{count}"))
    });

    let node = create_element(&hoc.wrap(&text_leaf()), Props::new().with("text", "ignored"));
    assert_eq!(render_text(&node), "ada#3");
}

#[test]
fn composed_chainable_becomes_render_prop() {
    let (counter, _) = providers();
    let doubled = from_render_prop::<i32>(&counter.component_type(), None).map(|n| n * 2);
    let component = doubled.to_render_prop();

    let node = create_element(
        &component,
        Props::new().with_callback(CHILDREN, Callback::from_fn(|n: i32| Node::text(n.to_string()))),
    );
    assert_eq!(render_text(&node), "6");

    let back = from_render_prop::<i32>(&component, None);
    assert_eq!(render_text(&back.map(|n| n + 1).render(|n| Node::text(n.to_string()))), "7");
}

#[test]
fn provider_parameters_reach_wrapped_component() {
    let (counter, _) = providers();
    let chainable = from_render_prop::<i32>(
        &counter.component_type(),
        Some(Props::new().with("step", 5)),
    );
    render_text(&chainable.render(|n| Node::text(n.to_string())));

    let calls = counter.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].data_snapshot(),
        json!({"step": 5, "children": "<callback>"})
    );
}

#[test]
fn errors_from_inner_components_propagate_through_adapters() {
    let failing = ComponentType::from_fn("Failing", |_: &Props| {
        Err(RenderError::component("Failing", "backend offline"))
    });
    let chainable = from_render_prop::<i32>(&failing, None).map(|n| n + 1);
    let hoc = chainable.to_higher_order_component(|n: i32| Props::new().with("text", n));
    let node = create_element(&hoc.wrap(&text_leaf()), Props::new());

    assert_eq!(
        Renderer::default().render(&node),
        Err(RenderError::component("Failing", "backend offline"))
    );
}

#[test]
fn render_depth_limit_applies_to_composed_trees() {
    let (counter, user) = providers();
    let both = all((
        from_render_prop::<i32>(&counter.component_type(), None),
        from_non_standard_render_prop::<String>("render", &user.component_type(), None),
    ));
    let node = both.render(|(count, _)| Node::text(count.to_string()));

    let shallow = Renderer::new(RendererConfig::default().with_max_depth(1));
    assert_eq!(
        shallow.render(&node),
        Err(RenderError::DepthExceeded { limit: 1 })
    );
    let deep_enough = Renderer::new(RendererConfig::default().with_max_depth(2));
    assert_eq!(
        deep_enough.render(&node).expect("render").text_content(),
        "3"
    );
}
