use super::*;
use futures::executor::block_on;
use yew::LocalServerRenderer;

fn render(props: StepperProps) -> String {
    block_on(LocalServerRenderer::<NumberStepper>::with_props(props).render())
}

fn props(value: i32, min: i32, max: i32, disabled: bool) -> StepperProps {
    StepperProps {
        min,
        max,
        step: 1,
        name: AttrValue::from("adult"),
        value,
        disabled,
        repeat_interval_ms: None,
        on_change: Callback::noop(),
        on_blur: Callback::noop(),
    }
}

/// Opening tag of the first `<button>` carrying `class_fragment`.
fn button_tag<'a>(html: &'a str, class_fragment: &str) -> &'a str {
    html.split("<button")
        .find(|segment| segment.contains(class_fragment))
        .and_then(|segment| segment.split('>').next())
        .unwrap_or_else(|| panic!("button {class_fragment} missing in {html}"))
}

#[test]
fn renders_field_and_both_buttons() {
    let html = render(props(2, 0, 4, false));
    assert!(html.contains(r#"value="2""#), "value should render: {html}");
    assert!(html.contains(r#"min="0""#));
    assert!(html.contains(r#"max="4""#));
    assert!(html.contains(r#"name="adult""#));
    assert!(!button_tag(&html, "stepper__button--decrement").contains("disabled"));
    assert!(!button_tag(&html, "stepper__button--increment").contains("disabled"));
}

#[test]
fn buttons_disable_at_their_bounds() {
    let html = render(props(1, 1, 3, false));
    assert!(button_tag(&html, "stepper__button--decrement").contains("disabled"));
    assert!(!button_tag(&html, "stepper__button--increment").contains("disabled"));

    let html = render(props(3, 1, 3, false));
    assert!(button_tag(&html, "stepper__button--increment").contains("disabled"));
}

fn input_tag(html: &str) -> &str {
    html.split("<input")
        .nth(1)
        .and_then(|segment| segment.split('>').next())
        .unwrap_or_else(|| panic!("input missing in {html}"))
}

#[test]
fn disabled_control_locks_text_entry_only() {
    let html = render(props(2, 0, 4, true));
    assert!(input_tag(&html).contains("disabled"));
    assert!(!button_tag(&html, "stepper__button--decrement").contains("disabled"));
    assert!(!button_tag(&html, "stepper__button--increment").contains("disabled"));
}

#[test]
fn disabled_control_at_collapsed_max_can_still_decrease() {
    let html = render(props(2, 0, 2, true));
    assert!(input_tag(&html).contains("disabled"));
    assert!(button_tag(&html, "stepper__button--increment").contains("disabled"));
    assert!(!button_tag(&html, "stepper__button--decrement").contains("disabled"));
}

#[test]
fn defaults_apply_when_props_are_omitted() {
    let html = render(yew::props!(StepperProps {}));
    assert!(html.contains(r#"name="CustomInputNumber""#));
    assert!(html.contains(r#"max="10""#));
    assert!(html.contains(r#"value="0""#));
}

#[test]
fn out_of_range_initial_value_is_clamped() {
    let html = render(props(9, 0, 4, false));
    assert!(html.contains(r#"value="4""#), "clamped value: {html}");
}
