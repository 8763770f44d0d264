use crate::components::RoomAllocationPanel;
use room_allocation_core::RoomCount;
use yew::prelude::*;

/// Trip used by the demo page.
pub const DEMO_GUESTS: u32 = 10;
pub const DEMO_ROOMS: u32 = 3;

/// Serialize the reported list the way host pages consume it.
#[must_use]
pub fn describe_allocation(rooms: &[RoomCount]) -> String {
    serde_json::to_string(rooms).unwrap_or_else(|err| format!("<unserializable: {err}>"))
}

fn report_allocation(rooms: &[RoomCount]) {
    log::info!("room allocation changed: {}", describe_allocation(rooms));
    #[cfg(target_arch = "wasm32")]
    match serde_wasm_bindgen::to_value(rooms) {
        Ok(value) => crate::dom::console_log("room allocation", &value),
        Err(err) => crate::dom::console_error(&format!("failed to convert allocation: {err}")),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let on_change = Callback::from(|rooms: Vec<RoomCount>| report_allocation(&rooms));
    html! {
        <main id="main" class="app" role="main">
            <RoomAllocationPanel guest={DEMO_GUESTS} room={DEMO_ROOMS} on_change={on_change} />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn describes_rooms_as_json_list() {
        let rooms = [RoomCount::new(1, 0), RoomCount::new(2, 2)];
        assert_eq!(
            describe_allocation(&rooms),
            r#"[{"adult":1,"child":0},{"adult":2,"child":2}]"#
        );
    }

    #[test]
    fn app_renders_demo_trip() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains(r#"id="main""#));
        assert!(html.contains("住客人數：10 人 / 3 房"));
    }

    #[test]
    fn app_shows_no_untranslated_heading() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(!html.contains("<h1"), "demo host adds no heading: {html}");
        assert!(!html.contains("Room allocation"));
    }
}
