pub use web_sys::{FocusEvent, HtmlInputElement, InputEvent, MouseEvent, PointerEvent};
pub use yew::html::TargetCast;
use yew::prelude::*;

/// Colour of a status box above or instead of the room list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusTone {
    Info,
    Alert,
}

impl StatusTone {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Alert => "alert",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}--{}", self.suffix())
    }

    /// Assistive-technology role for the box.
    #[must_use]
    pub const fn role(self) -> &'static str {
        match self {
            Self::Info => "status",
            Self::Alert => "alert",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBoxProps {
    pub tone: StatusTone,
    pub message: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StatusBox)]
pub fn status_box(props: &StatusBoxProps) -> Html {
    let mut classes = class_list(&["status-box"], &props.class);
    classes.push(props.tone.class("status-box"));
    html! {
        <div class={classes} role={props.tone.role()}>
            <p class="text-400">{ props.message.clone() }</p>
        </div>
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}
