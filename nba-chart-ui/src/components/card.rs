//! Bordered card with an optional title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(default = String::new())]
    pub title: String,
    pub children: Element,
}

/// The one card widget used for every panel of the dashboard.
#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #e0e0e0; border-radius: 8px; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,0.05); padding: 16px;",
            if !props.title.is_empty() {
                h2 {
                    style: "margin: 0 0 12px 0; font-size: 18px; font-weight: 600;",
                    "{props.title}"
                }
            }
            {props.children}
        }
    }
}
