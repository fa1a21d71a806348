//! A set of small, lifetime-free Dioxus components for the Pico.css framework.
//! Pico styles plain semantic HTML, so most of these only pick the right tag.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// A horizontally scrollable wrapper, so wide tables don't break the layout.
#[component]
pub fn Overflow(children: Element) -> Element {
    rsx! { div { class: "overflow-auto", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
}

/// A button; clicks are forwarded to `on_click`.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
