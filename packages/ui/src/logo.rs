use dioxus::prelude::*;

use crate::icons::FaGraduationCap;
use crate::Icon;

/// The Edulynx mark: a rounded badge with a graduation cap.
#[component]
pub fn Logo(#[props(default = 40)] size: u32) -> Element {
    let glyph = size * 3 / 5;
    rsx! {
        div {
            class: "logo-badge",
            style: "width: {size}px; height: {size}px;",
            Icon { icon: FaGraduationCap, width: glyph, height: glyph }
        }
    }
}
