use dioxus::prelude::*;

use crate::data::{MAX_CARD_COUNT, MIN_CARD_COUNT};

#[inline_props]
fn Paragraph<'a>(cx: Scope<'a>, children: Element<'a>) -> Element {
    cx.render(rsx!(p { children }))
}

pub fn About(cx: Scope) -> Element {
    cx.render(rsx! (
        div {
            h2 {
                "About"
            }
            Paragraph {
                "This website generates a deck of cards for a tabletop game from a short "
                "description. Pick a theme and an art style, choose how many cards you want "
                "(from {MIN_CARD_COUNT} to {MAX_CARD_COUNT}) and optionally describe the setting."
            }
            Paragraph {
                "The generator writes a story background for the theme, then fills the deck "
                "with role cards for the players and event cards for the rest. Every card has a "
                "name, a description and an effect. The finished deck is also rendered as a "
                "printable PDF."
            }
            Paragraph {
                "The frontend is written in Rust compiled to WebAssembly, using "
                a {
                    href: "https://dioxuslabs.com/",
                    "Dioxus"
                }
                " for the UI and its router for navigation between pages."
            }
        }
    ))
}
