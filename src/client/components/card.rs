use dioxus::prelude::*;

use crate::data::{Card, CardKind};

fn kind_label(kind: CardKind) -> &'static str {
    match kind {
        CardKind::Role => "Role",
        CardKind::Event => "Event",
        CardKind::Item => "Item",
        CardKind::Unspecified => "Card",
    }
}

#[inline_props]
pub fn CardView<'a>(cx: Scope<'a>, card: &'a Card) -> Element {
    let kind = kind_label(card.kind);
    cx.render(rsx!(
        div {
            class: "w-64 h-88 m-2 p-3 border-2 rounded-lg text-left",
            div {
                class: "text-lg font-bold",
                "{card.name}"
            }
            div {
                class: "text-sm text-gray-500",
                "{kind}"
            }
            p {
                class: "text-xs mt-2",
                "{card.description}"
            }
            (!card.effect.is_empty()).then(|| rsx!(
                p {
                    class: "text-xs mt-2",
                    "Effect: {card.effect}"
                }
            ))
        }
    ))
}
