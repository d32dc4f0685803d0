use dioxus::prelude::*;

use crate::routes::RouteTable;

#[inline_props]
pub fn Layout<'a>(cx: Scope<'a>, routes: &'a RouteTable, children: Element<'a>) -> Element {
    cx.render(rsx! (
        header {
            class: "mx-auto text-center",
            h1 {
                class: "text-3xl p-6",
                "Board Game Card Generator"
            }
            nav {
                routes.iter().map(|route| rsx!(
                    Link {
                        key: "{route.name}",
                        to: route.path,
                        span {
                            class: "inline-block px-4",
                            "{route.name}"
                        }
                    }
                ))
            }
        }
        main {
            class: "text-center",
            children
        }
    ))
}
