#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::routes::{RouteTable, View};

mod about;
mod game_form;
mod layout;

#[derive(Props, PartialEq)]
pub struct AppProps {
    pub routes: RouteTable,
}

pub fn app(cx: Scope<AppProps>) -> Element {
    let routes = &cx.props.routes;
    cx.render(rsx! {
        Router {
            layout::Layout {
                routes: routes,
                routes.iter().map(|route| rsx!(
                    Route {
                        key: "{route.name}",
                        to: route.path,
                        Page {
                            view: route.view,
                        }
                    }
                ))
            }
        }
    })
}

#[inline_props]
fn Page(cx: Scope, view: View) -> Element {
    match view {
        View::GameForm => cx.render(rsx!(game_form::GameForm {})),
        View::About => cx.render(rsx!(about::About {})),
    }
}
