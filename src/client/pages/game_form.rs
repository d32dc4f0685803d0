use dioxus::prelude::*;

use crate::{
    client::{api, components::CardView},
    data::{
        GenerateGameRequest, GenerateGameResponse, DEFAULT_CARD_COUNT, MAX_CARD_COUNT,
        MIN_CARD_COUNT,
    },
};

enum Submission {
    Idle,
    Invalid(String),
    Pending,
    Done(GenerateGameResponse),
    Failed(String),
}

#[inline_props]
fn Field<'a>(cx: Scope<'a>, label: &'a str, children: Element<'a>) -> Element {
    cx.render(rsx!(
        label {
            class: "block p-2",
            span {
                class: "inline-block w-32 text-right pr-4",
                "{label}"
            }
            children
        }
    ))
}

pub fn GameForm(cx: Scope) -> Element {
    let theme = use_state(&cx, String::new);
    let card_count = use_state(&cx, || DEFAULT_CARD_COUNT.to_string());
    let style = use_state(&cx, String::new);
    let description = use_state(&cx, String::new);
    let submission = use_state(&cx, || Submission::Idle);
    let pending = matches!(submission.get(), Submission::Pending);

    let result = match submission.get() {
        Submission::Idle => rsx!(div {}),
        Submission::Invalid(message) => rsx!(
            p {
                class: "text-red-600",
                "{message}"
            }
        ),
        Submission::Pending => rsx!(
            p {
                "Generating…"
            }
        ),
        Submission::Failed(message) => rsx!(
            p {
                class: "text-red-600",
                "Generation failed: {message}"
            }
        ),
        Submission::Done(response) => {
            let count = response.cards.len();
            rsx!(
                div {
                    h2 {
                        "Generated {count} cards"
                    }
                    response.pdf_url.as_ref().map(|pdf_url| rsx!(
                        a {
                            href: "{pdf_url}",
                            target: "_blank",
                            "Download printable PDF"
                        }
                    ))
                    div {
                        class: "flex flex-wrap justify-center",
                        response.cards.iter().enumerate().map(|(index, card)| rsx!(
                            CardView {
                                key: "{index}",
                                card: card,
                            }
                        ))
                    }
                }
            )
        }
    };

    cx.render(rsx! (
        div {
            h2 {
                "Create a game"
            }
            form {
                prevent_default: "onsubmit",
                onsubmit: move |_| {
                    let request = GenerateGameRequest::from_form(
                        theme.get(),
                        card_count.get(),
                        style.get(),
                        description.get(),
                    );
                    let request = match request {
                        Ok(request) => request,
                        Err(err) => {
                            submission.set(Submission::Invalid(err.to_string()));
                            return;
                        }
                    };
                    log::info!("Requesting {} cards for {:?}", request.card_count, request.theme);
                    submission.set(Submission::Pending);
                    let submission = submission.clone();
                    cx.spawn(async move {
                        match api::generate(&request).await {
                            Ok(response) => {
                                log::info!("Received {} cards", response.cards.len());
                                submission.set(Submission::Done(response));
                            }
                            Err(err) => {
                                log::error!("Card generation failed: {err}");
                                submission.set(Submission::Failed(err.to_string()));
                            }
                        }
                    });
                },
                Field {
                    label: "Theme",
                    input {
                        "type": "text",
                        placeholder: "Space pirates",
                        value: "{theme}",
                        oninput: move |e| theme.set(e.value.clone()),
                    }
                }
                Field {
                    label: "Cards",
                    input {
                        "type": "number",
                        min: "{MIN_CARD_COUNT}",
                        max: "{MAX_CARD_COUNT}",
                        value: "{card_count}",
                        oninput: move |e| card_count.set(e.value.clone()),
                    }
                }
                Field {
                    label: "Style",
                    input {
                        "type": "text",
                        placeholder: "Watercolor",
                        value: "{style}",
                        oninput: move |e| style.set(e.value.clone()),
                    }
                }
                Field {
                    label: "Description",
                    textarea {
                        placeholder: "Optional story background",
                        value: "{description}",
                        oninput: move |e| description.set(e.value.clone()),
                    }
                }
                button {
                    "type": "submit",
                    disabled: "{pending}",
                    "Generate"
                }
            }
            result
        }
    ))
}
