use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Error box with an optional list of things to check.
#[component]
pub fn ErrorView(
    message: Option<String>,
    #[prop(optional)] hints: Vec<&'static str>,
) -> impl IntoView {
    let has_hints = !hints.is_empty();

    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <div class="error-message">
                <h3>"Error"</h3>
                <p>{message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}</p>
                <Show when=move || has_hints>
                    <p>"Check that:"</p>
                </Show>
                <ul>
                    {hints.into_iter().map(|hint| view! { <li>{hint}</li> }).collect_view()}
                </ul>
            </div>
        </MessageBar>
    }
}
