use dioxus::prelude::*;

use crate::features::auth::AuthMode;

#[derive(Props, PartialEq, Clone)]
pub struct TogglePanelProps {
    pub on_select: EventHandler<AuthMode>,
}

/// Sliding overlay with one call-to-action per mode
#[component]
pub fn TogglePanel(props: TogglePanelProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        div {
            class: "toggle-container",
            div {
                class: "toggle",
                div {
                    class: "toggle-panel toggle-left",
                    h1 { "Welcome Back!" }
                    p { "Enter the personal details to use all of site features" }
                    button {
                        r#type: "button",
                        onclick: move |_| on_select.call(AuthMode::SignIn),
                        "Sign In"
                    }
                }
                div {
                    class: "toggle-panel toggle-right",
                    h1 { "Hello, User!" }
                    p { "Register with personal details to use all of site features" }
                    button {
                        r#type: "button",
                        onclick: move |_| on_select.call(AuthMode::SignUp),
                        "Sign Up"
                    }
                }
            }
        }
    }
}
