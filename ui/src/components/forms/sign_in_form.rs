use dioxus::prelude::*;

use crate::components::inputs::{FieldError, InputType, ValidatedInput};
use crate::features::auth::{AuthAction, AuthMode, AuthState, SignInField};

#[derive(Props, PartialEq, Clone)]
pub struct SignInFormProps {
    pub state: Signal<AuthState>,
    pub dispatch: EventHandler<AuthAction>,
}

#[component]
pub fn SignInForm(props: SignInFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let visible_error =
        move |field: SignInField| state().sign_in.visible_error(field).map(str::to_string);

    rsx! {
        div {
            class: state().panel_class(AuthMode::SignIn),
            form {
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    dispatch.call(AuthAction::SignInSubmitted);
                },

                h1 { "Sign In" }

                ValidatedInput {
                    name: SignInField::Email.name().to_string(),
                    value: state().sign_in.value(SignInField::Email).to_string(),
                    placeholder: "Email".to_string(),
                    input_type: InputType::Email,
                    on_change: move |value: String| {
                        dispatch.call(AuthAction::SignInChanged(SignInField::Email, value));
                    },
                    on_blur: move |_| dispatch.call(AuthAction::SignInBlurred(SignInField::Email))
                }
                FieldError { message: visible_error(SignInField::Email) }

                ValidatedInput {
                    name: SignInField::Password.name().to_string(),
                    value: state().sign_in.value(SignInField::Password).to_string(),
                    placeholder: "Password".to_string(),
                    input_type: InputType::Password,
                    on_change: move |value: String| {
                        dispatch.call(AuthAction::SignInChanged(SignInField::Password, value));
                    },
                    on_blur: move |_| dispatch.call(AuthAction::SignInBlurred(SignInField::Password))
                }
                FieldError { message: visible_error(SignInField::Password) }

                a {
                    href: "#",
                    "Forgot Password?"
                }
                button {
                    r#type: "submit",
                    "Sign In"
                }
            }
        }
    }
}
