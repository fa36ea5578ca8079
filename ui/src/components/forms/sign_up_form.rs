use dioxus::prelude::*;

use crate::components::inputs::{FieldError, InputType, ValidatedInput};
use crate::features::auth::{AuthAction, AuthMode, AuthState, SignUpField};
use crate::services::config::AuthConfig;

#[derive(Props, PartialEq, Clone)]
pub struct SignUpFormProps {
    pub state: Signal<AuthState>,
    pub dispatch: EventHandler<AuthAction>,
}

#[component]
pub fn SignUpForm(props: SignUpFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = use_context::<AuthConfig>();
    let phone_pattern = config.phone_input_pattern();

    let visible_error =
        move |field: SignUpField| state().sign_up.visible_error(field).map(str::to_string);

    rsx! {
        div {
            class: state().panel_class(AuthMode::SignUp),
            form {
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    dispatch.call(AuthAction::SignUpSubmitted);
                },

                h1 {
                    class: "header",
                    "Create Account"
                }

                ValidatedInput {
                    name: SignUpField::Name.name().to_string(),
                    value: state().sign_up.value(SignUpField::Name).to_string(),
                    placeholder: "Name".to_string(),
                    input_type: InputType::Text,
                    on_change: move |value: String| {
                        dispatch.call(AuthAction::SignUpChanged(SignUpField::Name, value));
                    },
                    on_blur: move |_| dispatch.call(AuthAction::SignUpBlurred(SignUpField::Name))
                }
                FieldError { message: visible_error(SignUpField::Name) }

                ValidatedInput {
                    name: SignUpField::Email.name().to_string(),
                    value: state().sign_up.value(SignUpField::Email).to_string(),
                    placeholder: "Email".to_string(),
                    input_type: InputType::Email,
                    on_change: move |value: String| {
                        dispatch.call(AuthAction::SignUpChanged(SignUpField::Email, value));
                    },
                    on_blur: move |_| dispatch.call(AuthAction::SignUpBlurred(SignUpField::Email))
                }
                FieldError { message: visible_error(SignUpField::Email) }

                ValidatedInput {
                    name: SignUpField::Number.name().to_string(),
                    value: state().sign_up.value(SignUpField::Number).to_string(),
                    placeholder: "Number".to_string(),
                    input_type: InputType::Tel,
                    pattern: phone_pattern,
                    on_change: move |value: String| {
                        dispatch.call(AuthAction::SignUpChanged(SignUpField::Number, value));
                    },
                    on_blur: move |_| dispatch.call(AuthAction::SignUpBlurred(SignUpField::Number))
                }
                FieldError { message: visible_error(SignUpField::Number) }

                ValidatedInput {
                    name: SignUpField::Password.name().to_string(),
                    value: state().sign_up.value(SignUpField::Password).to_string(),
                    placeholder: "Password".to_string(),
                    input_type: InputType::Password,
                    on_change: move |value: String| {
                        dispatch.call(AuthAction::SignUpChanged(SignUpField::Password, value));
                    },
                    on_blur: move |_| dispatch.call(AuthAction::SignUpBlurred(SignUpField::Password))
                }
                FieldError { message: visible_error(SignUpField::Password) }

                ValidatedInput {
                    name: SignUpField::ConfirmPassword.name().to_string(),
                    value: state().sign_up.value(SignUpField::ConfirmPassword).to_string(),
                    placeholder: "Confirm Password".to_string(),
                    input_type: InputType::Password,
                    on_change: move |value: String| {
                        dispatch.call(AuthAction::SignUpChanged(SignUpField::ConfirmPassword, value));
                    },
                    on_blur: move |_| dispatch.call(AuthAction::SignUpBlurred(SignUpField::ConfirmPassword))
                }
                FieldError { message: visible_error(SignUpField::ConfirmPassword) }

                button {
                    r#type: "submit",
                    "Sign Up"
                }
            }
        }
    }
}
