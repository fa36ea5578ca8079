use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    /// HTML `pattern` attribute; empty means none
    #[props(default)]
    pub pattern: String,
    pub on_change: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let pattern = if props.pattern.is_empty() {
        None
    } else {
        Some(props.pattern.clone())
    };
    let on_change = props.on_change;
    let on_blur = props.on_blur;

    rsx! {
        input {
            r#type: "{props.input_type.as_str()}",
            name: "{props.name}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            pattern: pattern,
            oninput: move |event| on_change.call(event.value()),
            onblur: move |_| on_blur.call(())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    #[props(!optional)]
    pub message: Option<String>,
}

/// Renders the field's message, or nothing while it has none to show
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "error",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
