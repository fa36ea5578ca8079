use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::display::TogglePanel;
use crate::components::forms::{SignInForm, SignUpForm};
use crate::features::auth::{handle_submission, AuthAction, AuthMode, AuthState, BrowserSink};
use crate::services::config::AuthConfig;
use crate::{console_error, console_info, console_warn};

const AUTH_PORTAL_CSS: Asset = asset!("/assets/styling/auth_portal.css");

#[derive(Props, PartialEq, Clone)]
pub struct AuthPortalProps {
    #[props(default)]
    pub config: AuthConfig,
}

/// Falls back to the defaults when the supplied config is unusable
fn effective_config(config: AuthConfig) -> AuthConfig {
    match config.validate() {
        Ok(()) => config,
        Err(problems) => {
            for problem in &problems {
                console_warn!("[Auth Portal] Invalid config: {}", problem);
            }
            AuthConfig::default()
        }
    }
}

#[component]
pub fn AuthPortal(props: AuthPortalProps) -> Element {
    let config = use_context_provider(move || effective_config(props.config));
    let transition_ms = config.toggle.transition_ms;

    let mut state = use_signal({
        let config = config.clone();
        move || AuthState::new(&config)
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: AuthAction| {
        let Some(submission) = state.with_mut(|s| s.reduce_in_place(action)) else {
            return;
        };

        console_info!("[Auth Portal] Form accepted, running submission handler");
        let mut sink = BrowserSink;
        if let Err(e) = handle_submission(&submission, &config.submission, &mut sink) {
            if e.is_user_visible_failure() {
                console_error!("[Auth Portal] Could not confirm submission: {}", e);
            } else {
                console_warn!("[Auth Portal] Submission handler failed: {}", e);
            }
        }
    });

    let on_select = move |mode: AuthMode| {
        let action = match mode {
            AuthMode::SignUp => AuthAction::ShowSignUp,
            AuthMode::SignIn => AuthAction::ShowSignIn,
        };
        dispatch.call(action);

        if state.peek().transitioning {
            spawn(async move {
                TimeoutFuture::new(transition_ms).await;
                dispatch.call(AuthAction::TransitionFinished);
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_PORTAL_CSS }

        div {
            class: "whole",
            div {
                class: state().container_class(),
                id: "container",

                SignUpForm {
                    state: state,
                    dispatch: dispatch
                }

                SignInForm {
                    state: state,
                    dispatch: dispatch
                }

                TogglePanel {
                    on_select: on_select
                }
            }
        }
    }
}
