// src/handlers/signup.rs
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::models::{SignupForm, SignupOutcome, INCOMPLETE_FORM_MESSAGE};
use crate::templates::signup::{LoginRedirect, Notice, SignupPage};
use crate::AppState;

pub async fn signup_form_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SignupForm>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    if !form.is_complete() {
        let names: Vec<&str> = form
            .missing_fields()
            .iter()
            .map(|field| field.name())
            .collect();
        tracing::info!("Incomplete signup form, missing: {}", names.join(", "));
        return Err(render_signup_error(
            &state,
            &form,
            StatusCode::UNPROCESSABLE_ENTITY,
            INCOMPLETE_FORM_MESSAGE,
        ));
    }

    tracing::info!("Signup submitted for username: {}", form.username);

    match state.signup_client.create_account(&form).await {
        Ok(()) => {
            tracing::info!("Account created for username: {}", form.username);
            let outcome = SignupOutcome::Created;
            let page = SignupPage::new(&form, &state.config.login_url)
                .with_notice(Notice::success(outcome.message()))
                .with_redirect(LoginRedirect {
                    url: &state.config.login_url,
                    delay: state.config.redirect_delay(),
                })
                .render();
            Ok(Html(page))
        }
        Err(e) => {
            if e.is_conflict() {
                tracing::info!("Signup conflict for username {}: {}", form.username, e);
            } else {
                tracing::warn!("Signup failed for username {}: {}", form.username, e);
            }
            Err(render_signup_error(
                &state,
                &form,
                e.status_code(),
                SignupOutcome::Failed.message(),
            ))
        }
    }
}

fn render_signup_error(
    state: &AppState,
    form: &SignupForm,
    status: StatusCode,
    message: &str,
) -> (StatusCode, Html<String>) {
    let form = form.without_password();
    let page = SignupPage::new(&form, &state.config.login_url)
        .with_notice(Notice::error(message))
        .render();
    (status, Html(page))
}
