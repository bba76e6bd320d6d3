// src/templates/signup.rs
use std::time::Duration;

use super::{html_escape, render_page_with_head};
use crate::models::{FormField, SignupForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy)]
pub struct Notice<'a> {
    pub kind: NoticeKind,
    pub message: &'a str,
}

impl<'a> Notice<'a> {
    pub fn success(message: &'a str) -> Self {
        Self { kind: NoticeKind::Success, message }
    }

    pub fn error(message: &'a str) -> Self {
        Self { kind: NoticeKind::Error, message }
    }
}

/// Delayed navigation shown after an account was created.
#[derive(Debug, Clone, Copy)]
pub struct LoginRedirect<'a> {
    pub url: &'a str,
    pub delay: Duration,
}

pub struct SignupPage<'a> {
    pub form: &'a SignupForm,
    pub notice: Option<Notice<'a>>,
    pub login_url: &'a str,
    pub redirect: Option<LoginRedirect<'a>>,
}

impl<'a> SignupPage<'a> {
    pub fn new(form: &'a SignupForm, login_url: &'a str) -> Self {
        Self {
            form,
            notice: None,
            login_url,
            redirect: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice<'a>) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn with_redirect(mut self, redirect: LoginRedirect<'a>) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn render(&self) -> String {
        let notice_html = match self.notice {
            Some(notice) => {
                let class = match notice.kind {
                    NoticeKind::Success => "success-message",
                    NoticeKind::Error => "error-message",
                };
                format!(
                    r#"<p class="{}" role="status">{}</p>"#,
                    class,
                    html_escape(notice.message)
                )
            }
            None => String::new(),
        };

        let inputs: String = FormField::ALL
            .iter()
            .map(|field| render_input(*field, self.form.value(*field)))
            .collect();

        // Once the account exists the form stays visible but inert until the redirect fires.
        let disabled = if self.redirect.is_some() { " disabled" } else { "" };

        let content = format!(
            r#"
    <div class="auth-container">
        <form id="signup-form" class="auth-form" method="POST" action="/signup">
            <h1>Sign Up</h1>
            {}
            <fieldset{}>
                {}
                <button id="signup-submit" type="submit" class="btn btn-primary btn-full">Sign Up</button>
            </fieldset>
        </form>
        <p class="auth-footer">
            Already have an account? <a href="{}">Login</a>
        </p>
    </div>
    <script>
        document.getElementById('signup-form').addEventListener('submit', function () {{
            var button = document.getElementById('signup-submit');
            button.disabled = true;
            button.textContent = 'Signing up...';
        }});
    </script>
    "#,
            notice_html,
            disabled,
            inputs,
            html_escape(self.login_url)
        );

        let head_extra = self.redirect.map(render_redirect).unwrap_or_default();

        render_page_with_head("Sign Up", &content, &head_extra)
    }
}

fn render_input(field: FormField, value: &str) -> String {
    // Passwords are never written back into the page.
    let value = if field == FormField::Password { "" } else { value };

    format!(
        r#"
                <div class="form-group">
                    <label for="{name}">{label}</label>
                    <input type="{input_type}" id="{name}" name="{name}" placeholder="{label}" value="{value}" autocomplete="{autocomplete}" required>
                </div>"#,
        name = field.name(),
        label = field.label(),
        input_type = field.input_type(),
        value = html_escape(value),
        autocomplete = field.autocomplete(),
    )
}

fn render_redirect(redirect: LoginRedirect<'_>) -> String {
    let delay_ms = redirect.delay.as_millis();
    let delay_secs = (delay_ms + 999) / 1000;
    // JSON string literals are valid JS; "</" is split so the script tag cannot be closed early.
    let url_js = serde_json::to_string(redirect.url)
        .unwrap_or_else(|_| "\"/\"".to_string())
        .replace("</", "<\\/");

    format!(
        r#"<script>
        setTimeout(function () {{ window.location.href = {url_js}; }}, {delay_ms});
    </script>
    <noscript><meta http-equiv="refresh" content="{delay_secs};url={url_attr}"></noscript>"#,
        url_js = url_js,
        delay_ms = delay_ms,
        delay_secs = delay_secs,
        url_attr = html_escape(redirect.url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::filled_form;
    use crate::models::{SIGNUP_FAILURE_MESSAGE, SIGNUP_SUCCESS_MESSAGE};

    #[test]
    fn test_empty_form_renders_all_required_inputs() {
        let form = SignupForm::default();
        let page = SignupPage::new(&form, "/login").render();

        for field in FormField::ALL {
            let input = format!(r#"name="{}""#, field.name());
            assert!(page.contains(&input), "missing input {}", field.name());
        }
        assert_eq!(page.matches(" required>").count(), 8);
        assert!(page.contains(r#"type="email" id="email""#));
        assert!(page.contains(r#"type="password" id="password""#));
        assert!(!page.contains("setTimeout"));
        assert!(!page.contains("success-message\""));
    }

    #[test]
    fn test_submit_disables_button() {
        let form = SignupForm::default();
        let page = SignupPage::new(&form, "/login").render();

        assert!(page.contains("button.disabled = true"));
        assert!(page.contains("Signing up..."));
        assert!(page.contains("<fieldset>"));
    }

    #[test]
    fn test_error_notice_keeps_values_but_not_password() {
        let form = filled_form();
        let page = SignupPage::new(&form, "/login")
            .with_notice(Notice::error(SIGNUP_FAILURE_MESSAGE))
            .render();

        assert!(page.contains(SIGNUP_FAILURE_MESSAGE));
        assert!(page.contains(r#"class="error-message""#));
        assert!(page.contains(r#"value="ada@example.com""#));
        assert!(!page.contains("correct horse"));
        assert!(!page.contains("setTimeout"));
    }

    #[test]
    fn test_success_schedules_login_redirect() {
        let form = filled_form();
        let page = SignupPage::new(&form, "/login")
            .with_notice(Notice::success(SIGNUP_SUCCESS_MESSAGE))
            .with_redirect(LoginRedirect {
                url: "/login",
                delay: Duration::from_millis(1500),
            })
            .render();

        assert!(page.contains(SIGNUP_SUCCESS_MESSAGE));
        assert!(page.contains(r#"window.location.href = "/login"; }, 1500)"#));
        assert!(page.contains(r#"content="2;url=/login""#));
        assert!(page.contains("<fieldset disabled>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let form = SignupForm {
            company: r#""><script>alert(1)</script>"#.to_string(),
            ..SignupForm::default()
        };
        let page = SignupPage::new(&form, "/login").render();

        assert!(!page.contains("<script>alert(1)"));
        assert!(page.contains("&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_redirect_url_cannot_close_script() {
        let html = render_redirect(LoginRedirect {
            url: "/login</script><script>alert(1)",
            delay: Duration::from_millis(1500),
        });

        assert!(!html.contains("</script><script>alert(1)"));
    }
}
