// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created. Please log in.";
pub const SIGNUP_FAILURE_MESSAGE: &str = "Signup failed. User may already exist.";
pub const INCOMPLETE_FORM_MESSAGE: &str = "Please fill in all fields.";

/// The form record. Field names on the wire match the HTML input names.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl SignupForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Phone => &self.phone,
            FormField::Company => &self.company,
            FormField::JobRole => &self.job_role,
            FormField::Email => &self.email,
            FormField::Username => &self.username,
            FormField::Password => &self.password,
        }
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Copy suitable for re-rendering: everything but the password.
    pub fn without_password(&self) -> Self {
        Self {
            password: String::new(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .field("company", &self.company)
            .field("job_role", &self.job_role)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Phone,
    Company,
    JobRole,
    Email,
    Username,
    Password,
}

impl FormField {
    /// Display order on the page.
    pub const ALL: [FormField; 8] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Phone,
        FormField::Company,
        FormField::JobRole,
        FormField::Email,
        FormField::Username,
        FormField::Password,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Phone => "phone",
            FormField::Company => "company",
            FormField::JobRole => "jobRole",
            FormField::Email => "email",
            FormField::Username => "username",
            FormField::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Phone => "Phone Number",
            FormField::Company => "Company Name",
            FormField::JobRole => "Job Role",
            FormField::Email => "Email",
            FormField::Username => "Username",
            FormField::Password => "Password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::Phone => "tel",
            _ => "text",
        }
    }

    pub fn autocomplete(self) -> &'static str {
        match self {
            FormField::FirstName => "given-name",
            FormField::LastName => "family-name",
            FormField::Phone => "tel",
            FormField::Company => "organization",
            FormField::JobRole => "organization-title",
            FormField::Email => "email",
            FormField::Username => "username",
            FormField::Password => "new-password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    Failed,
}

impl SignupOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SignupOutcome::Created => SIGNUP_SUCCESS_MESSAGE,
            SignupOutcome::Failed => SIGNUP_FAILURE_MESSAGE,
        }
    }
}
