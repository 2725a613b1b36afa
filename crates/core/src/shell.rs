//! Session gate and view-routing state machine.
//!
//! The admin UI is a single page whose behavior is fully described by two
//! orthogonal pieces of state: whether the one admin session is logged in,
//! and which section the sidebar currently selects. Both live only in
//! process memory; a restart returns to the logged-out dashboard.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use hekto_shared::config::AdminConfig;

/// Authentication state of the current shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    /// No authenticated admin.
    #[default]
    LoggedOut,
    /// The fixed admin pair was accepted.
    LoggedIn,
}

/// The currently selected navigation target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Aggregate metric tiles and the users/products chart.
    #[default]
    Dashboard,
    /// Customer list.
    Users,
    /// Product list; resolves to the same customer cards as Users.
    Products,
    /// Customer list with line items inline.
    Orders,
}

impl Section {
    /// All sections, in sidebar order.
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Users, Self::Products, Self::Orders];

    /// Human-readable title, as shown in the sidebar and page header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Products => "Products",
            Self::Orders => "Orders",
        }
    }

    /// URL-safe identifier used by the navigation routes.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Products => "products",
            Self::Orders => "orders",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when a navigation slug names no section.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl std::str::FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "users" => Ok(Self::Users),
            "products" => Ok(Self::Products),
            "orders" => Ok(Self::Orders),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// A submitted login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginForm {
    /// Admin display name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Admin Name is required"))]
    pub admin_name: String,
    /// Admin password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Inline messages produced by the last login submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginErrors {
    /// Field-level message for an empty admin name.
    pub admin_name: Option<String>,
    /// Field-level message for an empty password.
    pub password: Option<String>,
    /// Non-field message for a well-formed but wrong credential pair.
    pub credentials: Option<String>,
}

impl LoginErrors {
    /// True when the last submission produced no messages.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.admin_name.is_none() && self.password.is_none() && self.credentials.is_none()
    }

    fn from_validation(errors: &ValidationErrors) -> Self {
        Self {
            admin_name: first_message(errors, "admin_name"),
            password: first_message(errors, "password"),
            credentials: None,
        }
    }
}

fn first_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    errors
        .field_errors()
        .get(field)
        .and_then(|list| list.first())
        .and_then(|error| error.message.as_ref())
        .map(ToString::to_string)
}

/// The fixed credential pair the session gate checks against.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    /// Expected admin name.
    pub admin_name: String,
    /// Expected password.
    pub password: String,
}

impl From<&AdminConfig> for AdminCredentials {
    fn from(config: &AdminConfig) -> Self {
        Self {
            admin_name: config.admin_name.clone(),
            password: config.password.clone(),
        }
    }
}

/// In-memory state behind the admin UI: session gate plus active section.
#[derive(Debug)]
pub struct Shell {
    credentials: AdminCredentials,
    session: Session,
    active_section: Section,
    form: LoginForm,
    errors: LoginErrors,
}

impl Shell {
    /// Creates a logged-out shell showing the dashboard section.
    #[must_use]
    pub fn new(credentials: AdminCredentials) -> Self {
        Self {
            credentials,
            session: Session::default(),
            active_section: Section::default(),
            form: LoginForm::default(),
            errors: LoginErrors::default(),
        }
    }

    /// Current session state.
    #[must_use]
    pub const fn session(&self) -> Session {
        self.session
    }

    /// True once the admin pair was accepted.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session == Session::LoggedIn
    }

    /// Currently selected section.
    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.active_section
    }

    /// The last submitted form, retained for re-rendering the login page.
    #[must_use]
    pub const fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Messages from the last login submission.
    #[must_use]
    pub const fn errors(&self) -> &LoginErrors {
        &self.errors
    }

    /// Handles a login submission.
    ///
    /// Field validation runs first; any empty field aborts the credential
    /// check with one message per offending field. A well-formed submission
    /// then either matches the fixed pair exactly (session becomes
    /// `LoggedIn`, all messages cleared) or produces the single
    /// non-field-specific credentials message while the session stays
    /// `LoggedOut`.
    pub fn submit_login(&mut self, form: LoginForm) -> Session {
        self.form = form;
        self.errors = LoginErrors::default();

        if let Err(validation) = self.form.validate() {
            self.errors = LoginErrors::from_validation(&validation);
            return self.session;
        }

        if self.form.admin_name == self.credentials.admin_name
            && self.form.password == self.credentials.password
        {
            self.session = Session::LoggedIn;
        } else {
            self.errors.credentials = Some("Invalid Admin Name or Password".to_string());
        }
        self.session
    }

    /// Ends the session and resets the shell to its initial state: form
    /// fields emptied, messages cleared, dashboard selected.
    pub fn log_out(&mut self) {
        self.session = Session::LoggedOut;
        self.form = LoginForm::default();
        self.errors = LoginErrors::default();
        self.active_section = Section::default();
    }

    /// Selects a section. Unconditional: the shell is read-only, so there is
    /// nothing to guard.
    pub const fn navigate(&mut self, section: Section) {
        self.active_section = section;
    }
}
