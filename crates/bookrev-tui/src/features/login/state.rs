use bookrev_core::api::Credentials;

use crate::common::TextField;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Form fields start empty; nothing is pre-filled.
#[derive(Debug, Clone)]
pub struct LoginState {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            username: TextField::default(),
            password: TextField::masked(),
            focus: LoginField::default(),
            error: None,
        }
    }
}

impl LoginState {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.value(), self.password.value())
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
