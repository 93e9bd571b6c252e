use crate::navigation::NavigationState;

pub const FALLBACK_USER_NAME: &str = "User";
pub const SUCCESS_MESSAGE: &str = "Your message was sent successfully, we’ll keep you updated.";
pub const SUCCESS_NOTE: &str =
    "We promise not to spam you. You’ll only hear from us when it matters 😁.";
pub const GO_BACK_LABEL: &str = "Go Back";
pub const SUBMIT_LABEL: &str = "SEND →";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessView {
    pub user_name: String,
}

impl SuccessView {
    pub fn from_state(state: &NavigationState) -> Self {
        let user_name = state
            .user_name
            .clone()
            .unwrap_or_else(|| FALLBACK_USER_NAME.to_string());
        Self { user_name }
    }

    pub fn heading(&self) -> String {
        format!("Thank You {} ❤", self.user_name)
    }
}
