//! Shared vocabulary of the authentication flow.
//!
//! The four screens form a static site graph; every edge of that graph is a
//! [`Trigger`] whose target is resolved by an exhaustive `match` instead of
//! comparing element identifiers at runtime.

use serde::Deserialize;

/// Number of cells in the one-time-code sequence.
pub const DEFAULT_CODE_LENGTH: u8 = 6;
/// Seconds the resend countdown starts from.
pub const DEFAULT_RESEND_SECONDS: u32 = 59;

pub const LANGUAGE_TOGGLE_ID: &str = "language-toggle";
pub const TIMER_ID: &str = "timer";

/// One of the four static documents of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Login,
    Register,
    Verification,
    Success,
}

impl Page {
    #[cfg(test)]
    pub const ALL: [Page; 4] = [
        Page::Login,
        Page::Register,
        Page::Verification,
        Page::Success,
    ];

    /// The document name the page is published under.
    pub fn document_name(self) -> &'static str {
        match self {
            Page::Login => "ログイン.html",
            Page::Register => "新規登録.html",
            Page::Verification => "認証コード.html",
            Page::Success => "登録完了.html",
        }
    }
}

/// Elements that navigate to another page when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    ShowRegister,
    ShowLogin,
    BackToLogin,
    ShowVerification,
    BackToRegister,
    ShowSuccess,
}

impl Trigger {
    pub const ALL: [Trigger; 6] = [
        Trigger::ShowRegister,
        Trigger::ShowLogin,
        Trigger::BackToLogin,
        Trigger::ShowVerification,
        Trigger::BackToRegister,
        Trigger::ShowSuccess,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Trigger::ShowRegister => "show-register",
            Trigger::ShowLogin => "show-login",
            Trigger::BackToLogin => "back-to-login",
            Trigger::ShowVerification => "show-verification",
            Trigger::BackToRegister => "back-to-register",
            Trigger::ShowSuccess => "show-success",
        }
    }

    pub fn target(self) -> Page {
        match self {
            Trigger::ShowRegister | Trigger::BackToRegister => Page::Register,
            Trigger::ShowLogin | Trigger::BackToLogin => Page::Login,
            Trigger::ShowVerification => Page::Verification,
            Trigger::ShowSuccess => Page::Success,
        }
    }
}

/// The kinds of events handlers can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Input,
    KeyDown,
    Focus,
}

/// Keys the controller distinguishes on key-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Other,
}
