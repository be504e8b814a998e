//! Cookie-consent state carried by the `wycombe-pros-consent` cookie.

use serde::Serialize;

pub const CONSENT_COOKIE: &str = "wycombe-pros-consent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentState {
    /// First visit, or a visit after a previous session's dismissal expired.
    #[default]
    Unset,
    Accepted,
    /// Declined for this browser session only.
    Dismissed,
}

impl ConsentState {
    pub fn from_cookie_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("true") => ConsentState::Accepted,
            Some("dismissed") => ConsentState::Dismissed,
            _ => ConsentState::Unset,
        }
    }

    /// Value written back to the cookie; `None` means nothing to store.
    pub fn cookie_value(self) -> Option<&'static str> {
        match self {
            ConsentState::Unset => None,
            ConsentState::Accepted => Some("true"),
            ConsentState::Dismissed => Some("dismissed"),
        }
    }

    /// Only an accepted choice outlives the browser session.
    pub fn is_persistent(self) -> bool {
        self == ConsentState::Accepted
    }

    pub fn shows_prompt(self) -> bool {
        self == ConsentState::Unset
    }
}

/// Choice posted from the consent banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Accept,
    Decline,
}

impl ConsentChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "accept" => Some(ConsentChoice::Accept),
            "decline" => Some(ConsentChoice::Decline),
            _ => None,
        }
    }

    pub fn resulting_state(self) -> ConsentState {
        match self {
            ConsentChoice::Accept => ConsentState::Accepted,
            ConsentChoice::Decline => ConsentState::Dismissed,
        }
    }
}
