use actix_session::Session;

use super::csrf::constant_time_eq;

const ADMIN_KEY: &str = "is_admin";
const FLASH_KEY: &str = "flash";

/// Whether this session has passed the admin token check.
pub fn is_admin(session: &Session) -> bool {
    session
        .get::<bool>(ADMIN_KEY)
        .unwrap_or(None)
        .unwrap_or(false)
}

/// Mark the session as admin after a successful token check.
pub fn grant_admin(session: &Session) {
    let _ = session.insert(ADMIN_KEY, true);
}

/// Compare a submitted admin token against the configured one in constant
/// time. The token is an environment constant compared verbatim — no
/// hashing, expiry, or rotation.
pub fn token_matches(submitted: &str, expected: &str) -> bool {
    constant_time_eq(submitted.trim(), expected)
}

/// Queue a one-shot notification for the next rendered page.
pub fn set_flash(session: &Session, message: impl Into<String>) {
    let _ = session.insert(FLASH_KEY, message.into());
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
