// crates/reqres-scenarios/src/fixtures.rs
// ============================================================================
// Module: Remote Fixtures
// Description: Literal values owned by the remote ReqRes service.
// Purpose: Keep the external contract literals in one place.
// ============================================================================

//! ## Overview
//! These values are fixtures of the remote service, not formats this crate
//! owns. They must match the remote byte for byte.

/// Token returned for the predefined registration and login users.
pub const FIXED_TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// Error text when `password` is absent from register or login.
pub const MISSING_PASSWORD: &str = "Missing password";

/// Error text when registering an email the service does not know.
pub const UNDEFINED_USER: &str = "Note: Only defined users succeed registration";

/// Email of the predefined user.
pub const DEFINED_EMAIL: &str = "eve.holt@reqres.in";

/// Password accepted for registration.
pub const REGISTER_PASSWORD: &str = "pistol";

/// Password accepted for login.
pub const LOGIN_PASSWORD: &str = "cityslicka";

/// Email used where the password is intentionally omitted.
pub const PASSWORDLESS_EMAIL: &str = "test@mail.ru";

/// Email the service does not know.
pub const UNDEFINED_EMAIL: &str = "kirill1991@outlook.com";

/// Password sent with [`UNDEFINED_EMAIL`].
pub const UNDEFINED_PASSWORD: &str = "9ae89e5ca";

/// First color of the unknown-resource listing.
pub const FIRST_COLOR_NAME: &str = "cerulean";

/// Pantone value of [`FIRST_COLOR_NAME`].
pub const FIRST_COLOR_PANTONE: &str = "15-4020";

/// Existing user id.
pub const EXISTING_USER_ID: u32 = 2;

/// Id with no user or resource behind it.
pub const MISSING_ID: u32 = 23;
