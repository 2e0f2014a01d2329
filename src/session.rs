use rocket::http::{Cookie, CookieJar};

/// Private (encrypted, authenticated) cookie carrying the signed-in
/// username. Its presence is the whole authenticated state; flash
/// messages ride Rocket's own one-shot flash cookie.
pub const SESSION_COOKIE: &str = "flatcms_user";

pub const SIGN_IN_REQUIRED_MESSAGE: &str = "You must be signed in to do that.";
pub const SIGNED_IN_MESSAGE: &str = "Welcome!";
pub const SIGNED_OUT_MESSAGE: &str = "You have been signed out.";

#[derive(Clone, Debug)]
pub struct SessionUser {
    pub username: String,
}

impl SessionUser {
    pub fn from_cookies(jar: &CookieJar<'_>) -> Option<SessionUser> {
        jar.get_private(SESSION_COOKIE)
            .map(|cookie| SessionUser { username: cookie.value().to_string() })
    }
}

pub fn log_in(jar: &CookieJar<'_>, username: &str) {
    jar.add_private(Cookie::new(SESSION_COOKIE, username.to_string()));
}

pub fn log_out(jar: &CookieJar<'_>) {
    jar.remove_private(Cookie::from(SESSION_COOKIE));
}
