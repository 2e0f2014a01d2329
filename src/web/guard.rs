use async_trait::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

use crate::session::SessionUser;

/// Request guard for protected routes. Forwards when nobody is signed
/// in, so the rank-2 fallback route can flash and redirect; the guarded
/// handler itself never starts executing.
#[derive(Debug)]
pub struct Authenticated(pub SessionUser);

#[async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, ()> {
        match SessionUser::from_cookies(request.cookies()) {
            Some(user) => Outcome::Success(Authenticated(user)),
            None => Outcome::Forward(Status::Unauthorized),
        }
    }
}
