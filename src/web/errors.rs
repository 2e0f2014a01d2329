use log::error;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::status;
use rocket::response::{self, Responder};
use rocket::Request;

use crate::storage::StorageError;
use crate::user_db::UserDbError;
use crate::web::pages;

/// Storage or credential failures the user cannot do anything about.
/// Details go to the log; the client gets a generic 500 page.
#[derive(Debug)]
pub(super) struct ServerError;

impl From<StorageError> for ServerError {
    fn from(e: StorageError) -> Self {
        error!("storage failure: {e}");
        ServerError
    }
}

impl From<UserDbError> for ServerError {
    fn from(e: UserDbError) -> Self {
        error!("user db failure: {e}");
        ServerError
    }
}

impl<'r> Responder<'r, 'static> for ServerError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        status::Custom(
            Status::InternalServerError,
            RawHtml(pages::server_error()),
        ).respond_to(request)
    }
}
