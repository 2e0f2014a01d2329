use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, routes, uri, FromForm, Route, State};

use crate::data::RenderMode;
use crate::document_name::DocumentName;
use crate::markdown;
use crate::session;
use crate::storage::{DocumentStore, StorageError};
use crate::user_db::UserDb;
use crate::util::StrExt;
use crate::web::errors::ServerError;
use crate::web::guard::Authenticated;
use crate::web::pages;

pub(super) fn all() -> Vec<Route> {
    routes![
        index,
        view, view_fallback,
        edit_form, edit_form_fallback,
        edit_submit, edit_submit_fallback,
        new_form, new_form_fallback,
        create, create_fallback,
        delete, delete_fallback,
        login_form, login_submit, logout,
    ]
}

#[derive(FromForm)]
pub(super) struct EditDocumentForm {
    content: String,
}

#[derive(FromForm)]
pub(super) struct NewDocumentForm {
    name: String,
}

#[derive(FromForm)]
pub(super) struct LoginForm {
    username: String,
    password: String,
}

#[get("/")]
async fn index(
    user: Option<Authenticated>,
    flash: Option<FlashMessage<'_>>,
    store: &State<DocumentStore>,
) -> Result<RawHtml<String>, ServerError> {
    let flash = flash.map(|f| f.message().to_string());
    match user {
        Some(Authenticated(user)) => {
            let documents = store.list().await?;
            Ok(RawHtml(pages::index(&user.username, flash.as_deref(), &documents)))
        }
        None => Ok(RawHtml(pages::welcome(flash.as_deref()))),
    }
}

#[derive(rocket::Responder)]
pub(super) enum DocumentView {
    Html(RawHtml<String>),
    // String's responder is text/plain, the policy for everything
    // that is not markdown
    Plain(String),
    Missing(Flash<Redirect>),
}

#[get("/<name>/view")]
async fn view(
    name: DocumentName,
    _user: Authenticated,
    store: &State<DocumentStore>,
) -> Result<DocumentView, ServerError> {
    match store.read(&name).await {
        Ok(content) => Ok(
            match RenderMode::for_name(&name) {
                RenderMode::Markdown =>
                    DocumentView::Html(RawHtml(markdown::render(&content))),
                RenderMode::PlainText => DocumentView::Plain(content),
            }
        ),
        Err(StorageError::NotFound) => Ok(DocumentView::Missing(does_not_exist(&name))),
        Err(e) => Err(e.into()),
    }
}

#[get("/<name>/view", rank = 2)]
fn view_fallback(name: &str, user: Option<Authenticated>) -> Flash<Redirect> {
    fallback(name, user)
}

#[derive(rocket::Responder)]
pub(super) enum EditFormResponse {
    Form(RawHtml<String>),
    Missing(Flash<Redirect>),
}

#[get("/<name>/edit")]
async fn edit_form(
    name: DocumentName,
    _user: Authenticated,
    store: &State<DocumentStore>,
) -> Result<EditFormResponse, ServerError> {
    match store.read(&name).await {
        Ok(content) => Ok(
            EditFormResponse::Form(RawHtml(pages::edit_document(&name, &content)))
        ),
        Err(StorageError::NotFound) =>
            Ok(EditFormResponse::Missing(does_not_exist(&name))),
        Err(e) => Err(e.into()),
    }
}

#[get("/<name>/edit", rank = 2)]
fn edit_form_fallback(name: &str, user: Option<Authenticated>) -> Flash<Redirect> {
    fallback(name, user)
}

// a full-content replace; editing a name that vanished meanwhile
// recreates it, matching the store's write contract
#[post("/<name>/edit", data = "<form>")]
async fn edit_submit(
    name: DocumentName,
    _user: Authenticated,
    store: &State<DocumentStore>,
    form: Form<EditDocumentForm>,
) -> Result<Flash<Redirect>, ServerError> {
    store.write(&name, &form.content).await?;
    Ok(
        Flash::success(
            Redirect::found(uri!(index)),
            format!("{name} has been updated."),
        )
    )
}

#[post("/<name>/edit", rank = 2)]
fn edit_submit_fallback(name: &str, user: Option<Authenticated>) -> Flash<Redirect> {
    fallback(name, user)
}

#[get("/new")]
fn new_form(_user: Authenticated) -> RawHtml<String> {
    RawHtml(pages::new_document(None, ""))
}

#[get("/new", rank = 2)]
fn new_form_fallback() -> Flash<Redirect> {
    sign_in_required()
}

#[derive(rocket::Responder)]
pub(super) enum CreateResponse {
    Created(Flash<Redirect>),
    #[response(status = 422)]
    Rejected(RawHtml<String>),
}

#[post("/new", data = "<form>")]
async fn create(
    _user: Authenticated,
    store: &State<DocumentStore>,
    form: Form<NewDocumentForm>,
) -> Result<CreateResponse, ServerError> {
    let rejected = |message: &str| {
        CreateResponse::Rejected(RawHtml(pages::new_document(Some(message), &form.name)))
    };

    let Some(name) = form.name.nonblank_to_some() else {
        return Ok(rejected("A name is required."));
    };
    let name = match name.parse::<DocumentName>() {
        Ok(name) => name,
        Err(_) => return Ok(rejected("That name is not allowed.")),
    };
    match store.create(&name).await {
        Ok(()) => Ok(
            CreateResponse::Created(
                Flash::success(
                    Redirect::found(uri!(index)),
                    format!("{name} was created."),
                )
            )
        ),
        Err(StorageError::AlreadyExists) =>
            Ok(rejected(&format!("{name} already exists."))),
        Err(e) => Err(e.into()),
    }
}

#[post("/new", rank = 2)]
fn create_fallback() -> Flash<Redirect> {
    sign_in_required()
}

#[post("/<name>/delete")]
async fn delete(
    name: DocumentName,
    _user: Authenticated,
    store: &State<DocumentStore>,
) -> Result<Flash<Redirect>, ServerError> {
    match store.delete(&name).await {
        Ok(()) => Ok(
            Flash::success(
                Redirect::found(uri!(index)),
                format!("{name} has been deleted."),
            )
        ),
        Err(StorageError::NotFound) => Ok(does_not_exist(&name)),
        Err(e) => Err(e.into()),
    }
}

#[post("/<name>/delete", rank = 2)]
fn delete_fallback(name: &str, user: Option<Authenticated>) -> Flash<Redirect> {
    fallback(name, user)
}

#[get("/users/login")]
fn login_form() -> RawHtml<String> {
    RawHtml(pages::login(None, ""))
}

#[derive(rocket::Responder)]
pub(super) enum LoginResponse {
    LoggedIn(Flash<Redirect>),
    #[response(status = 422)]
    Rejected(RawHtml<String>),
}

#[post("/users/login", data = "<form>")]
async fn login_submit(
    jar: &CookieJar<'_>,
    user_db: &State<Box<dyn UserDb>>,
    form: Form<LoginForm>,
) -> Result<LoginResponse, ServerError> {
    if !user_db.does_user_exist(&form.username).await? {
        return Ok(
            LoginResponse::Rejected(
                RawHtml(pages::login(Some("Invalid username"), &form.username))
            )
        );
    }
    if !user_db.check_user_credentials(&form.username, &form.password).await? {
        return Ok(
            LoginResponse::Rejected(
                RawHtml(pages::login(Some("Invalid credentials"), &form.username))
            )
        );
    }
    session::log_in(jar, &form.username);
    Ok(
        LoginResponse::LoggedIn(
            Flash::success(
                Redirect::found(uri!(index)),
                session::SIGNED_IN_MESSAGE,
            )
        )
    )
}

#[post("/users/logout")]
fn logout(jar: &CookieJar<'_>) -> Flash<Redirect> {
    session::log_out(jar);
    Flash::success(Redirect::found(uri!(index)), session::SIGNED_OUT_MESSAGE)
}

fn does_not_exist(name: &str) -> Flash<Redirect> {
    Flash::error(Redirect::found(uri!(index)), format!("{name} does not exist."))
}

// a fallback reached by a signed-in user means the name failed to
// parse, which is indistinguishable from a missing document to them
fn fallback(name: &str, user: Option<Authenticated>) -> Flash<Redirect> {
    match user {
        Some(_) => does_not_exist(name),
        None => sign_in_required(),
    }
}

fn sign_in_required() -> Flash<Redirect> {
    Flash::error(
        Redirect::found(uri!(index)),
        session::SIGN_IN_REQUIRED_MESSAGE,
    )
}
