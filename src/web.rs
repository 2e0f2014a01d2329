mod app_setup;
mod errors;
mod guard;
mod pages;
mod routes;

use figment::Figment;
use rocket::{Build, Rocket};

pub use app_setup::AppSetupFairing;
pub use guard::Authenticated;

pub trait CmsRocketBuildExt {
    fn install_flatcms(self) -> Self;
}

impl CmsRocketBuildExt for Rocket<Build> {
    fn install_flatcms(self) -> Self {
        self
            .attach(AppSetupFairing::new())
            .mount("/", routes::all())
    }
}

/// Builds the whole application from a figment; the daemon and the
/// integration tests go through here.
pub fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment).install_flatcms()
}
