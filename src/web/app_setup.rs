use log::{error, info};
use rocket::fairing::{self, Fairing, Info, Kind};
use rocket::{Build, Rocket};

use crate::config::AppConfig;
use crate::hasher::{ProductionHasher, ProductionHasherConfig};
use crate::storage::DocumentStore;
use crate::user_db::{ProductionUserDb, UserDb};

/// Ignite-time fairing building the document store and the user db out
/// of the figment and handing them to rocket's managed state.
pub struct AppSetupFairing;

impl AppSetupFairing {
    pub fn new() -> Self {
        AppSetupFairing
    }
}

impl Default for AppSetupFairing {
    fn default() -> Self {
        Self::new()
    }
}

#[rocket::async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        Info {
            name: "flatcms application setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        let config = match rocket.figment().extract::<AppConfig>() {
            Ok(config) => config,
            Err(e) => {
                for e in e {
                    error!("configuration error: {e}");
                }
                return Err(rocket);
            }
        };

        let store = match DocumentStore::new(
            config.content_directory.clone(),
            config.max_document_len,
        ).await {
            Ok(store) => store,
            Err(e) => {
                error!(
                    "cannot open content directory {}: {}",
                    config.content_directory.display(), e,
                );
                return Err(rocket);
            }
        };

        let hasher = ProductionHasher::new(ProductionHasherConfig::default());
        let user_db = match ProductionUserDb::new(&config.user_db, hasher).await {
            Ok(user_db) => user_db,
            Err(e) => {
                error!(
                    "cannot load user db {}: {}",
                    config.user_db.display(), e,
                );
                return Err(rocket);
            }
        };

        info!(
            "serving documents from {}",
            config.content_directory.display(),
        );

        Ok(
            rocket
                .manage(store)
                .manage(Box::new(user_db) as Box<dyn UserDb>)
                .manage(config)
        )
    }
}
