use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::config::app_config::AppConfig;
use crate::lib_constants::APP_CONFIG_ENV_PREFIX;

pub trait FigmentExt {
    fn setup_app_config(self, config_file: Option<&Path>) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(self, config_file: Option<&Path>) -> Figment {
        let figment = self.merge(Serialized::defaults(AppConfig::default()));
        let figment = match config_file {
            Some(path) => figment.merge(Toml::file_exact(path)),
            None => figment,
        };
        figment.merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).global())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn defaults_extract_without_a_config_file() {
        figment::Jail::expect_with(|_| {
            let config: AppConfig = Figment::new()
                .setup_app_config(None)
                .extract()?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn config_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "flatcms.toml",
                r#"
                    content_directory = "/srv/cms/content"
                    max_document_len = 1024
                "#,
            )?;
            let config: AppConfig = Figment::new()
                .setup_app_config(Some(Path::new("flatcms.toml")))
                .extract()?;
            assert_eq!(config.content_directory, PathBuf::from("/srv/cms/content"));
            assert_eq!(config.max_document_len, 1024);
            assert_eq!(config.user_db, AppConfig::default().user_db);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("flatcms.toml", r#"user_db = "/from/file""#)?;
            jail.set_env("FLATCMS_USER_DB", "/from/env");
            let config: AppConfig = Figment::new()
                .setup_app_config(Some(Path::new("flatcms.toml")))
                .extract()?;
            assert_eq!(config.user_db, PathBuf::from("/from/env"));
            Ok(())
        });
    }
}
