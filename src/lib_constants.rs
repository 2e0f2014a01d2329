pub const DEFAULT_CONTENT_DIR: &str = "/var/flatcms/content";
pub const DEFAULT_USER_DB: &str = "/etc/flatcms/users";

pub const DEFAULT_MAX_DOCUMENT_LEN: u64 = 128 * 1024;

pub const APP_CONFIG_ENV_PREFIX: &str = "FLATCMS_";
