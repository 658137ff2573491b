use anyhow::{Context, bail};
use forms_auth::SessionUser;
use forms_config::FormsConfig;
use forms_db::service::FormService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: FormService,
    pub config: FormsConfig,
    pub identity: SessionUser,
}

impl AppContext {
    /// Open the database and resolve the acting user.
    ///
    /// `--database` and `--user` take precedence over the loaded config.
    pub async fn init(mut config: FormsConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(path) = &flags.database {
            config.database.path.clone_from(path);
        }
        let service = FormService::open(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        let identity = SessionUser {
            id: flags.user.unwrap_or(config.general.user_id),
            name: String::new(),
        };
        tracing::debug!(user_id = identity.id, "acting user resolved");

        Ok(Self {
            service,
            config,
            identity,
        })
    }

    /// The acting user's id, or an error for anonymous callers.
    pub fn require_user(&self) -> anyhow::Result<i64> {
        if !self.identity.is_signed_in() {
            bail!("this command needs a signed-in user: pass --user <id> or set general.user_id");
        }
        Ok(self.identity.id)
    }
}
