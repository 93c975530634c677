//! Client construction and passport login.

use anyhow::{Context, Result, bail};
use inquire::Password;
use moexiss_lib::prelude::*;

/// Login details from the command line or the environment.
pub(crate) struct Login {
    user: Option<String>,
    password: Option<String>,
}

impl Login {
    pub(crate) const fn new(user: Option<String>, password: Option<String>) -> Self {
        Self { user, password }
    }

    /// Opens a client. Without a user the client is anonymous unless `required`.
    pub(crate) async fn connect(&self, required: bool) -> Result<IssClient> {
        let mut config = ClientConfig::default();

        match &self.user {
            Some(user) => {
                let password = match &self.password {
                    Some(password) => password.clone(),
                    None => Password::new(&format!("MOEX password for {user}:"))
                        .without_confirmation()
                        .prompt()
                        .context("Password prompt failed")?,
                };
                config = config.with_credentials(Credentials::new(user.clone(), password));
            }
            None if required => {
                bail!("This command needs a MOEX subscription; pass --user or set MOEX_USER")
            }
            None => {}
        }

        IssClient::connect(config)
            .await
            .context("Cannot connect to ISS")
    }
}
