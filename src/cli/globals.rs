use crate::api::{ApiClient, ApiConfig};
use crate::session::FileTokenStore;
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// Options shared by every subcommand.
#[derive(Clone, Debug)]
pub struct GlobalArgs {
    pub api_url: String,
    pub token_file: PathBuf,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(api_url: String, token_file: PathBuf, timeout: Duration) -> Self {
        Self {
            api_url,
            token_file,
            timeout,
        }
    }

    #[must_use]
    pub fn token_store(&self) -> FileTokenStore {
        FileTokenStore::new(self.token_file.clone())
    }

    /// Client without credentials, for the login endpoints.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid.
    pub fn anonymous_client(&self) -> Result<ApiClient> {
        let config = ApiConfig::new(&self.api_url)?.with_timeout(self.timeout);
        Ok(ApiClient::new(config)?)
    }

    /// Client carrying the token saved by `qr-login`.
    ///
    /// # Errors
    /// Returns an error if no token is stored or the token file is unreadable.
    pub fn authenticated_client(&self) -> Result<ApiClient> {
        let token = self
            .token_store()
            .load()?
            .context("Not logged in. Run `workforce qr-login` first.")?;
        Ok(self
            .anonymous_client()?
            .with_token(SecretString::from(token.expose().to_string())))
    }
}

/// `$HOME/.config/workforce/token`, when `HOME` is set.
#[must_use]
pub fn default_token_file() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join("workforce").join("token"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::features::qr_auth::AuthToken;
    use crate::qr_login::SessionStore;

    fn globals(token_file: PathBuf) -> GlobalArgs {
        GlobalArgs::new(
            "http://localhost:8000".to_string(),
            token_file,
            Duration::from_secs(3),
        )
    }

    #[test]
    fn test_default_token_file() {
        temp_env::with_var("HOME", Some("/home/asha"), || {
            assert_eq!(
                default_token_file(),
                Some(PathBuf::from("/home/asha/.config/workforce/token"))
            );
        });
        temp_env::with_var_unset("HOME", || {
            assert_eq!(default_token_file(), None);
        });
    }

    #[test]
    fn test_anonymous_client() {
        let client = globals(PathBuf::from("/nonexistent/token"))
            .anonymous_client()
            .unwrap();
        assert!(!client.is_authenticated());
        assert_eq!(client.config().timeout, Duration::from_secs(3));

        let mut bad = globals(PathBuf::from("/nonexistent/token"));
        bad.api_url = "ftp://hr.example.com".to_string();
        assert!(bad.anonymous_client().is_err());
    }

    #[test]
    fn test_authenticated_client_requires_login() {
        let dir = std::env::temp_dir().join(format!("workforce-globals-{}", uuid::Uuid::new_v4()));
        let args = globals(dir.join("token"));

        let err = args.authenticated_client().unwrap_err();
        assert!(err.to_string().contains("Not logged in"));

        args.token_store().save(&AuthToken::new("tok")).unwrap();
        assert!(args.authenticated_client().unwrap().is_authenticated());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
