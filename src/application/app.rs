use crate::api;
use crate::config::Settings;
use crate::domain::ActivityDirectory;
use crate::infrastructure::shutdown_signal;
use crate::Result;
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    directory: Arc<ActivityDirectory>,
    listener: TcpListener,
}

impl Application {
    /// Seed the directory and bind the configured address
    #[instrument(skip(settings))]
    pub async fn build(settings: Settings) -> Result<Self> {
        let listener = TcpListener::bind(settings.bind_address()).await?;
        Self::with_listener(settings, listener)
    }

    /// Like [`Application::build`], serving on an already bound listener
    pub fn with_listener(settings: Settings, listener: TcpListener) -> Result<Self> {
        let policy = settings.directory.enforce_capacity.into();
        let directory = Arc::new(ActivityDirectory::seeded(policy)?);
        info!(
            activities = directory.len(),
            capacity_policy = ?policy,
            "Activity directory seeded"
        );

        Ok(Self {
            settings,
            directory,
            listener,
        })
    }

    /// Serve until Ctrl+C or SIGTERM
    pub async fn run(self) -> Result<()> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    #[instrument(skip_all)]
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.local_addr()?;
        info!(
            %address,
            environment = %self.settings.application.environment,
            "Starting Mergington activities server"
        );

        let router = self.router();
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server shutdown complete");
        Ok(())
    }

    pub fn router(&self) -> Router {
        api::router(
            Arc::clone(&self.directory),
            self.settings.application.static_dir.clone(),
        )
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn directory(&self) -> &ActivityDirectory {
        &self.directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CapacityPolicy;

    fn settings(enforce_capacity: bool) -> Settings {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::load(dir.path(), "test").unwrap();
        settings.directory.enforce_capacity = enforce_capacity;
        settings
    }

    #[tokio::test]
    async fn test_application_seeds_directory() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app = Application::with_listener(settings(false), listener).unwrap();

        assert_eq!(app.directory().len(), 9);
        assert_eq!(app.directory().capacity_policy(), CapacityPolicy::Unenforced);
        assert!(app.local_addr().unwrap().port() > 0);
    }

    #[tokio::test]
    async fn test_capacity_setting_reaches_directory() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app = Application::with_listener(settings(true), listener).unwrap();

        assert_eq!(app.directory().capacity_policy(), CapacityPolicy::Enforced);
    }

    #[tokio::test]
    async fn test_run_until_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let app = Application::with_listener(settings(false), listener).unwrap();

        let result = app.run_until(async {}).await;
        assert!(result.is_ok());
    }
}
