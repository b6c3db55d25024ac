use anyhow::Result;
use mergington_activities::config::Settings;
use mergington_activities::infrastructure::init_tracing;
use mergington_activities::Application;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings.logging)?;

    info!(
        environment = %settings.application.environment,
        "Starting Mergington activities application"
    );

    let app = Application::build(settings).await?;
    app.run().await?;

    Ok(())
}
