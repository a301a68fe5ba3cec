use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ArcaError, ArcaResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::batch_processor::BatchProcessor;
use crate::services::cause_client::CauseClient;
use crate::services::cause_repository::CauseRepository;
use crate::services::cause_service::CauseService;
use crate::services::email_service::EmailService;
use crate::services::page_loader::PageLoader;
use crate::structs::cause::Cause;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;
use crate::ui::api_server::{ApiServer, AppState};
use crate::ui::document::Document;

const RENDER_FALLBACK_FILE: &str = "arca-causes.html";

pub struct CommandRunner {
    start_time: Option<Instant>,
    config_path: Option<PathBuf>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
            config_path: None,
        }
    }

    pub async fn run_command(&mut self, cli: Cli) -> ArcaResult<()> {
        self.start_time = Some(Instant::now());
        self.config_path = cli.config.map(PathBuf::from);

        let result = match cli.command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Serve { port, batch } => self.serve_command(port, batch).await,
            Commands::Render { view, url, output, per_record, open } => {
                self.render_command(view, url, output, per_record, open).await
            }
            Commands::List => self.list_command().await,
            Commands::Add { name, frequency, total, description } => {
                self.add_command(name, frequency, total, description).await
            }
            Commands::Remove { id } => self.remove_command(id).await,
            Commands::Send { id, wait } => self.send_command(id, wait).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> ArcaResult<Config> {
        ConfigManager::load(self.config_path.as_deref()).map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'arca init' to create a configuration file.");
            e
        })
    }

    fn init_command(&self) -> ArcaResult<()> {
        log::info!("🚀 Initializing arca configuration...");

        match ConfigManager::create_sample_config(self.config_path.as_deref()) {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("📝 Edit the configuration file to add seed causes and recipients.");
                log::info!("🔧 Run 'arca validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> ArcaResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = self.load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("   Server: {}:{} ({} seed causes)", config.server.host, config.server.port, config.server.seed.len());
                log::info!("   Client: {}", config.client.base_url);
                log::info!("   Views: {} configured", config.views.len());
                Ok(())
            }
            Err(errors) => {
                log::error!("❌ Configuration has {} problem(s):", errors.len());
                for error in &errors {
                    log::error!("   • {}", error);
                }
                Err(ArcaError::config_error(
                    &format!("{} validation error(s)", errors.len()),
                    None,
                    Some("Fix the listed problems and run 'arca validate' again"),
                ))
            }
        }
    }

    async fn serve_command(&self, port: Option<u16>, batch: bool) -> ArcaResult<()> {
        let config = self.load_config()?;
        let run_batch = batch || config.batch.enabled;
        ConfigManager::validate_for_serve(&config, run_batch).map_err(|errors| {
            ArcaError::config_error(&errors.join("; "), None, Some("Run 'arca validate' for details"))
        })?;

        let host: IpAddr = config.server.host.parse().map_err(|_| {
            ArcaError::validation_error("server.host", &config.server.host, "must be an IP address")
        })?;
        let addr = SocketAddr::new(host, port.unwrap_or(config.server.port));

        let repository = CauseRepository::with_seed(config.server.seed.clone());
        log::info!("🗃️ Loaded {} seed causes", repository.count());
        let service = Arc::new(CauseService::new(repository));

        let mut batch_processor = run_batch
            .then(|| BatchProcessor::new(config.batch.clone(), Arc::clone(&service)));
        if let Some(processor) = batch_processor.as_mut() {
            processor.start()?;
        }

        let mut server = ApiServer::new(AppState {
            service: Arc::clone(&service),
            email: EmailService::new(config.email.clone()),
            config,
        });
        server.start(addr).await?;

        log::info!("⌨️ Press Ctrl+C to stop");
        tokio::signal::ctrl_c().await?;

        if let Some(processor) = batch_processor.as_mut() {
            processor.stop().await;
        }
        server.shutdown().await
    }

    async fn render_command(
        &self,
        view: Option<String>,
        url: Option<String>,
        output: Option<String>,
        per_record: bool,
        open: bool,
    ) -> ArcaResult<()> {
        let config = self.load_config()?;

        let view_name = view.unwrap_or_else(|| config.render.default_view.clone());
        let per_record = (per_record || config.render.per_record).then_some(true);
        let view_config = ConfigManager::resolve_view(&config, &view_name, per_record)?;

        let mut client = CauseClient::new(&config.client)?;
        if let Some(url) = url.as_deref() {
            client = client.with_endpoint(url);
        }

        let mut document = Document::for_view(&view_config);
        let mut spinner = AnimatedLogger::new(&format!("Loading causes for view '{}'", view_name));
        spinner.start();

        let summary = match PageLoader::load(&client, &view_config, &mut document).await {
            Ok(summary) => {
                spinner.stop(&format!("Rendered {} causes ({} fields)", summary.records, summary.appended)).await;
                summary
            }
            Err(e) => {
                spinner.error(&format!("Could not load causes: {}", e)).await;
                return Err(e);
            }
        };

        let html = document.to_html(&config.render.title);
        let target = match (output, open) {
            (Some(path), _) => Some(PathBuf::from(path)),
            (None, true) => Some(std::env::temp_dir().join(RENDER_FALLBACK_FILE)),
            (None, false) => None,
        };

        match target {
            Some(path) => {
                Self::write_page(&path, &html)?;
                log::info!("📄 Page written to {} ({} rows)", path.display(), summary.rows);
                if open {
                    webbrowser::open(&path.display().to_string())?;
                    log::info!("🌍 Opened {} in the browser", path.display());
                }
            }
            None => println!("{}", html),
        }

        Ok(())
    }

    fn write_page(path: &Path, html: &str) -> ArcaResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, html)?;
        Ok(())
    }

    fn client(&self) -> ArcaResult<CauseClient> {
        let config = self.load_config()?;
        CauseClient::new(&config.client)
    }

    async fn list_command(&self) -> ArcaResult<()> {
        let client = self.client()?;
        let causes = client.list_causes().await?;

        if causes.is_empty() {
            log::info!("📭 No causes registered at {}", client.causes_url());
            return Ok(());
        }

        println!("{:>5}  {:<30} {:>9} {:>7}  DESCRIPTION", "ID", "NAME", "FREQUENCY", "TOTAL");
        for cause in &causes {
            println!(
                "{:>5}  {:<30} {:>9} {:>7}  {}",
                cause.id.map(|id| id.to_string()).unwrap_or_default(),
                cause.name,
                cause.frequency,
                cause.total.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string()),
                cause.description.as_deref().unwrap_or(""),
            );
        }
        log::info!("📋 {} causes", causes.len());
        Ok(())
    }

    async fn add_command(
        &self,
        name: String,
        frequency: u64,
        total: Option<u64>,
        description: Option<String>,
    ) -> ArcaResult<()> {
        let mut cause = Cause::new(&name, frequency);
        cause.total = total;
        cause.description = description;

        let created = self.client()?.create_cause(&cause).await?;
        log::info!("✅ Created cause {} '{}'", created.id.unwrap_or_default(), created.name);
        Ok(())
    }

    async fn remove_command(&self, id: u64) -> ArcaResult<()> {
        self.client()?.delete_cause(id).await?;
        log::info!("🗑️ Removed cause {}", id);
        Ok(())
    }

    async fn send_command(&self, id: u64, wait: bool) -> ArcaResult<()> {
        let client = self.client()?;
        let mut spinner = AnimatedLogger::new(&format!("Sending cause {}", id));
        if wait {
            spinner.start();
        }

        match client.send_cause(id, wait).await {
            Ok(cause) if wait => {
                spinner.stop(&format!("Cause {} '{}' delivered", id, cause.name)).await;
                Ok(())
            }
            Ok(cause) => {
                log::info!("📨 Cause {} '{}' queued for delivery", id, cause.name);
                Ok(())
            }
            Err(e) => {
                if wait {
                    spinner.error(&format!("Sending cause {} failed", id)).await;
                }
                Err(e)
            }
        }
    }
}
