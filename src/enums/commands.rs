use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Load and validate the configuration
    Validate,
    /// Run the cause API server
    Serve {
        /// Overrides `server.port` from the configuration
        #[clap(short, long)]
        port: Option<u16>,
        /// Also run the background batch jobs
        #[clap(long)]
        batch: bool,
    },
    /// Fetch causes and render them into an HTML page
    Render {
        #[clap(short, long)]
        view: Option<String>,
        #[clap(short, long)]
        url: Option<String>,
        #[clap(short, long)]
        output: Option<String>,
        #[clap(long)]
        per_record: bool,
        /// Open the rendered page in the browser
        #[clap(long)]
        open: bool,
    },
    /// List the causes known to the server
    List,
    /// Create a cause
    Add {
        #[clap(short, long)]
        name: String,
        #[clap(short, long, default_value_t = 0)]
        frequency: u64,
        #[clap(short, long)]
        total: Option<u64>,
        #[clap(short, long)]
        description: Option<String>,
    },
    /// Delete a cause
    Remove {
        #[clap(long)]
        id: u64,
    },
    /// Email a cause
    Send {
        #[clap(long)]
        id: u64,
        /// Wait for the email to be delivered
        #[clap(short, long)]
        wait: bool,
    },
}
