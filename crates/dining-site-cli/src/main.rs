//! Dining site CLI — entry point.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use dining_site::FormKind;
use dining_site_cli::{parse_field, resolve_api_base};

#[derive(Parser)]
#[command(
    name = "dining-site",
    about = "Serve the restaurant site, preview its content, and submit its forms",
    version
)]
struct Cli {
    /// Base URL of the site API.
    /// Also reads from DINING_API_URL env var.
    #[arg(long, global = true)]
    api: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the built site directory over HTTP.
    #[cfg(feature = "serve")]
    Serve {
        /// Interface to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Directory holding index.html and media/.
        /// Also reads from DINING_SITE_DIR env var.
        #[arg(long)]
        site_dir: Option<String>,
    },

    /// Load content onto the page and print the result as JSON.
    Preview,

    /// Submit a form and print the feedback shown to the visitor.
    ///
    /// Example:
    ///   dining-site submit reservation --field name=Ada --field guests=2
    Submit {
        /// Which form to submit.
        form: FormArg,

        /// A form field as name=value. Repeat for each field.
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormArg {
    Reservation,
    Order,
}

impl From<FormArg> for FormKind {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Reservation => FormKind::Reservation,
            FormArg::Order => FormKind::Order,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        #[cfg(feature = "serve")]
        Commands::Serve {
            host,
            port,
            site_dir,
        } => {
            let site_dir = dining_site_cli::resolve_site_dir(site_dir.as_deref());
            let server = dining_site_cli::SiteServer::new(&site_dir)?;
            server.run(&host, port).await?;
        }

        Commands::Preview => {
            let api = resolve_api_base(cli.api.as_deref());
            let preview = dining_site_cli::preview(&api).await?;
            if let Some(error) = &preview.load_error {
                tracing::warn!("Showing static content: {error}");
            }
            let forms: Vec<String> = preview.forms.iter().map(|f| f.to_string()).collect();
            tracing::info!("Wired forms: {}", forms.join(", "));
            println!("{}", serde_json::to_string_pretty(&preview.page)?);
        }

        Commands::Submit { form, fields } => {
            let api = resolve_api_base(cli.api.as_deref());
            let fields = fields
                .iter()
                .map(|raw| parse_field(raw))
                .collect::<Result<Vec<_>, _>>()?;
            let kind = FormKind::from(form);
            let submitted = dining_site_cli::submit(&api, kind, &fields).await?;
            let feedback = submitted.page.text(kind.feedback_id()).unwrap_or_default();
            match submitted.result {
                Ok(_) => println!("{feedback}"),
                Err(_) => {
                    eprintln!("{feedback}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "dining-site", &mut std::io::stdout());
        }
    }

    Ok(())
}
