//! Headless portal driver: runs the login and dashboard flows against a live
//! server with an in-memory cookie jar standing in for the browser.

use std::cell::RefCell;

use clap::{Parser, Subcommand};
use portal_client::ClientConfig;
use portal_client::dashboard::{DashboardOutcome, load_dashboard};
use portal_client::login::{LoginOutcome, SubmitEvent, handle_login};
use portal_client::net::native::NativeTransport;
use portal_client::net::{AuthenticatedFetch, FormFields};
use portal_client::page::Page;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("--username and --password are required for login")]
    MissingCredentials,
    #[error(transparent)]
    Fetch(#[from] portal_client::FetchError),
    #[error("login rejected: {0}")]
    Rejected(String),
    #[error("not authenticated; the dashboard redirected to {0}")]
    NotAuthenticated(String),
}

#[derive(Parser, Debug)]
#[command(name = "portal", about = "Log in to the portal and load the dashboard")]
struct Cli {
    #[arg(long, env = "PORTAL_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "PORTAL_USERNAME")]
    username: Option<String>,

    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit credentials, then load the dashboard in the same session.
    Login,
    /// Load the dashboard without logging in.
    Dashboard,
}

/// Prints rendered HTML to stdout and alerts to stderr; remembers the last
/// navigation target.
#[derive(Debug, Default)]
struct TerminalPage {
    location: RefCell<Option<String>>,
}

impl Page for TerminalPage {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigate");
        *self.location.borrow_mut() = Some(path.to_owned());
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn replace_body(&self, html: &str) {
        println!("{html}");
    }
}

struct CredentialSubmit {
    fields: FormFields,
}

impl SubmitEvent for CredentialSubmit {
    fn prevent_default(&self) {}

    fn form_fields(&self) -> FormFields {
        self.fields.clone()
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "portal command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::default();
    let fetch = AuthenticatedFetch::new(NativeTransport::new(&cli.base_url)?);
    let page = TerminalPage::default();

    if matches!(cli.command, Command::Login) {
        let (Some(username), Some(password)) = (cli.username, cli.password) else {
            return Err(CliError::MissingCredentials);
        };
        let fields = [("username", username), ("password", password)].into_iter().collect();
        let submit = CredentialSubmit { fields };
        match handle_login(&submit, &fetch, &page, &config).await? {
            LoginOutcome::Redirected => {
                tracing::info!(session = fetch.transport().cookie_header().is_some(), "login accepted");
            }
            LoginOutcome::Rejected { message } => return Err(CliError::Rejected(message)),
        }
    }

    match load_dashboard(&fetch, &page, &config).await {
        DashboardOutcome::Rendered => Ok(()),
        DashboardOutcome::RedirectedToLogin => {
            Err(CliError::NotAuthenticated(page.location.take().unwrap_or(config.login_path)))
        }
    }
}
