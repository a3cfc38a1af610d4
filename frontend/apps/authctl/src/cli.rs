use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "authctl")]
#[command(version)]
#[command(about = "Drive sign-in and sign-up against an auth API")]
pub struct Cli {
    /// API origin
    #[arg(long, env = "AUTH_API_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[arg(long, env = "AUTH_API_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with an existing account
    Signin(AttemptArgs),
    /// Create an account
    Signup(AttemptArgs),
    /// Show the bootstrapped session
    Whoami,
    /// Print the OAuth provider URL the login page would open
    Oauth {
        /// Provider path, e.g. /api/auth/github
        provider_path: String,
        #[command(flatten)]
        prior: PriorArgs,
    },
}

#[derive(Args)]
pub struct AttemptArgs {
    /// User name or email
    #[arg(long, default_value = "")]
    pub identifier: String,

    #[arg(long, env = "AUTH_PASSWORD", default_value = "", hide_env_values = true)]
    pub password: String,

    /// Ask the server for a long-lived session
    #[arg(long)]
    pub remember: bool,

    #[command(flatten)]
    pub prior: PriorArgs,
}

/// Destination the user was headed to before being sent to sign in
#[derive(Args)]
pub struct PriorArgs {
    /// Route name, e.g. articles.create
    #[arg(long = "return-to")]
    pub return_to: Option<String>,

    /// Route path, e.g. /articles/create
    #[arg(long = "return-href", requires = "return_to")]
    pub return_href: Option<String>,
}
