use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use github_rest::transport::ReqwestTransport;
use github_rest::utils::{exit_code_for, exit_codes, get_exit_code_description, parse_custom_options};
use github_rest::{ApiResult, ClientConfig, GithubClient, IssueQuery, OwnReposQuery, constants};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "github-rest")]
#[command(about = "Query a subset of the GitHub REST API v3")]
#[command(version)]
struct Cli {
    /// Configuration file path (default: github-rest.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// API base URL, e.g. https://github.example.com/api/v3
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Page number for list endpoints
    #[arg(long, global = true)]
    page: Option<u32>,

    /// Items per page for list endpoints
    #[arg(long, global = true)]
    per_page: Option<u32>,

    /// IANA timezone, e.g. Europe/London
    #[arg(long, global = true)]
    timezone: Option<String>,

    /// Custom transport option as KEY=VALUE (can be specified multiple times)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", global = true)]
    options: Vec<String>,

    /// Log each request to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get a user's public profile
    User { username: String },

    /// List repositories of the authenticated user
    OwnRepos {
        /// all, owner, public, private or member
        #[arg(long = "type")]
        repo_type: Option<String>,

        /// created, updated, pushed or full_name
        #[arg(long)]
        sort: Option<String>,

        /// asc or desc
        #[arg(long)]
        direction: Option<String>,
    },

    /// List a user's repositories
    UserRepos { user: String },

    /// List an organization's repositories
    OrgRepos { org: String },

    /// Get a repository
    Repo { owner: String, repo: String },

    /// List a repository's languages
    Languages { owner: String, repo: String },

    /// List a repository's tags
    Tags { owner: String, repo: String },

    /// List a repository's branches
    Branches { owner: String, repo: String },

    /// Get a single branch
    Branch {
        owner: String,
        repo: String,
        branch: String,
    },

    /// List teams with access to a repository
    Teams { owner: String, repo: String },

    /// List a repository's commits, optionally within a time window
    Commits {
        owner: String,
        repo: String,

        /// Window start; the window ends OFFSET later
        #[arg(long, conflicts_with = "until")]
        since: Option<String>,

        /// Window end; the window starts OFFSET earlier
        #[arg(long)]
        until: Option<String>,

        /// Window length, e.g. "6 months" or "10 days"
        #[arg(long, default_value = "6 months")]
        offset: String,
    },

    /// List a user's gists
    Gists {
        user: String,

        /// Only gists updated at or after this ISO-8601 timestamp
        #[arg(long)]
        since: Option<String>,
    },

    /// List a repository's issues
    Issues {
        owner: String,
        repo: String,

        #[arg(long)]
        milestone: Option<String>,

        /// open, closed or all
        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        assignee: Option<String>,

        #[arg(long)]
        creator: Option<String>,

        #[arg(long)]
        mentioned: Option<String>,

        /// Comma-separated label names
        #[arg(long)]
        labels: Option<String>,

        /// created, updated or comments
        #[arg(long)]
        sort: Option<String>,

        /// asc or desc
        #[arg(long)]
        direction: Option<String>,

        /// Only issues updated at or after this ISO-8601 timestamp
        #[arg(long)]
        since: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            return ExitCode::from(exit_codes::USAGE_ERROR);
        }
    };

    match execute(client, cli.command).await {
        Ok(Ok(value)) => match serde_json::to_string_pretty(&value) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".red().bold(), err);
                ExitCode::from(exit_codes::DECODE_ERROR)
            }
        },
        Ok(Err(err)) => {
            let code = exit_code_for(&err);
            eprintln!(
                "{} {} ({})",
                "Error:".red().bold(),
                err,
                get_exit_code_description(code).dimmed()
            );
            ExitCode::from(code)
        }
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(exit_codes::USAGE_ERROR)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    match &cli.config {
        Some(path) => ClientConfig::load(path),
        None if Path::new(constants::config::DEFAULT_CONFIG_FILE).exists() => {
            github_rest::load_default_config()
        }
        None => Ok(ClientConfig::default()),
    }
}

fn build_client(cli: &Cli) -> Result<GithubClient> {
    let mut config = load_config(cli)?;

    if let Some(token) = &cli.token {
        config.auth_token = Some(token.clone());
    }
    if let Some(api_url) = &cli.api_url {
        config.api_base_url = api_url.clone();
    }
    if let Some(page) = cli.page {
        config.page = page;
    }
    if let Some(per_page) = cli.per_page {
        config.per_page = per_page;
    }
    if let Some(timezone) = &cli.timezone {
        config.timezone = timezone.clone();
    }
    config
        .custom_transport_options
        .extend(parse_custom_options(&cli.options)?);

    config.validate()?;

    let transport = ReqwestTransport::with_user_agent(constants::github::DEFAULT_USER_AGENT)
        .context("Failed to create HTTP transport")?;
    let mut client = GithubClient::from_config(transport, config);

    if cli.verbose {
        client.set_request_hook(|event| {
            eprintln!("{} {} {}", "→".cyan(), event.method.bold(), event.url);
        });
    }

    Ok(client)
}

async fn execute(mut client: GithubClient, command: Commands) -> Result<ApiResult> {
    let result = match command {
        Commands::User { username } => client.get_user_profile(&username).await,
        Commands::OwnRepos {
            repo_type,
            sort,
            direction,
        } => {
            let query = OwnReposQuery {
                repo_type,
                sort,
                direction,
            };
            client.get_own_repos(&query).await
        }
        Commands::UserRepos { user } => client.get_user_repos(&user).await,
        Commands::OrgRepos { org } => client.get_org_repos(&org).await,
        Commands::Repo { owner, repo } => client.get_repo(&owner, &repo).await,
        Commands::Languages { owner, repo } => client.get_repo_languages(&owner, &repo).await,
        Commands::Tags { owner, repo } => client.get_repo_tags(&owner, &repo).await,
        Commands::Branches { owner, repo } => client.get_repo_branches(&owner, &repo).await,
        Commands::Branch {
            owner,
            repo,
            branch,
        } => client.get_repo_branch(&owner, &repo, &branch).await,
        Commands::Teams { owner, repo } => client.get_repo_teams(&owner, &repo).await,
        Commands::Commits {
            owner,
            repo,
            since,
            until,
            offset,
        } => {
            if let Some(since) = since {
                client.set_time_period_since(since, &offset)?;
            } else if let Some(until) = until {
                client.set_time_period_until(until, &offset)?;
            }
            client.get_repo_commits(&owner, &repo).await
        }
        Commands::Gists { user, since } => client.get_user_gists(&user, since.as_deref()).await,
        Commands::Issues {
            owner,
            repo,
            milestone,
            state,
            assignee,
            creator,
            mentioned,
            labels,
            sort,
            direction,
            since,
        } => {
            let query = IssueQuery {
                milestone,
                state,
                assignee,
                creator,
                mentioned,
                labels,
                sort,
                direction,
                since,
            };
            client.get_repo_issues(&owner, &repo, &query).await
        }
    };

    Ok(result)
}
