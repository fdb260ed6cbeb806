/// UserHub - user management dashboard server
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userhub_client::{ClientConfig, UserHubClient};
use userhub_core::{filter_users, CreateUserForm, DashboardStats, NewUser, User, UserStore};
use userhub_server::{config::ServerConfig, create_router, state::AppState};
use userhub_storage::JsonUserStore;

#[derive(Parser)]
#[command(name = "userhub")]
#[command(about = "UserHub user management dashboard", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./userhub.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Append a user to the store
    AddUser(AddUserArgs),
    /// List users, optionally filtered
    ListUsers {
        /// Case-insensitive match on name, email or company
        #[arg(short, long, default_value = "")]
        search: String,
        /// Read from a running server instead of the local store
        #[arg(long)]
        server: Option<String>,
    },
    /// Print the dashboard figures
    Stats,
}

#[derive(Args)]
struct AddUserArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    website: String,
    #[arg(long, default_value = "")]
    street: String,
    #[arg(long, default_value = "")]
    suite: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    zipcode: String,
    #[arg(long, default_value = "")]
    lat: String,
    #[arg(long, default_value = "")]
    lng: String,
    #[arg(long, default_value = "")]
    company_name: String,
    #[arg(long, default_value = "")]
    catch_phrase: String,
    #[arg(long, default_value = "")]
    bs: String,
}

impl From<AddUserArgs> for CreateUserForm {
    fn from(args: AddUserArgs) -> Self {
        CreateUserForm {
            name: args.name,
            username: args.username,
            email: args.email,
            phone: args.phone,
            website: args.website,
            street: args.street,
            suite: args.suite,
            city: args.city,
            zipcode: args.zipcode,
            lat: args.lat,
            lng: args.lng,
            company_name: args.company_name,
            catch_phrase: args.catch_phrase,
            bs: args.bs,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userhub_server=info,userhub=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::AddUser(args) => add_user(&config, args).await?,
        Commands::ListUsers { search, server } => {
            list_users(&config, &search, server.as_deref()).await?;
        }
        Commands::Stats => stats(&config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting UserHub");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = JsonUserStore::new(config.storage.users_file.clone());
    store.initialize().await.with_context(|| {
        format!(
            "Failed to initialize user document at {}",
            store.path().display()
        )
    })?;
    tracing::info!("User document: {}", store.path().display());

    let app_state = AppState::new(Arc::new(store));
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, args: AddUserArgs) -> anyhow::Result<()> {
    let store = JsonUserStore::new(config.storage.users_file.clone());
    store.initialize().await?;

    let new_user = NewUser::from(CreateUserForm::from(args));
    let user = store.create_user(new_user).await?;

    tracing::info!(id = %user.id, "Created user");
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

async fn list_users(
    config: &ServerConfig,
    search: &str,
    server: Option<&str>,
) -> anyhow::Result<()> {
    let users: Vec<User> = match server {
        Some(url) => {
            let client = UserHubClient::new(ClientConfig::new(url))?;
            client.try_get_users().await?
        }
        None => {
            let store = JsonUserStore::new(config.storage.users_file.clone());
            store.all_users().await?
        }
    };

    let matches = filter_users(&users, search);
    println!("Users ({} of {}):", matches.len(), users.len());
    for user in matches {
        println!(
            "  {} - {} <{}> ({})",
            user.id, user.name, user.email, user.company.name
        );
    }

    Ok(())
}

async fn stats(config: &ServerConfig) -> anyhow::Result<()> {
    let store = JsonUserStore::new(config.storage.users_file.clone());
    let users = store.all_users().await?;
    let stats = DashboardStats::from_total(users.len());

    println!("Total Users:  {}", stats.total_users);
    println!("Active Users: {}", stats.active_users);
    println!("New Today:    {}", stats.new_today);
    Ok(())
}
