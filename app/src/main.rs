use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_app::{compute::DEFAULT_ITERATIONS, App, UreqTransport};
use user_core::UserClient;

#[derive(Parser)]
#[command(name = "user-app", about = "Render the user view against a running user server")]
struct Cli {
    /// Base URL of the user server
    #[arg(long, env = "USER_APP_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// How many times to press the counter button
    #[arg(long, default_value_t = 0)]
    increment: u32,

    /// Name of a user to add locally
    #[arg(long, requires = "email")]
    add_user: Option<String>,

    /// Email of the user to add locally
    #[arg(long, requires = "add_user")]
    email: Option<String>,

    /// Loop length of the expensive computation
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::info!("using server at {}", cli.base_url);

    let mut app = App::new(UserClient::new(&cli.base_url), UreqTransport::new(), cli.iterations);
    app.store_mut().subscribe(|state| {
        tracing::debug!(count = state.count, users = state.users.len(), loading = state.loading, "state changed");
    });

    app.mount();
    for _ in 0..cli.increment {
        app.increment();
    }
    if let (Some(name), Some(email)) = (cli.add_user, cli.email) {
        app.add_user(name, email);
    }

    print!("{}", app.render());
    Ok(())
}
