use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use hms::modules::{ModuleManager, ModuleSpec};
use hms::state::AppState;
use hms_auth::TokenService;
use hms_config::JwtConfig;

#[derive(Parser)]
#[command(name = "hms-cli")]
#[command(about = "HMS CLI - Administrative tools for the HMS API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the module catalog in registration order
    Modules,

    /// Issue a session token signed with the configured JWT secret
    IssueToken {
        /// Account id to put in the token
        #[arg(short = 'u', long)]
        user_id: String,

        /// Role to put in the token (repeatable)
        #[arg(short = 'r', long = "role")]
        roles: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Modules => {
            let manager = ModuleManager::<AppState>::new();
            let order = manager.registration_order()?;

            for (position, spec) in order.iter().enumerate() {
                println!("{}", describe(position + 1, spec));
            }
        }
        Commands::IssueToken { user_id, roles } => {
            let config = JwtConfig::from_env();
            if config.uses_default_secret() {
                eprintln!(
                    "warning: JWT_SECRET is not set, token is signed with the development secret"
                );
            }

            let token = TokenService::new(&config).issue(&user_id, &roles)?;
            println!("{token}");
        }
    }

    Ok(())
}

fn describe<S>(position: usize, spec: &ModuleSpec<S>) -> String {
    if spec.dependencies.is_empty() {
        format!("{position}. {} {}", spec.name, spec.path)
    } else {
        format!(
            "{position}. {} {} (after {})",
            spec.name,
            spec.path,
            spec.dependencies.join(", ")
        )
    }
}
