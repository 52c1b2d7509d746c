mod commands;

use anyhow::Result;
use chuckle::action::JokeAction;
use chuckle::models::query::{Category, Language};
use chuckle::providers::configs::{
    BuiltinProviderConfig, ProviderConfig, RemoteProviderConfig, CHUCK_NORRIS_HOST,
};
use chuckle::providers::factory::get_provider;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Where jokes come from
    #[arg(short, long, global = true, default_value = "builtin")]
    #[arg(value_enum)]
    provider: ProviderVariant,

    /// Base URL of the remote joke API (remote provider only)
    #[arg(long, global = true, default_value = CHUCK_NORRIS_HOST)]
    host: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ProviderVariant {
    Builtin,
    Remote,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the slash-command action and print its result
    Invoke {
        /// Arguments passed to the action, as JSON
        #[arg(long)]
        args: Option<String>,
    },

    /// Print one random joke
    Joke {
        #[arg(short, long, default_value = "neutral", value_parser = Category::parse)]
        category: Category,

        #[arg(short, long, default_value = "en", value_parser = Language::parse)]
        language: Language,
    },

    /// List the available categories and languages
    Categories,

    /// Display the current version
    Version,
}

impl Cli {
    fn provider_config(&self) -> ProviderConfig {
        match self.provider {
            ProviderVariant::Builtin => ProviderConfig::Builtin(BuiltinProviderConfig),
            ProviderVariant::Remote => ProviderConfig::Remote(RemoteProviderConfig {
                host: self.host.clone(),
                ..Default::default()
            }),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout carries the jokes, so logs only appear when asked for
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Categories => commands::categories::execute(),
        Command::Version => commands::version::execute(),
        Command::Invoke { ref args } => {
            let action = JokeAction::new(get_provider(cli.provider_config())?);
            commands::invoke::execute(&action, args.clone()).await
        }
        Command::Joke { category, language } => {
            let provider = get_provider(cli.provider_config())?;
            commands::joke::execute(provider.as_ref(), language, category).await
        }
    }
}
