use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Command line client for the Pokemon gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway liveness
    Health,
    /// List pokemons from the upstream service
    List {
        #[arg(long, default_value_t = 20)]
        limit: i64,
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
    /// Fetch one pokemon by ID
    Get { id: i64 },
    /// Create a local pokemon
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        height: i64,
        #[arg(long)]
        weight: i64,
        /// Comma separated, e.g. `fire,flying`
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
        #[arg(long)]
        base_experience: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Health => client.get(format!("{base}/health")).send().await?,
        Commands::List { limit, offset } => {
            client
                .get(format!("{base}/pokemons"))
                .query(&[("limit", limit), ("offset", offset)])
                .send()
                .await?
        }
        Commands::Get { id } => client.get(format!("{base}/pokemons/{id}")).send().await?,
        Commands::Create {
            name,
            height,
            weight,
            types,
            base_experience,
        } => {
            let body = json!({
                "name": name,
                "height": height,
                "weight": weight,
                "types": types,
                "base_experience": base_experience,
            });
            client.post(format!("{base}/pokemons")).json(&body).send().await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(body) => serde_json::to_string_pretty(&body)?,
        Err(_) => text,
    };

    if !status.is_success() {
        eprintln!("Error: gateway returned status {status}");
        eprintln!("{rendered}");
        std::process::exit(1);
    }

    println!("{rendered}");
    Ok(())
}
