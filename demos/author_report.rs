use clap::Parser;
use dblp_client::{ClientConfig, DblpClient};

#[derive(Parser, Debug)]
#[clap(
    name = "dblp-author-report",
    about = "Search DBLP authors and list their publications",
    long_about = "Searches DBLP for authors matching a name and prints each match with its most recent publications. Set DBLP_BASE_URL to use a mirror."
)]
struct Args {
    /// Author name to search for
    #[clap(required = true)]
    name: String,

    /// Publications to show per author
    #[clap(short, long, default_value = "5")]
    limit: usize,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = DblpClient::with_config(ClientConfig::from_env()?);

    let authors = client.search_authors(&args.name).await?;
    println!("{} author(s) match {:?}", authors.len(), args.name);

    for author in &authors {
        println!("\n{} [{}]", author.name().await?, author.urlpt());

        let homonyms = author.homonyms().await?;
        if !homonyms.is_empty() {
            println!("  homonyms: {}", homonyms.join(", "));
        }

        for publication in author.publications().await?.iter().take(args.limit) {
            match publication.record().await {
                Ok(record) => println!(
                    "  {} ({}) {}",
                    record.year,
                    record.publication_type,
                    record.title.as_deref().unwrap_or("untitled")
                ),
                Err(e) => eprintln!("  {}: {}", publication.key(), e),
            }
        }
    }

    Ok(())
}
