use clap::{Parser, Subcommand};
use lyricart::server::{build_router, AppState};
use lyricart::{Config, LyricArt};
use tracing::info;

#[derive(Parser)]
#[command(name = "lyricart")]
#[command(about = "Song lyrics in, analysis and artwork out", long_about = None)]
struct Cli {
    /// Genius API access token (can also be set via GENIUS_ACCESS_TOKEN env var)
    #[arg(long, env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
    genius_token: String,

    /// OpenAI API key (can also be set via OPENAI_API_KEY env var)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: String,

    /// Model used for the lyrics analysis
    #[arg(long, default_value = lyricart::config::DEFAULT_TEXT_MODEL)]
    text_model: String,

    /// Model used for the artwork
    #[arg(long, default_value = lyricart::config::DEFAULT_IMAGE_MODEL)]
    image_model: String,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = lyricart::config::OPENAI_API_URL)]
    openai_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web interface
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:5000")]
        bind: String,
    },
    /// Search for songs
    Search {
        /// Search query
        query: String,
    },
    /// Create the analysis and artwork for one song
    Generate {
        /// Genius song ID
        song_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config =
        Config::new(cli.genius_token, cli.openai_api_key).with_openai_url(cli.openai_url);
    config.text_model = cli.text_model;
    config.image_model = cli.image_model;
    config.validate()?;

    let lyricart = LyricArt::new(config)?;

    match cli.command {
        Commands::Serve { bind } => {
            let app = build_router(AppState::new(lyricart));
            let listener = tokio::net::TcpListener::bind(&bind).await?;
            info!("lyricart v{} listening on http://{}", env!("CARGO_PKG_VERSION"), bind);
            axum::serve(listener, app).await?;
        }
        Commands::Search { query } => {
            println!("Searching for '{}'...", query);
            let songs = lyricart.search(&query).await?;
            if songs.is_empty() {
                println!("No songs found.");
            }
            for (i, song) in songs.iter().enumerate() {
                println!("{}. {} - {} (ID: {})", i + 1, song.artist, song.title, song.id);
            }
        }
        Commands::Generate { song_id } => {
            println!("Generating artwork for song {}...", song_id);
            let piece = lyricart.create(&song_id).await?;
            println!(
                "{} - {} ({}, {})",
                piece.song.artist,
                piece.song.title,
                piece.song.album_or_unknown(),
                piece.song.release_date_or_unknown()
            );
            println!();
            println!("{}", piece.analysis);
            println!();
            match piece.artwork.image_url() {
                Some(url) => println!("✅ Artwork: {}", url),
                None => println!(
                    "❌ Artwork failed: {}",
                    piece.artwork.failure().map(|r| r.code()).unwrap_or("unknown")
                ),
            }
        }
    }

    Ok(())
}
