mod feed;
mod layout;
mod parser;
mod post;
mod render;
mod view;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info, warn};

use parser::date::DateFormatter;
use post::RawPost;
use view::PostView;

#[derive(Parser)]
#[command(name = "emoji_feed", about = "Emoji-sectioned news feed reader")]
struct Cli {
    /// Feed endpoint returning a JSON array of posts
    #[arg(long, env = "FEED_URL", default_value = feed::DEFAULT_FEED_URL, global = true)]
    url: String,
    /// Read the feed from a saved JSON file instead of the network
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    /// Hours east of UTC used when turning timestamps into dates
    #[arg(long, default_value_t = 9, allow_negative_numbers = true, global = true)]
    tz_offset: i32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Featured and recent post cards
    List {
        /// Only posts in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Max cards to display
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Open one post: lead text, sections, source link
    Show {
        /// Card number as printed by `list`
        index: usize,
        /// Same filter used with `list`
        #[arg(short, long)]
        category: Option<String>,
        /// Also print the cards behind the open popup
        #[arg(long)]
        feed: bool,
    },
    /// Segment every post and write the views as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Category list with post counts
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let dates = DateFormatter::from_offset_hours(cli.tz_offset)
        .with_context(|| format!("--tz-offset {} is outside -23..=23", cli.tz_offset))?;
    let posts = load_posts(&cli).await;

    let result = match cli.command {
        Commands::List { category, limit } => {
            let mut posts = layout::filter_by_category(posts, category.as_deref());
            if let Some(n) = limit {
                posts.truncate(n);
            }
            let feed_layout = layout::FeedLayout::new(&posts);
            print!(
                "{}",
                render::render_feed(&feed_layout, &dates, &layout::PopupState::default())
            );
            Ok(())
        }
        Commands::Show { index, category, feed } => {
            let posts = layout::filter_by_category(posts, category.as_deref());
            if posts.is_empty() {
                println!("{}", render::EMPTY_FEED);
                return Ok(());
            }
            let post = posts
                .get(index)
                .with_context(|| format!("No post #{} ({} posts in feed)", index, posts.len()))?;

            let mut popup = layout::PopupState::default();
            popup.open(index);
            let view = parser::process_post(post, &dates);
            print!("{}", render::render_popup(&view));
            if feed {
                let feed_layout = layout::FeedLayout::new(&posts);
                print!("\n{}", render::render_feed(&feed_layout, &dates, &popup));
            }
            popup.close();
            debug!("Closed popup #{}", index);
            Ok(())
        }
        Commands::Export { output } => {
            let views = compose_all(&posts, &dates);
            let json = serde_json::to_string_pretty(&views)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote {} views to {}", views.len(), path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Commands::Categories => {
            if posts.is_empty() {
                println!("{}", render::EMPTY_FEED);
                return Ok(());
            }
            let (counts, other) = layout::category_counts(&posts);
            for (category, n) in counts {
                println!("{:<10} {:>4}", category, n);
            }
            if other > 0 {
                println!("{:<10} {:>4}", "(other)", other);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

/// Any fetch or decode failure degrades to an empty feed.
async fn load_posts(cli: &Cli) -> Vec<RawPost> {
    let loaded = match &cli.file {
        Some(path) => feed::read_posts(path),
        None => feed::fetch_posts(&cli.url).await,
    };
    loaded.unwrap_or_else(|e| {
        warn!("Could not load feed: {:#}", e);
        Vec::new()
    })
}

fn compose_all(posts: &[RawPost], dates: &DateFormatter) -> Vec<PostView> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(posts.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let mut views = Vec::with_capacity(posts.len());
    for chunk in posts.chunks(500) {
        let composed: Vec<PostView> = chunk
            .par_iter()
            .map(|post| parser::process_post(post, dates))
            .collect();
        views.extend(composed);
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    views
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
