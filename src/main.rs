//! `product-browser` command-line entrypoint.

use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use product_browser::{
    CardGrid, CategoryFilter, Config, Favorites, FileCatalog, FileStore, HttpCatalog, PageView,
    ProductId, ProductPage, SortOrder,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vgrid::ViewportSize;
use vgrid_adapter::ResizeEvents;

#[derive(Parser)]
#[command(name = "product-browser", about = "Browse a product catalog", version)]
struct Cli {
    /// Catalog endpoint returning `{"products": [...]}`.
    #[arg(long, env = "PRODUCT_BROWSER_CATALOG_URL")]
    url: Option<String>,

    /// Read the catalog from a JSON file instead of the network (takes precedence over `--url`).
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    /// Where favorites are stored.
    #[arg(long, env = "PRODUCT_BROWSER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[arg(long, env = "PRODUCT_BROWSER_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, filter and print the visible window of the product grid.
    Browse {
        /// Category name, or "all".
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Minimum rating, e.g. 4.5, 4, 3.5 or 3.
        #[arg(short = 'r', long)]
        min_rating: Option<f64>,
        #[arg(short, long, value_enum, default_value_t = SortOrder::None)]
        sort: SortOrder,
        #[arg(long)]
        favorites_only: bool,
        /// Simulated window width in pixels.
        #[arg(long, default_value_t = 1280)]
        width: u32,
        /// Simulated window height in pixels.
        #[arg(long, default_value_t = 900)]
        height: u32,
        /// Vertical scroll offset in pixels.
        #[arg(long, default_value_t = 0)]
        scroll: u64,
        /// Scroll so that the product at this position (after filtering) is at the top.
        #[arg(long, conflicts_with = "scroll")]
        scroll_to: Option<usize>,
        /// Print the grid frame as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the catalog's categories.
    Categories,
    /// Manage favorites.
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    List,
    Toggle { id: ProductId },
    Clear,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_browser=info,vgrid=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(url) = cli.url.clone() {
        config.catalog_url = url;
    }
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
    }

    let favorites = Favorites::load(FileStore::new(&config.data_dir))
        .with_context(|| format!("reading favorites from {}", config.data_dir.display()))?;
    let mut page = ProductPage::new(favorites);

    match cli.command {
        Commands::Favorites { action } => run_favorites(&mut page, action),
        Commands::Categories => {
            load(&mut page, cli.catalog_file.as_deref(), &config).await?;
            for category in page.categories() {
                println!("{category}");
            }
            Ok(())
        }
        Commands::Browse {
            category,
            min_rating,
            sort,
            favorites_only,
            width,
            height,
            scroll,
            scroll_to,
            json,
        } => {
            let query = page.query_mut();
            query.category = CategoryFilter::parse(&category);
            query.set_min_rating(min_rating)?;
            query.sort = sort;
            query.favorites_only = favorites_only;

            load(&mut page, cli.catalog_file.as_deref(), &config).await?;
            let view = page.view();
            let PageView::Products(items) = &view else {
                println!("{view}");
                return Ok(());
            };

            let window = Rc::new(ResizeEvents::new(ViewportSize::new(width, height)));
            let mut grid = CardGrid::mount(&window);
            grid.sync(items, |id| page.is_favorite(id));
            match scroll_to {
                Some(index) => {
                    grid.scroll_to_product(index);
                }
                None => {
                    grid.scroll_to(scroll);
                }
            }
            grid.sync(items, |id| page.is_favorite(id));

            let frame = grid.frame();
            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            } else {
                println!("{}  |  Favorites: {}", view, page.favorites().len());
                println!(
                    "{} columns x {} rows, window rows {:?}, scroll {}",
                    frame.columns, frame.rows, frame.window.rows, frame.scroll_top
                );
                for placed in frame.cells.iter() {
                    if let Some(card) = &placed.card {
                        println!("({:>3},{}) {}", placed.cell.row, placed.cell.column, card);
                    }
                }
            }
            grid.unmount();
            Ok(())
        }
    }
}

async fn load(
    page: &mut ProductPage<FileStore>,
    catalog_file: Option<&Path>,
    config: &Config,
) -> anyhow::Result<()> {
    match catalog_file {
        Some(path) => page.load_from(&FileCatalog::new(path)).await,
        None => {
            let catalog = HttpCatalog::new(&config.catalog_url, config.request_timeout)?;
            page.load_from(&catalog).await;
        }
    }
    if let Some(message) = page.error() {
        anyhow::bail!("{message}");
    }
    tracing::info!(products = page.products().len(), "catalog ready");
    Ok(())
}

fn run_favorites(
    page: &mut ProductPage<FileStore>,
    action: FavoritesAction,
) -> anyhow::Result<()> {
    match action {
        FavoritesAction::List => {
            for id in page.favorites().iter() {
                println!("{id}");
            }
            println!("Favorites: {}", page.favorites().len());
        }
        FavoritesAction::Toggle { id } => {
            let label = id.to_string();
            if page.toggle_favorite(id)? {
                println!("♥ {label}");
            } else {
                println!("♡ {label}");
            }
        }
        FavoritesAction::Clear => {
            page.clear_favorites()?;
            println!("Favorites cleared");
        }
    }
    Ok(())
}
