//! Shopfront CLI

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{Args, Parser, Subcommand};

use shopfront::{
    api::{ApiClient, HttpStorefrontApi, StorefrontApi},
    cart::CartView,
    catalog::{CatalogView, ProductQuery},
    checkout::{self, LedChoice},
    config::ClientConfig,
    geo::{GeoCache, HttpGeoSource, ProvincePicker},
    logging,
    session::{SessionHandle, SessionStore},
};

#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Storefront client", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login(LoginArgs),

    /// Clear the persisted session
    Logout,

    /// Browse the catalog
    Products(ProductsCommand),

    /// List product categories
    Categories,

    /// Inspect and mutate the cart
    Cart(CartCommand),

    /// Place an order from selected cart lines
    Checkout(CheckoutArgs),

    /// Browse the geographic reference data
    Geo(GeoCommand),
}

#[derive(Debug, Args)]
struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "SHOPFRONT_PASSWORD")]
    password: String,
}

#[derive(Debug, Args)]
struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products
    List {
        /// Free-text search term
        #[arg(long)]
        search: Option<String>,

        /// Restrict to one category
        #[arg(long)]
        category: Option<i64>,

        /// Page number (one-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Debug, Args)]
struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart with line totals
    Show,

    /// Set the quantity of one line (0 removes it)
    SetQuantity {
        /// Cart line id
        #[arg(long)]
        line: i64,

        /// New quantity
        #[arg(long)]
        quantity: u32,
    },

    /// Remove one line (asks for confirmation)
    Remove {
        /// Cart line id
        #[arg(long)]
        line: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Cart line ids to order (comma separated); all lines when omitted
    #[arg(long, value_delimiter = ',')]
    lines: Vec<i64>,

    /// Shipping address id; the pre-selected default when omitted
    #[arg(long)]
    address: Option<i64>,

    /// Gift-box accessory
    #[arg(long)]
    accessory: String,

    /// Include an LED light in the gift box
    #[arg(long, value_enum)]
    led: LedArg,

    /// Message printed on the card
    #[arg(long)]
    card: String,

    /// Wish note accompanying the gift
    #[arg(long)]
    wish: String,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LedArg {
    /// "Có" — include the LED
    Co,
    /// "Không" — no LED
    Khong,
}

impl From<LedArg> for LedChoice {
    fn from(led: LedArg) -> Self {
        match led {
            LedArg::Co => LedChoice::Co,
            LedArg::Khong => LedChoice::Khong,
        }
    }
}

#[derive(Debug, Args)]
struct GeoCommand {
    #[command(subcommand)]
    command: GeoSubcommand,
}

#[derive(Debug, Subcommand)]
enum GeoSubcommand {
    /// List provinces
    Provinces,

    /// List districts of one province
    Districts {
        /// Province code
        #[arg(long)]
        province: String,
    },
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init(&cli.config) {
        eprintln!("{error}");
        process::exit(1);
    }

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let store = SessionStore::new(&cli.config.session.session_path);
    let session = SessionHandle::from_state(
        store
            .load()
            .map_err(|error| format!("failed to load session: {error}"))?,
    );

    let client = ApiClient::new(&cli.config.api.base_url, session.clone());
    let api = HttpStorefrontApi::new(client);

    match cli.command {
        Commands::Login(args) => login(&api, &session, &store, args).await,
        Commands::Logout => logout(&session, &store),
        Commands::Products(ProductsCommand { command }) => products(&api, command).await,
        Commands::Categories => categories(&api).await,
        Commands::Cart(CartCommand { command }) => cart(&api, &session, command).await,
        Commands::Checkout(args) => place_order(&api, &session, args).await,
        Commands::Geo(GeoCommand { command }) => geo(&cli.config, command).await,
    }
}

async fn login(
    api: &HttpStorefrontApi,
    session: &SessionHandle,
    store: &SessionStore,
    args: LoginArgs,
) -> Result<(), String> {
    let state = api
        .login(&args.email, &args.password)
        .await
        .map_err(|error| format!("login failed: {error}"))?;

    store
        .save(&state)
        .map_err(|error| format!("failed to persist session: {error}"))?;
    session.login(state);

    let name = session.identity().map(|i| i.display_name).unwrap_or_default();
    println!("signed in as {name}");

    Ok(())
}

fn logout(session: &SessionHandle, store: &SessionStore) -> Result<(), String> {
    session.logout();
    store
        .clear()
        .map_err(|error| format!("failed to clear session: {error}"))?;

    println!("signed out");

    Ok(())
}

async fn products(api: &HttpStorefrontApi, command: ProductsSubcommand) -> Result<(), String> {
    match command {
        ProductsSubcommand::List {
            search,
            category,
            page,
        } => {
            let query = ProductQuery {
                search,
                category_id: category,
                page,
                ..ProductQuery::default()
            };

            let listing = CatalogView::search(api, query).await;

            for product in &listing.items {
                println!(
                    "{:>8}  {:<40} {:>12}đ",
                    product.product_id, product.name, product.price
                );
            }
            println!(
                "page {}/{} ({} products)",
                listing.page,
                listing.total.div_ceil(u64::from(listing.page_size.max(1))),
                listing.total
            );

            Ok(())
        }
    }
}

async fn categories(api: &HttpStorefrontApi) -> Result<(), String> {
    for category in CatalogView::categories(api).await {
        println!("{:>6}  {}", category.category_id, category.name);
    }

    Ok(())
}

async fn cart(
    api: &HttpStorefrontApi,
    session: &SessionHandle,
    command: CartSubcommand,
) -> Result<(), String> {
    let mut view = CartView::load(api, session)
        .await
        .map_err(|error| error.to_string())?;

    match command {
        CartSubcommand::Show => {
            show_cart(&view);
            Ok(())
        }
        CartSubcommand::SetQuantity { line, quantity } => {
            view.set_quantity(api, line, quantity)
                .await
                .map_err(|error| error.to_string())?;

            show_cart(&view);
            Ok(())
        }
        CartSubcommand::Remove { line, yes } => {
            let name = view
                .lines()
                .iter()
                .find(|l| l.line_id == line)
                .map(|l| l.product_name.clone())
                .ok_or_else(|| format!("cart line {line} not found"))?;

            if !yes && !confirm(&format!("Remove \"{name}\" from the cart?"))? {
                println!("kept \"{name}\"");
                return Ok(());
            }

            view.remove(api, line)
                .await
                .map_err(|error| error.to_string())?;

            show_cart(&view);
            Ok(())
        }
    }
}

async fn place_order(
    api: &HttpStorefrontApi,
    session: &SessionHandle,
    args: CheckoutArgs,
) -> Result<(), String> {
    let mut view = CartView::load(api, session)
        .await
        .map_err(|error| error.to_string())?;

    if args.lines.is_empty() {
        view.toggle_select_all();
    } else {
        for line in &args.lines {
            view.toggle_select(*line)
                .map_err(|error| error.to_string())?;
        }
    }

    if args.address.is_some() {
        view.choose_address(args.address);
    }

    view.gift_note.accessory = args.accessory;
    view.gift_note.led = Some(args.led.into());
    view.gift_note.card_message = args.card;
    view.gift_note.wish = args.wish;

    println!("order total: {}đ", view.selected_total());

    let confirmation = checkout::place_order(api, &mut view)
        .await
        .map_err(|error| error.to_string())?;

    println!("order placed: {}", confirmation.order_code);

    Ok(())
}

async fn geo(config: &ClientConfig, command: GeoSubcommand) -> Result<(), String> {
    let source = HttpGeoSource::new(&config.geo.provinces_url, &config.geo.districts_url);
    let cache = GeoCache::new(&config.geo.cache_path);
    let mut picker = ProvincePicker::new(cache.provinces(&source).await);

    match command {
        GeoSubcommand::Provinces => {
            for province in picker.provinces() {
                println!("{:>4}  {}", province.code, province.name);
            }
            Ok(())
        }
        GeoSubcommand::Districts { province } => {
            if !picker.select_province(&province) {
                return Err(format!("unknown province code {province}"));
            }

            for district in picker.districts() {
                println!("{:>4}  {}", district.code, district.name);
            }
            Ok(())
        }
    }
}

fn show_cart(view: &CartView) {
    for line in view.lines() {
        println!(
            "{:>8}  {:<40} {:>3} × {:>10}đ = {:>12}đ",
            line.line_id,
            line.product_name,
            line.quantity,
            line.unit_price,
            line.line_total()
        );
    }

    println!("selected total: {}đ", view.selected_total());
}

fn confirm(prompt: &str) -> Result<bool, String> {
    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .map_err(|error| format!("stdout error: {error}"))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|error| format!("stdin error: {error}"))?;

    Ok(matches!(answer.trim(), "y" | "Y"))
}
