use blog_assist::{
    categories::StaticCategories,
    server::{self, AppState},
    text::{measure, slugify},
    AiContentService, AssistConfig, Category, ContentDraft,
};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blog-assist", about = "Drafting assistant for blog posts")]
struct Cli {
    /// Path to the TOML config (defaults to $BLOG_ASSIST_CONFIG or config/assist.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Suggest titles for a post body
    Titles(BodyArgs),
    /// Suggest SEO keywords
    Keywords(DraftArgs),
    /// Write a meta description
    Meta(DraftArgs),
    /// Pick matching categories
    Categories(CategoryArgs),
    /// Score readability and suggest improvements
    Optimize(BodyArgs),
    /// Word count and reading time
    Stats(BodyArgs),
    /// Print the URL slug for a title or name
    Slug { input: String },
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Write the default config file
    InitConfig {
        #[arg(long, default_value = "config/assist.toml")]
        path: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct BodyArgs {
    /// Post body; read from stdin when omitted
    #[arg(long)]
    text: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct DraftArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    text: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct CategoryArgs {
    #[command(flatten)]
    draft: DraftArgs,
    /// Candidate category; repeatable. Defaults to the configured categories.
    #[arg(long = "category")]
    categories: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let (config, _) = AssistConfig::load(cli.config).map_err(|err| err.to_string())?;
    let service = AiContentService::from_config(&config.ai).map_err(|err| err.to_string())?;

    match cli.command {
        Command::Titles(args) => {
            let draft = ContentDraft::new("", read_text(args.text)?);
            print_lines(&service.generate_title_suggestions(&draft.body).await);
        }
        Command::Keywords(args) => {
            let draft = args.into_draft()?;
            print_lines(&service.generate_seo_keywords(&draft.title, &draft.body).await);
        }
        Command::Meta(args) => {
            let draft = args.into_draft()?;
            println!(
                "{}",
                service
                    .generate_meta_description(&draft.title, &draft.body)
                    .await
            );
        }
        Command::Categories(args) => {
            let draft = args.draft.into_draft()?;
            let existing: Vec<Category> = if args.categories.is_empty() {
                StaticCategories::from_config(&config.categories).into_categories()
            } else {
                args.categories.into_iter().map(Category::new).collect()
            };
            let picked = service
                .suggest_categories(&draft.title, &draft.body, &existing)
                .await;
            if picked.is_empty() {
                println!("No matching categories.");
            }
            print_lines(&picked);
        }
        Command::Optimize(args) => {
            let text = read_text(args.text)?;
            let report = service.optimize_content(&text).await;
            println!("Readability score: {}/10", report.readability_score);
            print_section("Suggestions", &report.suggestions);
            print_section("Improvements", &report.improvements);
        }
        Command::Stats(args) => {
            let metrics = measure(&read_text(args.text)?);
            println!("Words: {}", metrics.word_count);
            println!("Reading time: {} min", metrics.reading_time);
        }
        Command::Slug { input } => println!("{}", slugify(&input)),
        Command::Serve(args) => {
            let host = args.host.unwrap_or(config.server.host.clone());
            let port = args.port.unwrap_or(config.server.port);
            let state = AppState::new(service, StaticCategories::from_config(&config.categories));
            server::serve(state, &host, port).await?;
        }
        Command::InitConfig { path } => {
            AssistConfig::default()
                .write(&path)
                .map_err(|err| err.to_string())?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

impl DraftArgs {
    fn into_draft(self) -> Result<ContentDraft, String> {
        if self.title.trim().is_empty() {
            return Err("--title must not be empty".to_string());
        }
        Ok(ContentDraft::new(self.title.trim(), read_text(self.text)?))
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn print_section(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", heading);
    for item in items {
        println!("- {}", item);
    }
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing post text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
