use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use learnings_config::Config;
use learnings_engine::{
    ContentNode, Page, PostStore, Route, SiteInfo, build_site,
    parse_content,
    parsing::inline::plain_text,
    render::{document::NOT_FOUND_MESSAGE, render_nodes, render_page},
    resolve,
};
use std::{fs, path::PathBuf, process};

#[derive(Debug, Parser)]
#[command(name = "learnings", version, about = "List, render and build learnings pages")]
struct Cli {
    /// Config file to use instead of ~/.config/learnings/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// One line per post, newest first
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Print a single post
    Show {
        slug: String,
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Format an arbitrary file and print the HTML fragment
    Render { file: PathBuf },
    /// Write the static site
    Build {
        /// Output directory; defaults to the configured output_path
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
    Text,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file '{}' does not exist", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn list_lines(store: &PostStore<'_>, category: Option<&str>) -> Vec<String> {
    let posts = match category {
        Some(category) => store.by_category(category),
        None => store.posts(),
    };
    posts
        .into_iter()
        .map(|p| format!("{}  {:<16} {}  {}", p.date, p.category, p.slug, p.title))
        .collect()
}

/// Plain outline of a post body, one block per paragraph.
fn outline(nodes: &[ContentNode]) -> String {
    let mut blocks = vec![];
    for node in nodes {
        let block = match node {
            ContentNode::Heading { level, spans } => {
                format!("{} {}", "#".repeat(level.as_u8().into()), plain_text(spans))
            }
            ContentNode::Paragraph { spans } => plain_text(spans),
            ContentNode::BulletList { items } => items
                .iter()
                .map(|item| format!("- {}", plain_text(item)))
                .collect::<Vec<_>>()
                .join("\n"),
            ContentNode::CodeBlock { language, text } => format!(
                "```{}\n{}\n```",
                language.as_deref().unwrap_or_default(),
                text
            ),
            ContentNode::Blockquote { lines } | ContentNode::Note { lines } => lines
                .iter()
                .map(|line| format!("> {}", plain_text(line)))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => continue,
        };
        blocks.push(block);
    }
    blocks.join("\n\n")
}

/// Renders a post, or `None` when no post has that slug.
fn show(
    store: &PostStore<'_>,
    site: &SiteInfo,
    slug: &str,
    format: Format,
) -> Result<Option<String>> {
    let page = resolve(store, site, &Route::Post(slug.to_string()));
    let Page::Post(post) = &page else {
        return Ok(None);
    };

    let out = match format {
        Format::Html => render_page(&page),
        Format::Json => serde_json::to_string_pretty(&post.nodes)?,
        Format::Text => format!(
            "{}\n{} · {} · {}\n\n{}",
            post.post.title,
            post.post.display_date(),
            post.post.read_time,
            post.post.category,
            outline(&post.nodes)
        ),
    };
    Ok(Some(out))
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let site = config.site_info();
    let store = PostStore::builtin();

    match cli.command {
        Command::List { category } => {
            for line in list_lines(&store, category.as_deref()) {
                println!("{line}");
            }
        }
        Command::Show { slug, format } => match show(&store, &site, &slug, format)? {
            Some(out) => println!("{out}"),
            None => {
                eprintln!("{NOT_FOUND_MESSAGE}");
                process::exit(1);
            }
        },
        Command::Render { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            print!("{}", render_nodes(&parse_content(&text)));
        }
        Command::Build { out } => {
            let out_dir = out.unwrap_or(config.output_path);
            let written = build_site(&out_dir, &store, &site)?;
            for path in written {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
