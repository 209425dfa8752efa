use chrono::Local;
use clap::{Parser, Subcommand};
use lamp_core::catalog::{self, Testament};
use lamp_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lamp")]
#[command(about = "Daily Bible reading and memorization tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Never contact the remote verse service
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's reading and memorization verse (default)
    Today,

    /// Look up the text of a verse or verse range
    Verse {
        book: String,
        chapter: u32,
        start: u32,
        end: Option<u32>,
    },

    /// List all books in canonical order
    Books,

    /// Show how many chapters a book has
    Chapters { book: String },

    /// Manage the daily reading list
    Reading {
        #[command(subcommand)]
        action: ReadingAction,
    },

    /// Manage the memorization rotation
    Memorize {
        #[command(subcommand)]
        action: MemorizeAction,
    },
}

#[derive(Subcommand)]
enum ReadingAction {
    /// List reading passages
    List,
    /// Add a chapter to the reading list
    Add { book: String, chapter: u32 },
    /// Remove the passage at position N (as shown by `list`)
    Remove { position: usize },
}

#[derive(Subcommand)]
enum MemorizeAction {
    /// List memorization verses
    List,
    /// Add a verse to the rotation
    Add {
        book: String,
        chapter: u32,
        start: u32,
        /// Last verse of a range
        #[arg(long)]
        end: Option<u32>,
        /// Text to show instead of the looked-up verse
        #[arg(long)]
        text: Option<String>,
    },
    /// Remove the verse at position N (as shown by `list`)
    Remove { position: usize },
    /// Replace the custom text of the verse at position N
    SetText { position: usize, text: String },
}

fn main() -> Result<()> {
    // Initialize logging
    lamp_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if cli.offline {
        config.lookup.enabled = false;
    }
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);

    let errors = catalog::validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Catalog("Invalid catalog".into()));
    }

    match cli.command.unwrap_or(Commands::Today) {
        Commands::Today => cmd_today(&data_dir, &config),
        Commands::Verse {
            book,
            chapter,
            start,
            end,
        } => cmd_verse(&data_dir, &config, &book, chapter, start, end),
        Commands::Books => {
            cmd_books();
            Ok(())
        }
        Commands::Chapters { book } => cmd_chapters(&book),
        Commands::Reading { action } => cmd_reading(&data_dir, action),
        Commands::Memorize { action } => cmd_memorize(&data_dir, action),
    }
}

fn open_resolver(data_dir: &std::path::Path, config: &Config) -> VerseResolver<Box<dyn VerseSource>> {
    VerseResolver::new(
        VerseCache::in_dir(data_dir),
        lamp_core::source::from_config(&config.lookup),
    )
}

fn cmd_today(data_dir: &std::path::Path, config: &Config) -> Result<()> {
    let plan = PlanStore::in_dir(data_dir);
    let mut resolver = open_resolver(data_dir, config);
    let now = Local::now();

    let devotion = compose_devotion(&plan, &mut resolver, now.date_naive());

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}  (day {})", now.format("%Y年%m月%d日"), devotion.day_of_year);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Today's reading:");
    if devotion.reading_passages.is_empty() {
        println!("    (none - add one with `lamp reading add`)");
    }
    for passage in &devotion.reading_passages {
        println!("    → {}", passage);
    }
    println!();
    println!("  Memorization verse:");
    match devotion.memorization {
        MemorizationOfDay::Unset => {
            println!("    未设置背诵经文");
            println!("    请添加经文进行背诵: `lamp memorize add <book> <chapter> <verse>`");
        }
        MemorizationOfDay::Verse {
            index,
            reference,
            text,
            has_custom_text,
        } => {
            let marker = if has_custom_text { " (custom text)" } else { "" };
            println!("    #{} {}{}", index + 1, reference, marker);
            println!();
            println!("    {}", text);
        }
    }
    println!();

    Ok(())
}

fn cmd_verse(
    data_dir: &std::path::Path,
    config: &Config,
    book: &str,
    chapter: u32,
    start: u32,
    end: Option<u32>,
) -> Result<()> {
    if !catalog::is_known_book(book) {
        eprintln!("Unknown book: {}", book);
        return Err(Error::Catalog(format!("unknown book '{}'", book)));
    }

    let mut resolver = open_resolver(data_dir, config);
    let text = resolver.resolve(book, chapter, start, end);
    println!("{}", Reference::verses(book, chapter, start, end));
    println!("{}", text);
    Ok(())
}

fn cmd_books() {
    for (title, testament) in [("旧约", Testament::Old), ("新约", Testament::New)] {
        println!("{}:", title);
        for book in catalog::books_in(testament) {
            println!("  {} ({})", book, catalog::chapter_count(book));
        }
    }
}

fn cmd_chapters(book: &str) -> Result<()> {
    let count = catalog::chapter_count(book);
    if count == 0 {
        eprintln!("Unknown book: {}", book);
        return Err(Error::Catalog(format!("unknown book '{}'", book)));
    }
    println!("{} has {} chapters", book, count);
    Ok(())
}

fn cmd_reading(data_dir: &std::path::Path, action: ReadingAction) -> Result<()> {
    let mut plan = PlanStore::in_dir(data_dir);

    match action {
        ReadingAction::List => {
            for (position, passage) in plan.daily_reading_passages().iter().enumerate() {
                println!("{:>3}. {}", position + 1, passage);
            }
        }
        ReadingAction::Add { book, chapter } => {
            if !plan.add_reading_passage(&book, chapter)? {
                return rejected("无法添加阅读章节，可能已存在或是无效章节");
            }
            println!("✓ Added {} {} to the reading list", book, chapter);
        }
        ReadingAction::Remove { position } => {
            let removed = match to_index(position) {
                Some(index) => plan.remove_reading_passage(index)?,
                None => false,
            };
            if !removed {
                return rejected("无法删除所选章节");
            }
            println!("✓ Removed reading passage #{}", position);
        }
    }

    Ok(())
}

fn cmd_memorize(data_dir: &std::path::Path, action: MemorizeAction) -> Result<()> {
    let mut plan = PlanStore::in_dir(data_dir);

    match action {
        MemorizeAction::List => {
            for (position, verse) in plan.memorization_verses().iter().enumerate() {
                let marker = if verse.custom_text().is_some() { " *" } else { "" };
                println!("{:>3}. {}{}", position + 1, verse.reference(), marker);
            }
        }
        MemorizeAction::Add {
            book,
            chapter,
            start,
            end,
            text,
        } => {
            if !plan.add_memorization_verse(&book, chapter, start, end, text)? {
                return rejected("无法添加背诵经文，可能是无效章节或经节");
            }
            println!(
                "✓ Added {} to the memorization rotation",
                Reference::verses(book, chapter, start, end)
            );
        }
        MemorizeAction::Remove { position } => {
            let removed = match to_index(position) {
                Some(index) => plan.remove_memorization_verse(index)?,
                None => false,
            };
            if !removed {
                return rejected("无法删除所选经文");
            }
            println!("✓ Removed memorization verse #{}", position);
        }
        MemorizeAction::SetText { position, text } => {
            let updated = match to_index(position) {
                Some(index) => plan.update_verse_text(index, text)?,
                None => false,
            };
            if !updated {
                return rejected("无法更新经文内容");
            }
            println!("✓ Updated text of memorization verse #{}", position);
        }
    }

    Ok(())
}

/// Positions shown to the user start at 1
fn to_index(position: usize) -> Option<usize> {
    position.checked_sub(1)
}

fn rejected(message: &str) -> Result<()> {
    eprintln!("{}", message);
    Err(Error::Plan(message.to_string()))
}
