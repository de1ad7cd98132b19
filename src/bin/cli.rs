//! Biblio CLI
//!
//! Runs one command against a freshly opened in-memory library.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use biblio::catalog::{BookField, UserField};
use biblio::{Config, Library};

/// Biblio CLI
#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(about = "Library management on hand-rolled linear data structures")]
#[command(version)]
struct Args {
    /// Initial capacity of the user registry
    #[arg(long, default_value = "10")]
    user_capacity: usize,

    /// Loan period in days
    #[arg(long, default_value = "14")]
    loan_days: u32,

    /// Start with an empty catalog and registry
    #[arg(long)]
    no_seed: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show library statistics
    Stats,

    /// List or search books
    Books {
        /// Field to search
        #[arg(short, long, value_enum, default_value = "title")]
        field: BookArg,

        /// Substring to look for (empty lists everything)
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// List or search users
    Users {
        /// Field to search
        #[arg(short, long, value_enum, default_value = "name")]
        field: UserArg,

        /// Substring to look for (empty lists everything)
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Check a book out and show the loan
    Checkout {
        /// ISBN of the book
        isbn: String,

        /// Id of the borrowing user
        user_id: String,
    },

    /// Show the most recent loans
    History {
        /// Maximum entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Run a scripted session: loans, queued requests, a return
    Demo,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BookArg {
    Title,
    Author,
    Category,
    Isbn,
}

impl From<BookArg> for BookField {
    fn from(arg: BookArg) -> Self {
        match arg {
            BookArg::Title => BookField::Title,
            BookArg::Author => BookField::Author,
            BookArg::Category => BookField::Category,
            BookArg::Isbn => BookField::Isbn,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum UserArg {
    Name,
    Email,
    Id,
}

impl From<UserArg> for UserField {
    fn from(arg: UserArg) -> Self {
        match arg {
            UserArg::Name => UserField::Name,
            UserArg::Email => UserField::Email,
            UserArg::Id => UserField::Id,
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,biblio=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Biblio v{}", biblio::VERSION);

    // Build config from args
    let config = Config::builder()
        .user_capacity(args.user_capacity)
        .loan_period_days(args.loan_days)
        .seed_sample_data(!args.no_seed)
        .build();

    let mut library = match Library::open(config) {
        Ok(library) => library,
        Err(e) => {
            tracing::error!("Failed to open library: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut library, args.command, args.json) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(library: &mut Library, command: Commands, json: bool) -> biblio::Result<()> {
    match command {
        Commands::Stats => emit(json, &library.stats(), |stats| {
            println!("Total books ........... {}", stats.total_books);
            println!("Available books ....... {}", stats.available_books);
            println!("Loaned books .......... {}", stats.loaned_books);
            println!("Total users ........... {}", stats.total_users);
            println!("Active loans .......... {}", stats.active_loans);
            println!("Pending requests ...... {}", stats.pending_requests);
        }),
        Commands::Books { field, query } => {
            let books = library.search_books(field.into(), &query);
            emit(json, &books, |books| print_lines(books, "No books found."))
        }
        Commands::Users { field, query } => {
            let users = library.search_users(field.into(), &query);
            emit(json, &users, |users| print_lines(users, "No users found."))
        }
        Commands::Checkout { isbn, user_id } => {
            let loan_id = library.checkout(&isbn, &user_id)?;
            let loan = library
                .active_loan(&loan_id)
                .ok_or_else(|| biblio::BiblioError::LoanNotFound(loan_id.clone()))?;
            emit(json, loan, |loan| println!("{loan}"))
        }
        Commands::History { limit } => {
            let loans = library.loan_history(limit);
            emit(json, &loans, |loans| print_lines(loans, "No loans yet."))
        }
        Commands::Demo => run_demo(library, json),
    }
}

/// Exercise every collection through the library
fn run_demo(library: &mut Library, json: bool) -> biblio::Result<()> {
    let reader = library.register_user("Ada Reader", "ada.reader@email.com", "555-000-1111")?;
    library.register_book(
        "978-0-13-110362-7",
        "The C Programming Language",
        "Kernighan & Ritchie",
        "Programming",
        1978,
    )?;

    let first = library.checkout("978-84-376-0485-5", &reader)?;
    library.checkout("978-0-13-110362-7", "U001")?;

    // Queue two requests for the same book; the second must fail
    library.submit_request("978-84-206-6764-4", "U002");
    library.submit_request("978-84-206-6764-4", "U003");
    while let Some(outcome) = library.process_next_request() {
        match &outcome.loan {
            Ok(loan_id) => tracing::info!(loan_id = %loan_id, user_id = %outcome.request.user_id, "request granted"),
            Err(e) => tracing::info!(user_id = %outcome.request.user_id, error = %e, "request refused"),
        }
    }

    library.return_loan(&first)?;

    if json {
        print_json(&library.stats());
        print_json(&library.loan_history(None));
        return Ok(());
    }

    println!("Recent loans (most recent first):");
    print_lines(&library.loan_history(None), "No loans yet.");
    println!();
    println!("Active loans:");
    print_lines(&library.active_loans(), "No active loans.");
    println!();
    run(library, Commands::Stats, false)
}

// =============================================================================
// Output Helpers
// =============================================================================

fn emit<T, F>(json: bool, value: &T, text: F) -> biblio::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    if json {
        print_json(value);
    } else {
        text(value);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!("Failed to encode JSON: {}", e),
    }
}

fn print_lines<T: std::fmt::Display>(items: &[&T], empty: &str) {
    if items.is_empty() {
        println!("{empty}");
        return;
    }
    for (i, item) in items.iter().enumerate() {
        println!("{:2}. {}", i + 1, item);
    }
}
