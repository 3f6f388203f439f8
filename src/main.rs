use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payables::application::service::TransactionService;
use payables::config::{StorageConfig, open_store};
use payables::domain::filter::TransactionFilter;
use payables::domain::money::Amount;
use payables::domain::transaction::{TransactionDraft, TransactionId, TransactionStatus};
use payables::error::PayablesError;
use payables::interfaces::csv::draft_reader::DraftReader;
use payables::interfaces::csv::transaction_writer::TransactionWriter;
use payables::telemetry;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, global = true, env = "PAYABLES_DB_PATH")]
    db_path: Option<PathBuf>,

    /// CSV of `name,date,amount` rows to create before running the command
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Log filter directive; `RUST_LOG` takes precedence
    #[arg(long, global = true, default_value = telemetry::DEFAULT_DIRECTIVE)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List transactions matching the given filters
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Print JSON instead of CSV
        #[arg(long)]
        json: bool,
    },
    /// Create a pending transaction
    Create(DraftArgs),
    /// Edit name, date and amount of a pending transaction
    Update {
        id: u64,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a pending transaction
    Delete { id: u64 },
    /// Settle pending transactions, oldest first, with the given amount
    Pay { amount: Amount },
    /// Show pending and paid totals
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive name substring
    #[arg(long)]
    name: Option<String>,
    /// Exact date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// PENDING or PAID
    #[arg(long)]
    status: Option<TransactionStatus>,
}

impl From<FilterArgs> for TransactionFilter {
    fn from(args: FilterArgs) -> Self {
        Self {
            name: args.name,
            date: args.date,
            status: args.status,
        }
    }
}

#[derive(Args)]
struct DraftArgs {
    #[arg(long)]
    name: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,
    #[arg(long)]
    amount: Amount,
}

impl TryFrom<DraftArgs> for TransactionDraft {
    type Error = PayablesError;

    fn try_from(args: DraftArgs) -> Result<Self, Self::Error> {
        TransactionDraft::new(args.name, args.date, args.amount).validated()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(&cli.log_level);

    let store = open_store(&StorageConfig::from_db_path(cli.db_path)).into_diagnostic()?;
    let service = TransactionService::new(store);

    if let Some(seed) = cli.seed {
        seed_transactions(&service, &seed).await?;
    }

    let mut writer = TransactionWriter::new(io::stdout());

    match cli.command {
        Command::List { filter, json } => {
            let transactions = service
                .find_transactions(&filter.into())
                .await
                .into_diagnostic()?;
            if json {
                serde_json::to_writer_pretty(io::stdout(), &transactions)
                    .into_diagnostic()?;
                println!();
            } else {
                writer.write_transactions(&transactions).into_diagnostic()?;
            }
        }
        Command::Create(draft) => {
            let draft = TransactionDraft::try_from(draft).into_diagnostic()?;
            let created = service
                .create_transaction(draft)
                .await
                .into_diagnostic()?;
            writer.write_transactions([&created]).into_diagnostic()?;
        }
        Command::Update { id, draft } => {
            let draft = TransactionDraft::try_from(draft).into_diagnostic()?;
            let updated = service
                .update_transaction(TransactionId(id), draft)
                .await
                .into_diagnostic()?;
            writer.write_transactions([&updated]).into_diagnostic()?;
        }
        Command::Delete { id } => {
            service
                .delete_transaction(TransactionId(id))
                .await
                .into_diagnostic()?;
        }
        Command::Pay { amount } => {
            let settlement = service.process_payment(amount).await.into_diagnostic()?;
            writer
                .write_transactions(&settlement.settled)
                .into_diagnostic()?;
            eprintln!("Remaining: {}", settlement.remaining);
        }
        Command::Summary { filter } => {
            let summary = service.summarize(&filter.into()).await.into_diagnostic()?;
            let mut csv_writer = csv::Writer::from_writer(io::stdout());
            csv_writer.serialize(summary).into_diagnostic()?;
            csv_writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}

/// Creates one transaction per readable row; bad rows are reported and skipped.
async fn seed_transactions(service: &TransactionService, path: &Path) -> Result<()> {
    let file = File::open(path).into_diagnostic()?;
    let reader = DraftReader::new(file);
    for draft in reader.drafts() {
        match draft {
            Ok(draft) => {
                if let Err(e) = service.create_transaction(draft).await {
                    eprintln!("Error creating transaction: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading transaction: {}", e);
            }
        }
    }
    Ok(())
}
