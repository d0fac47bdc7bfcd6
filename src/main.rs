//! Catalog CLI - manage categories stored in SQLite

use clap::{Parser, Subcommand};
use serde::Serialize;

use catalog::{
    config::Config,
    data::category::CategoryRepository,
    error::AppError,
    model::{
        category::{CreateCategoryDto, UpdateCategoryDto},
        search::SearchParamsInput,
    },
    service::category::CategoryService,
    startup,
};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about = "Category catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a category
    Create {
        /// Category name
        name: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Create the category as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Show one category
    Get {
        /// Category id (UUID v4)
        id: String,
    },

    /// Search categories
    ///
    /// Values are taken as given; malformed paging, sort or filter input falls
    /// back to the defaults.
    List {
        #[arg(long)]
        page: Option<String>,
        #[arg(long)]
        limit: Option<String>,
        /// Sortable fields: id, name, created_at
        #[arg(long)]
        sort: Option<String>,
        /// asc or desc
        #[arg(long)]
        order: Option<String>,
        /// Match on the name, ignoring ASCII case
        #[arg(long)]
        filter: Option<String>,
    },

    /// Rename a category and set its description
    Update {
        /// Category id (UUID v4)
        id: String,
        /// New category name
        name: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "deactivate")]
        activate: bool,
        #[arg(long)]
        deactivate: bool,
    },

    /// Delete a category
    Delete {
        /// Category id (UUID v4)
        id: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    // No subscriber is installed yet, so config errors are only printed
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => exit_with(err.into()),
    };

    startup::init_tracing(&config);

    if let Err(err) = run(cli, &config).await {
        tracing::error!("Command failed: {}", err);
        exit_with(err);
    }
}

/// Prints the error body to stderr and exits with status 1.
fn exit_with(err: AppError) -> ! {
    let body = err.into_dto();
    match serde_json::to_string_pretty(&body) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}", body.error),
    }

    std::process::exit(1);
}

async fn run(cli: Cli, config: &Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(config).await?;
    let service = CategoryService::new(CategoryRepository::new(&db));

    match cli.command {
        Commands::Create {
            name,
            description,
            inactive,
        } => {
            let category = service
                .create(CreateCategoryDto {
                    name,
                    description,
                    is_active: Some(!inactive),
                })
                .await?;
            print_json(&category)
        }
        Commands::Get { id } => print_json(&service.get(&id).await?),
        Commands::List {
            page,
            limit,
            sort,
            order,
            filter,
        } => {
            let input = SearchParamsInput {
                page: page.map(Into::into),
                limit: limit.map(Into::into),
                sort: sort.map(Into::into),
                order: order.map(Into::into),
                filter: filter.map(Into::into),
            };
            print_json(&service.list(input).await?)
        }
        Commands::Update {
            id,
            name,
            description,
            activate,
            deactivate,
        } => {
            let is_active = match (activate, deactivate) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let category = service
                .update(UpdateCategoryDto {
                    id,
                    name,
                    description,
                    is_active,
                })
                .await?;
            print_json(&category)
        }
        Commands::Delete { id } => {
            service.delete(&id).await?;
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
