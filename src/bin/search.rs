use advocate_directory::adapters::source::source_from_location;
use advocate_directory::config::toml_config::DEFAULT_DATA_SOURCE;
use advocate_directory::utils::format::{describe_search, format_phone_number};
use advocate_directory::utils::logger;
use advocate_directory::{Directory, SearchPage, SearchRequest};
use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "advocate-search")]
#[command(about = "Run one directory search from the command line")]
struct Args {
    /// Dataset location: local JSON/CSV file or http(s) URL
    #[arg(long, default_value = DEFAULT_DATA_SOURCE)]
    data: String,

    /// Dataset format (json or csv)
    #[arg(long)]
    format: Option<String>,

    /// Free text matched against names, city, degree, specialties and years
    #[arg(short, long)]
    term: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    degree: Option<String>,

    /// Required specialty; repeat for several (all must match)
    #[arg(short, long = "specialty")]
    specialties: Vec<String>,

    /// emerging (0-3), established (4-7) or expert (8+)
    #[arg(short, long)]
    experience: Option<String>,

    #[arg(long)]
    page: Option<i64>,

    #[arg(long)]
    limit: Option<i64>,

    /// Print the API response body instead of a table
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn to_request(&self) -> SearchRequest {
        SearchRequest {
            search_term: self.term.clone(),
            page: self.page,
            limit: self.limit,
            specialties: (!self.specialties.is_empty()).then(|| self.specialties.clone()),
            city: self.city.clone(),
            degree: self.degree.clone(),
            experience_level: self.experience.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose.then_some("debug"));

    let source = source_from_location(&args.data, args.format.as_deref())
        .with_context(|| format!("Invalid data source '{}'", args.data))?;
    let directory = Directory::load(source.as_ref())
        .await
        .with_context(|| format!("Failed to load advocates from {}", source.describe()))?;

    let query = args.to_request().normalize();
    let page = directory.search(&query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{}", describe_search(&query));
    print_table(&page);
    match page.pagination.showing_range() {
        Some((start, end)) => println!(
            "Showing {} to {} of {} results (page {} of {})",
            start, end, page.pagination.total_count, page.pagination.current_page, page.pagination.total_pages
        ),
        None => println!("No advocates found"),
    }

    Ok(())
}

fn print_table(page: &SearchPage<'_>) {
    if page.data.is_empty() {
        return;
    }

    println!(
        "{:<24} {:<16} {:<6} {:>5}  {:<14}  Specialties",
        "Name", "City", "Degree", "Years", "Phone"
    );
    for advocate in &page.data {
        let phone = format_phone_number(advocate.phone_number)
            .unwrap_or_else(|| advocate.phone_number.to_string());
        println!(
            "{:<24} {:<16} {:<6} {:>5}  {:<14}  {}",
            advocate.full_name(),
            advocate.city,
            advocate.degree,
            advocate.years_of_experience,
            phone,
            advocate.specialties.join(", ")
        );
    }
}
