use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rosterdb_core::config::{expand_path, Config};
use rosterdb_core::traits::{JsonFileSource, RecordSource};
use rosterdb_core::types::{PageResult, QueryRequest, SortDirection, SortField, SortSpec, StudentRecord, ALL, DEFAULT_PAGE_SIZE};
use rosterdb_query::{page_markers, run_query, summarize};

const USAGE: &str = "Usage: rosterdb <query|summary> [--records FILE] [--search TEXT] [--department DEPT|all] \
[--year N|all] [--sort name|score] [--dir asc|desc] [--page N] [--page-size N] [--json]";

#[derive(Debug, PartialEq)]
enum Command {
    Query(QueryRequest),
    Summary,
}

#[derive(Debug, PartialEq)]
struct Invocation {
    command: Command,
    records_path: Option<PathBuf>,
    json: bool,
}

fn parse_args(args: &[String], page_size: usize) -> anyhow::Result<Invocation> {
    let (cmd, rest) = args.split_first().ok_or_else(|| anyhow!("missing command"))?;
    let mut request = QueryRequest::new().with_page_size(page_size);
    let mut sort = SortSpec::default();
    let mut records_path = None;
    let mut json = false;

    let mut it = rest.iter();
    while let Some(flag) = it.next() {
        let mut value = || it.next().cloned().ok_or_else(|| anyhow!("{} needs a value", flag));
        match flag.as_str() {
            "--records" | "-r" => records_path = Some(expand_path(value()?)),
            "--search" | "-s" => request.search_text = value()?,
            "--department" | "-d" => request.department = Some(value()?).filter(|d| d != ALL),
            "--year" | "-y" => {
                let v = value()?;
                request.year = if v == ALL { None } else { Some(v.parse().with_context(|| format!("invalid year '{}'", v))?) };
            }
            "--sort" => sort.field = value()?.parse::<SortField>()?,
            "--dir" => sort.direction = value()?.parse::<SortDirection>()?,
            "--page" | "-p" => {
                let v = value()?;
                request.page = v.parse().with_context(|| format!("invalid page '{}'", v))?;
            }
            "--page-size" => {
                let v = value()?;
                request.page_size = v.parse().with_context(|| format!("invalid page size '{}'", v))?;
            }
            "--json" => json = true,
            other => bail!("unknown flag '{}'", other),
        }
    }
    request.sort = sort;

    let command = match cmd.as_str() {
        "query" => Command::Query(request),
        "summary" => Command::Summary,
        other => bail!("unknown command '{}'", other),
    };
    Ok(Invocation { command, records_path, json })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_page(result: &PageResult) {
    let mut title = format!("Students ({}", result.total_matches);
    if result.total_records != result.total_matches {
        title.push_str(&format!(" of {}", result.total_records));
    }
    title.push(')');
    if result.total_pages > 1 {
        title.push_str(&format!(" • Page {} of {}", result.current_page, result.total_pages));
    }
    println!("{}", title);

    if result.items.is_empty() {
        if result.total_records == 0 {
            println!("No students added yet.");
        } else {
            println!("No students match your search criteria.");
        }
        return;
    }

    println!("{:<14} {:<28} {:<6} {:<5} {:>5}", "Roll Number", "Name", "Dept", "Year", "Score");
    for r in &result.items {
        print_row(r);
    }

    if result.total_pages > 1 {
        if let Some((first, last)) = result.range() {
            println!("\nShowing {} to {} of {} students", first, last, result.total_matches);
        }
        let markers: Vec<String> = page_markers(result.current_page, result.total_pages)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("Pages: {}", markers.join(" "));
    }
}

fn print_row(r: &StudentRecord) {
    println!(
        "{:<14} {:<28} {:<6} {:<5} {:>5.2} ({:?})",
        r.roll_number,
        r.name,
        r.department,
        r.year,
        r.score,
        r.score_band()
    );
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let page_size: usize = config.get_or("query.page_size", DEFAULT_PAGE_SIZE);

    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = parse_args(&args, page_size).map_err(|e| {
        eprintln!("{}", USAGE);
        e
    })?;

    let records_path = invocation
        .records_path
        .clone()
        .unwrap_or_else(|| config.get_path("data.records_path", "data/students.json"));
    let source = JsonFileSource::new(records_path);
    let records = source.snapshot()?;
    info!(path = %source.path().display(), count = records.len(), "loaded records");

    match invocation.command {
        Command::Query(request) => {
            let result = run_query(&records, &request)?;
            if invocation.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_page(&result);
            }
        }
        Command::Summary => {
            let summary = summarize(&records);
            if invocation.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Total students: {}", summary.total_records);
                println!("Departments:    {}", summary.department_count);
                println!("Average score:  {:.2}", summary.average_score);
            }
        }
    }
    Ok(())
}
