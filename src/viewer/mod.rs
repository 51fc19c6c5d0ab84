// Viewer: fetch the published records file and drive a filterable,
// sortable, paginated table in the terminal.

pub mod loader;
pub mod state;
pub mod table;

pub use loader::CsvLoader;
pub use state::ViewState;
pub use table::{SortColumn, SortOrder, TableOptions, TableView};

use crate::config::ViewerConfig;
use crate::model::ViewerError;
use crate::normalizer::normalize_all;
use crate::parser::{CsvRowParser, RowParser};
use std::io::{self, BufRead};
use tracing::info;

pub async fn run(cfg: &ViewerConfig) -> Result<(), ViewerError> {
    let loader = CsvLoader::new();

    // The metadata probe and the download are independent; neither
    // waits on the other.
    let (last_modified, body) = tokio::join!(
        loader.fetch_last_modified(&cfg.csv_url),
        loader.fetch_csv(&cfg.csv_url),
    );
    let body = body?;

    let raw_rows = CsvRowParser::new().parse(&body)?;
    let records = normalize_all(&raw_rows);
    info!("Loaded {} records from {}", records.len(), cfg.csv_url);

    let mut state = ViewState::new(records);
    // Derived once from the full set; reprinting reuses this list.
    let county_options = state.county_options();

    println!("Last updated: {last_modified}");
    print_county_options(&county_options);

    let mut options = TableOptions {
        page_length: cfg.page_length,
        ..TableOptions::default()
    };
    let mut view = TableView::build(&state.visible(), options.clone());
    println!("{}", view.render());
    print_usage();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        match command {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "filter" => {
                let selection = if arg.is_empty() {
                    None
                } else {
                    Some(arg.to_string())
                };
                state.set_filter(selection);
                view = TableView::build(&state.visible(), options.clone());
            }
            "all" => {
                state.set_filter(None);
                view = TableView::build(&state.visible(), options.clone());
            }
            "search" => {
                options.search = arg.to_string();
                view = TableView::build(&state.visible(), options.clone());
            }
            "sort" => match parse_sort(arg) {
                Some((column, order)) => {
                    options.sort_column = column;
                    options.sort_order = order;
                    view = TableView::build(&state.visible(), options.clone());
                }
                None => {
                    println!("usage: sort county|link [asc|desc]");
                    continue;
                }
            },
            "next" | "n" => view.next_page(),
            "prev" | "p" => view.prev_page(),
            "page" => match arg.parse::<usize>() {
                Ok(n) if n >= 1 => view.set_page(n - 1),
                _ => {
                    println!("usage: page <number>");
                    continue;
                }
            },
            "counties" => {
                print_county_options(&county_options);
                continue;
            }
            _ => {
                print_usage();
                continue;
            }
        }

        if let Some(filter) = state.current_filter() {
            println!("Filter: {filter}");
        }
        println!("{}", view.render());
    }

    Ok(())
}

fn print_county_options(options: &[String]) {
    println!("Counties: (all) {}", options.join(", "));
}

fn print_usage() {
    println!(
        "commands: filter <county> | all | search <text> | sort county|link [asc|desc] | next | prev | page <n> | counties | quit"
    );
}

fn parse_sort(arg: &str) -> Option<(SortColumn, SortOrder)> {
    let mut parts = arg.split_whitespace();
    let column = match parts.next()? {
        "county" => SortColumn::County,
        "link" | "pdf" => SortColumn::Link,
        _ => return None,
    };
    let order = match parts.next() {
        None | Some("asc") => SortOrder::Ascending,
        Some("desc") => SortOrder::Descending,
        Some(_) => return None,
    };
    Some((column, order))
}
