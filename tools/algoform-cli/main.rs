use algoform::prelude::*;
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Build and validate algorithm request payloads from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to an algorithm catalog JSON file (defaults to the embedded catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the algorithms in the catalog
    List {
        /// Only show algorithms whose key or name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show an algorithm's form with its default values
    Show { key: String },
    /// Fill in an algorithm's form and print the validation summary and payload
    Check {
        key: String,
        /// Field assignment as key=value (date ranges as FROM..TO)
        #[arg(short, long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
        /// JSON object file of field values
        #[arg(short, long)]
        params: Option<PathBuf>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_ref());

    if cli.human {
        run_interactive(&catalog);
        return;
    }

    match cli.command {
        Some(Command::List { search }) => run_list(&catalog, search.as_deref()),
        Some(Command::Show { key }) => run_show(&catalog, &key),
        Some(Command::Check { key, set, params }) => run_check(&catalog, &key, &set, params),
        None => exit_with_error("A subcommand is required in non-interactive mode. See --help."),
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_catalog(path: Option<&PathBuf>) -> Catalog {
    let result = match path {
        Some(path) => Catalog::from_file(path),
        None => Catalog::embedded(),
    };
    result.unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)))
}

fn run_list(catalog: &Catalog, search: Option<&str>) {
    let options = catalog.search_options(search.unwrap_or_default());
    if options.is_empty() {
        println!("No results found.");
        return;
    }
    let width = options.iter().map(|o| o.value.len()).max().unwrap_or(0);
    for option in options {
        println!("{:width$}  {}", option.value, option.label, width = width);
    }
}

fn run_show(catalog: &Catalog, key: &str) {
    let mut form = FormController::new(catalog);
    select_or_exit(&mut form, key);
    print_form(&form);
    print_payload(&form);
}

fn run_check(catalog: &Catalog, key: &str, assignments: &[(String, String)], params: Option<PathBuf>) {
    let mut form = FormController::new(catalog);
    let algorithm = select_or_exit(&mut form, key);

    if let Some(path) = params {
        let content = fs::read_to_string(&path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read params file '{}': {}", path.display(), e))
        });
        let values: IndexMap<String, FieldValue> = serde_json::from_str(&content)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse params JSON: {}", e)));
        for (field, value) in values {
            form.set_field_value(&field, value)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        }
    }

    for (field, raw) in assignments {
        let input = algorithm.input(field).unwrap_or_else(|| {
            exit_with_error(&format!(
                "Field '{}' is not an input of algorithm '{}'",
                field, algorithm.key
            ))
        });
        form.set_field_value(field, parse_raw_value(input, raw))
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }

    let report = form.validation();
    println!("--- Validation Summary ---");
    println!("{}", SummaryFormatter::format_summary(algorithm, &report));
    println!();
    print_payload(&form);

    if !report.is_valid() {
        std::process::exit(2);
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(catalog: &Catalog) {
    println!("--- Algoform Interactive Mode ---");
    for option in catalog.list_options() {
        println!("  {}  {}", option.value, option.label);
    }

    let mut form = FormController::with_first_algorithm(catalog);
    let key = prompt_for_input("Select algorithm", form.selected_key());
    let algorithm = select_or_exit(&mut form, &key);
    println!("\n{}\n", SummaryFormatter::format_details(algorithm));

    loop {
        for input in &algorithm.inputs {
            let current = form.value(input.key()).cloned().unwrap_or(FieldValue::Empty);
            let hint = match input {
                AlgorithmInput::DateRange(_) => format!("{} [FROM..TO]", input.label()),
                _ => input.label().to_string(),
            };
            let raw = prompt_for_input(&hint, Some(&current.to_string()));
            if raw == current.to_string() {
                continue;
            }
            let status = form
                .set_field_value(input.key(), parse_raw_value(input, &raw))
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            if let Some(message) = status.message() {
                println!("  -> {}", message);
            }
        }

        println!("\n--- Validation Summary ---");
        println!("{}", SummaryFormatter::format_summary(algorithm, &form.validation()));

        if form.is_valid() {
            break;
        }
        let again = prompt_for_input("Form has errors. Edit again? (y/n)", Some("y"));
        if !again.eq_ignore_ascii_case("y") {
            break;
        }
    }

    println!();
    print_payload(&form);
}

fn select_or_exit<'a>(form: &mut FormController<'a>, key: &str) -> &'a AlgorithmDefinition {
    form.select_algorithm(key);
    form.selected_algorithm()
        .unwrap_or_else(|| exit_with_error(&format!("Algorithm '{}' not found in catalog", key)))
}

fn print_form(form: &FormController<'_>) {
    let Some(active) = form.active() else {
        return;
    };
    let algorithm = active.definition();
    println!("{}\n", SummaryFormatter::format_details(algorithm));
    println!(
        "{}\n",
        SummaryFormatter::format_form(algorithm, active.values(), &form.validation())
    );
}

fn print_payload(form: &FormController<'_>) {
    let json = form
        .payload()
        .to_pretty_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize payload: {}", e)));
    println!("--- Payload Preview ---");
    println!("{}", json);
}

fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }
    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
