use actix_web::{web, App, HttpServer};
use chrono::{SecondsFormat, Utc};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::info;
use std::fs::OpenOptions;
use std::io::{self, Write};

use rackd::handlers::{config, validation, words};
use rackd::models::{AppState, SuggestResponse, WordsResponse};
use rackd::output::render;
use rackd::services::word_former::rank_words;
use rackd::services::word_loader::load_filtered_words;
use rackd::{Dictionary, Rack, SuggestionRanker, WordFormer};

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        writeln!(buf, "[{} {:5} {}] {}", timestamp, record.level(), record.target(), record.args())
    });

    if let Some(file) = log_file {
        let log_output = OpenOptions::new().create(true).append(true).open(file)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_output)));
    }

    builder.init();
    Ok(())
}

fn cli() -> Command {
    Command::new("rackd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scrabble helper: words you can make with your tiles, and words worth going for")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("share-dir")
                .long("share-dir")
                .num_args(1)
                .default_value("./share")
                .global(true)
                .help("Directory containing words.txt (plus optional insertions.txt / deletions.txt)"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .global(true)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .subcommand(
            Command::new("show")
                .about("List the best words for a set of tiles")
                .arg(
                    Arg::new("tiles")
                        .required(true)
                        .help("Your tiles, up to a max of 7 (' ' or '_' for a blank)"),
                )
                .arg(
                    Arg::new("suggest")
                        .short('s')
                        .long("suggest")
                        .action(ArgAction::SetTrue)
                        .help("Turn on target word suggestions"),
                )
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .num_args(1)
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("How many words (and suggestions) to list"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the result as JSON"),
                )
                .after_help(
                    "Examples:\n  rackd show \"ska \"      words for the tiles s, k, a and a blank\n  rackd show \"ska \" -s   ...plus words to go for",
                ),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve word lookups over HTTP")
                .arg(
                    Arg::new("listen-host")
                        .long("listen-host")
                        .num_args(1)
                        .default_value("0.0.0.0:2345")
                        .help("Specify the listen address (e.g., 0.0.0.0:2345)"),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .num_args(1)
                        .value_parser(value_parser!(usize))
                        .default_value("5")
                        .help("Result count when a request does not give one"),
                ),
        )
}

fn show(dictionary: &Dictionary, args: &ArgMatches) -> io::Result<()> {
    let tiles = args
        .get_one::<String>("tiles")
        .expect("tiles is a required argument");
    let count = *args
        .get_one::<usize>("count")
        .expect("count argument must always have a default value");

    let rack = Rack::parse(tiles)?;
    let former = WordFormer::new(dictionary);
    let makeable = former.form_words(&rack);
    let words = rank_words(&rack, makeable.iter().cloned(), count);

    let suggestions = if args.get_flag("suggest") {
        Some(SuggestionRanker::new(dictionary).suggest_from(&rack, &makeable, count))
    } else {
        None
    };

    let text = if args.get_flag("json") {
        let tiles = rack.to_string();
        match suggestions {
            Some(suggestions) => {
                serde_json::to_string_pretty(&SuggestResponse { tiles, words, suggestions })?
            }
            None => serde_json::to_string_pretty(&WordsResponse { tiles, words })?,
        }
    } else {
        render(&rack, &words, suggestions.as_deref())
    };

    println!("{}", text);
    Ok(())
}

async fn serve(dictionary: Dictionary, args: &ArgMatches) -> io::Result<()> {
    let listen_host = args
        .get_one::<String>("listen-host")
        .expect("listen-host argument must always have a default value")
        .clone();
    let default_count = *args
        .get_one::<usize>("count")
        .expect("count argument must always have a default value");

    let state = AppState {
        dictionary,
        default_count,
    };
    let shared_state = web::Data::new(state);

    info!("Listening on {}", listen_host);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .service(config::get_config)
            .service(words::get_words)
            .service(words::get_suggestions)
            .service(validation::check_word)
            .service(validation::validate_word)
    })
    .bind(&listen_host)?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let matches = cli().get_matches();
    let (command, args) = matches
        .subcommand()
        .expect("a subcommand is required");

    init_logging(args.get_one::<String>("log-file"))?;

    let share_dir = args
        .get_one::<String>("share-dir")
        .expect("share-dir argument must always have a default value");
    info!("Loading word list from {}", share_dir);
    let dictionary = load_filtered_words(share_dir);

    match command {
        "show" => show(&dictionary, args),
        "serve" => serve(dictionary, args).await,
        other => unreachable!("unknown subcommand {}", other),
    }
}
