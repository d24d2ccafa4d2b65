use anyhow::{anyhow, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use mifs_cli::select::{run_demo, run_selection, write_selection_output};
use mifs_cli::util::{validate_json_file, validate_tsv_file};
use mifs_selection::config::{load_selector_config, SelectorConfig, StrategyType};
use mifs_selection::io::{read_problem_json, read_problem_tsv};

fn selection_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON selector configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .help("Search strategy. Overrides the strategy in the configuration file.")
                .value_parser(["forward", "backward"])
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("max_features")
                .short('k')
                .long("max-features")
                .help("Largest subset backward selection may return. Defaults to all features.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("Path to write the selection result (JSON)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
}

fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help("Log the subset size, score and features at every iteration")
        .action(ArgAction::SetTrue)
}

fn main() -> Result<()> {
    let matches = Command::new("mifs")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Greedy forward/backward feature selection from importance and redundancy scores")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(selection_args(
            Command::new("select")
                .about("Select features for a JSON problem file")
                .arg(
                    Arg::new("problem")
                        .help("Path to the problem file (features, importance, redundancy)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(verbose_arg()),
        ))
        .subcommand(selection_args(
            Command::new("select-tsv")
                .about("Select features from importance and redundancy TSV tables")
                .arg(
                    Arg::new("importance")
                        .short('i')
                        .long("importance")
                        .help("TSV with columns feature, importance")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("redundancy")
                        .short('r')
                        .long("redundancy")
                        .help("TSV with columns first, second, redundancy")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(verbose_arg()),
        ))
        .subcommand(
            Command::new("demo")
                .about("Run both strategies on a built-in five-feature problem")
                .arg(verbose_arg()),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let verbose = matches
        .subcommand()
        .map(|(_, sub_m)| sub_m.get_flag("verbose"))
        .unwrap_or(false);
    init_logging(verbose);

    match matches.subcommand() {
        Some(("select", sub_m)) => handle_select(sub_m, false),
        Some(("select-tsv", sub_m)) => handle_select(sub_m, true),
        Some(("demo", sub_m)) => {
            print!("{}", run_demo(sub_m.get_flag("verbose"))?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::default();
    builder
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MIFS_LOG", "error,mifs=info"));
    if verbose {
        builder.filter_module("mifs_selection", LevelFilter::Info);
    }
    builder.init();
}

fn required_path<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a PathBuf> {
    matches
        .get_one::<PathBuf>(name)
        .ok_or_else(|| anyhow!("Missing required argument: {}", name))
}

fn selector_config(matches: &ArgMatches) -> Result<SelectorConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => {
            log::info!("[MIFS::Select] Using config: {:?}", config_path);
            validate_json_file(config_path)?;
            load_selector_config(config_path)?
        }
        None => SelectorConfig::default(),
    };

    if let Some(strategy) = matches.get_one::<String>("strategy") {
        config.strategy = StrategyType::from_str(strategy).map_err(anyhow::Error::msg)?;
    }

    if let Some(&max_features) = matches.get_one::<usize>("max_features") {
        match &mut config.strategy {
            StrategyType::Backward { max_features: budget } => *budget = Some(max_features),
            StrategyType::Forward => {
                log::warn!("[MIFS::Select] --max-features only applies to backward selection; ignoring")
            }
        }
    }

    if matches.get_flag("verbose") {
        config.verbose = true;
    }

    Ok(config)
}

fn handle_select(matches: &ArgMatches, from_tsv: bool) -> Result<()> {
    let problem = if from_tsv {
        let importance_path = required_path(matches, "importance")?;
        let redundancy_path = required_path(matches, "redundancy")?;
        validate_tsv_file(importance_path)?;
        validate_tsv_file(redundancy_path)?;
        log::info!(
            "[MIFS::Select] Reading tables: {:?}, {:?}",
            importance_path,
            redundancy_path
        );
        read_problem_tsv(importance_path, redundancy_path)?
    } else {
        let problem_path = required_path(matches, "problem")?;
        log::info!("[MIFS::Select] Reading problem: {:?}", problem_path);
        read_problem_json(problem_path)?
    };

    let config = selector_config(matches)?;
    let output = match run_selection(&problem, &config) {
        Ok(output) => output,
        Err(e) => {
            log::error!("Selection failed: {:#}", e);
            std::process::exit(1)
        }
    };

    println!("selected: {}", output.label);
    println!("score: {}", output.score);

    if let Some(output_path) = matches.get_one::<PathBuf>("output_file") {
        write_selection_output(output_path, &output)?;
        log::info!("[MIFS::Select] Wrote result to {:?}", output_path);
    }
    Ok(())
}
