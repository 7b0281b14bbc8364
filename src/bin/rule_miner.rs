use std::{env, error::Error, fs::File, io::BufReader, process};

use log::{LevelFilter, Log, Metadata, Record};

use apriori_hashtree::{
    apriori,
    dataset::{read_baskets, read_item_names, read_vote_matrix},
    report::ItemLabels,
    AprioriConfig,
};

const USAGE: &str =
    "usage: rule_miner [--baskets] <transactions> <item-names> [min_support [min_confidence]]";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = env::var("RULE_MINER_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

enum Command {
    Help,
    Mine(Args),
}

struct Args {
    baskets: bool,
    transactions: String,
    item_names: String,
    config: AprioriConfig,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    let mut baskets = false;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--baskets" => baskets = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => positional.push(arg),
        }
    }
    if positional.len() < 2 || positional.len() > 4 {
        return Err(USAGE.into());
    }

    let mut config = AprioriConfig::default();
    if let Some(min_support) = positional.get(2) {
        config.min_support = min_support.parse()?;
    }
    if let Some(min_confidence) = positional.get(3) {
        config.min_confidence = min_confidence.parse()?;
    }
    config.validate()?;

    let mut positional = positional.into_iter();
    Ok(Command::Mine(Args {
        baskets,
        transactions: positional.next().unwrap_or_default(),
        item_names: positional.next().unwrap_or_default(),
        config,
    }))
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Mine(args) => args,
    };

    println!("Reading file...");
    let names = read_item_names(BufReader::new(File::open(&args.item_names)?))?;
    let reader = BufReader::new(File::open(&args.transactions)?);
    let (transactions, n_items) = if args.baskets {
        let (transactions, n_items) = read_baskets(reader)?;
        (transactions, n_items.max(names.len()))
    } else {
        read_vote_matrix(reader, names.len() / 2)?
    };

    let (frequent_itemsets, rules) = apriori(&transactions, n_items, &args.config)?;
    let labels = ItemLabels::new(names);

    println!("The frequent itemsets generated are as follows:");
    for (size, _) in frequent_itemsets.levels() {
        for itemset in frequent_itemsets.itemsets(size) {
            println!("{}", labels.itemset(&itemset));
        }
    }

    println!();
    println!("The rules generated are as follows:");
    for rule in &rules {
        println!("{}", labels.rule(rule));
    }

    Ok(())
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
