use chain_hash::ChainedHashMap;
use chain_hash::ChainedHashSet;
use chain_hash::Error;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use log::info;

const CONTACTS: &[(&str, &str)] = &[
    ("Stas", "stas@test.com"),
    ("Taras", "taras@test.com"),
    ("Nikolas", "nikolas@test.com"),
    ("Alexiy", "Alexiy@test.com"),
    ("Ivan", "Ivan@test.com"),
    ("Maxim", "Maxim@test.com"),
    ("Ihor", "Ihor@test.com"),
    ("Kiril", "Kiril@test.com"),
    ("Vitaliy", "Vitaliy@test.com"),
    ("Dmitriy", "Dmitriy@test.com"),
    ("Sergiy", "Sergiy@test.com"),
    ("Vladimir", "Vladimir@test.com"),
    ("Petr", "Petr@test.com"),
    ("Miroslav", "Miroslav@test.com"),
    ("Nikolas", "NewNikolas@test.com"),
];

#[derive(Parser, Debug)]
struct Args {
    /// Additional contacts to put after the built-in ones, as NAME=EMAIL
    #[arg(short = 'e', long = "entry", value_parser = parse_entry)]
    entries: Vec<(String, String)>,

    /// Number of buckets both tables start with
    #[arg(short = 'b', long = "bucket_count", default_value_t = 16)]
    bucket_count: usize,
}

fn parse_entry(s: &str) -> Result<(String, String), Error> {
    let (name, email) = s
        .split_once('=')
        .ok_or(Error::InvalidArgument("expected NAME=EMAIL"))?;
    if name.is_empty() {
        return Err(Error::InvalidArgument("contact name is absent"));
    }
    Ok((name.to_string(), email.to_string()))
}

fn initialize_logger() {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .format_timestamp_millis()
        .parse_default_env();

    let _ = builder.try_init();
}

fn main() -> Result<(), Error> {
    initialize_logger();
    let args = Args::parse();

    let mut contacts: ChainedHashMap<String, String> =
        ChainedHashMap::with_bucket_count(args.bucket_count)?;
    let extra = args.entries.iter().map(|(n, e)| (n.as_str(), e.as_str()));
    for (name, email) in CONTACTS.iter().copied().chain(extra) {
        if let Some(previous) = contacts.put(name.to_string(), email.to_string()) {
            info!("replaced email of {}: {} -> {}", name, previous, email);
        }
    }

    println!(
        "Contacts ({} keys, {} buckets):",
        contacts.len(),
        contacts.bucket_count()
    );
    print!("{}", contacts.to_display_string());
    contacts.chain_stats().print();

    let mut names: ChainedHashSet<String> = ChainedHashSet::with_bucket_count(args.bucket_count)?;
    for (name, _) in CONTACTS {
        if !names.add(name.to_string()) {
            info!("rejected duplicate name {}", name);
        }
    }

    println!();
    println!(
        "Names ({} elements, {} buckets, load {}):",
        names.len(),
        names.bucket_count(),
        names.growth_policy().load()
    );
    print!("{}", names.to_display_string());
    names.chain_stats().print();

    Ok(())
}
