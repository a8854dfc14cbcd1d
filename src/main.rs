use flexi_logger::Logger;
use geneweb_gedcom::gwdb::{read_base_info, FamilyKind, PersonKind, Store, StoreKind};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-base-directory> [--log <LEVEL>]", args[0]);
        std::process::exit(1);
    }

    let base_dir = Path::new(&args[1]);
    let mut log_spec = "info".to_string();
    if let Some(log_idx) = args.iter().position(|arg| arg == "--log") {
        match args.get(log_idx + 1) {
            Some(level) => log_spec = level.clone(),
            None => {
                eprintln!("ERROR: --log flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    // RUST_LOG wins over the command line default
    let _logger = match Logger::try_with_env_or_str(&log_spec).and_then(|l| l.log_to_stderr().start()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("ERROR: Failed to start logger: {}", e);
            std::process::exit(1);
        }
    };

    println!("Reading base: {}", base_dir.display());
    println!("{}", "=".repeat(60));

    let info = match read_base_info(base_dir) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("\nERROR: Failed to read base info");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("\nBase Information:");
    println!("  Persons: {}", info.person_count);
    println!("  Sosa: {}", info.sosa);
    println!("  Root sosa: {}", info.root_sosa);
    match info.generated_at() {
        Some(date) => println!("  Generated: {}", date.to_rfc3339()),
        None => println!("  Generated: {} (out of range)", info.timestamp),
    }

    println!("\nStores:");
    for prefix in [PersonKind::FILE_PREFIX, FamilyKind::FILE_PREFIX] {
        match Store::open(base_dir, prefix) {
            Ok(store) => {
                let notes = store.notes.iter().filter(|n| n.is_some()).count();
                let bytes: usize = store.records.iter().map(Vec::len).sum();
                println!("  {}: {} records ({} bytes), {} notes", prefix, store.len(), bytes, notes);
            }
            Err(e) => {
                eprintln!("\nERROR: Failed to read store {}", prefix);
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        }
    }
}
