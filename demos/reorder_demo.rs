use clap::Parser;
use dict_order::HashWidth;
use dict_order::SlotTable;
use dict_order::reorder;

#[derive(Parser, Debug)]
struct Args {
    /// Word width of the emulated runtime build (32 or 64).
    #[arg(short = 'w', long = "width", default_value_t = 64)]
    width: u32,

    /// Term identifiers in document order; a sample incoming-property list
    /// is used when none are given.
    terms: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let width = match HashWidth::try_from(args.width) {
        Ok(width) => width,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    };

    let terms = if args.terms.is_empty() {
        [
            "name",
            "mbox",
            "homepage",
            "maker",
            "depiction",
            "interest",
            "member",
            "topic",
            "primaryTopic",
            "knows",
        ]
        .map(String::from)
        .to_vec()
    } else {
        args.terms
    };

    println!("Document order ({} terms):", terms.len());
    for term in &terms {
        println!("  {term}");
    }

    let mut table = SlotTable::new(width);
    for term in &terms {
        table.insert(term);
    }
    println!();
    println!(
        "{width} table: {} keys across {} slots",
        table.len(),
        table.capacity()
    );
    println!("{table:?}");

    println!();
    println!("Emitted order:");
    for term in reorder(&terms, width) {
        println!("  {term}");
    }
}
