use std::path::PathBuf;

use clap::Parser;

use bf_compose::compose::{Composer, ComposerConfig};
use bf_compose::generate::bf_count;
use bf_compose::perms::{noneq_input_perms, num_noneq_perms};
use bf_compose::structure::CompositionStructure;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Composition structure, e.g. `2-3` for f(g1(a, b), g2(c, d, e)).
    #[arg(value_name = "STRUCTURE")]
    structure: CompositionStructure,

    /// Catalog directory to consult before enumerating.
    #[clap(long, value_name = "DIR")]
    catalog: Option<PathBuf>,

    /// Largest number of inputs to attempt.
    #[clap(long, value_name = "INT", default_value = "5")]
    max_inputs: usize,

    /// Only use the canonical input order.
    #[clap(long)]
    rep_only: bool,

    /// Print every function (with its DNF) instead of just the summary.
    #[clap(long)]
    list: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let composer = Composer::new(ComposerConfig {
        max_inputs: args.max_inputs,
        catalog_dir: args.catalog.clone(),
    });

    let structure = args.structure.sorted();
    let k = structure.num_inputs();
    let perms = noneq_input_perms(&structure);
    log::info!(
        "Structure {} has {} inputs and {} non-equivalent input partitions (expected {})",
        structure,
        k,
        perms.len(),
        num_noneq_perms(&structure)
    );
    for p in &perms {
        log::debug!("  {}", p);
    }

    let functions = if args.rep_only {
        composer.representatives(&structure)?
    } else {
        composer.distinct_logics(&structure)?
    };

    if args.list {
        for f in &functions {
            println!("{}  {}", f, f.to_dnf());
        }
    }

    println!(
        "{} distinct functions of {} inputs (out of {}) for structure {}",
        functions.len(),
        k,
        bf_count(k),
        structure
    );
    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());

    Ok(())
}
