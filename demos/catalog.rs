use std::path::PathBuf;

use clap::Parser;

use bf_compose::catalog::Catalog;
use bf_compose::compose::all_composed_bf;
use bf_compose::structure::CompositionStructure;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Output directory.
    #[arg(value_name = "DIR", default_value = "composed_BF_catalog")]
    dir: PathBuf,

    /// Largest number of inputs to catalog.
    #[clap(long, value_name = "INT", default_value = "4")]
    max_inputs: usize,

    /// Also catalog the fully split and unsplit structures at 5+ inputs.
    #[clap(long)]
    all: bool,

    /// Recompute entries that already exist.
    #[clap(long)]
    force: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let catalog = Catalog::new(&args.dir);

    for k in 1..=args.max_inputs {
        for structure in CompositionStructure::all(k) {
            // These two are far too expensive to enumerate at k >= 5.
            if k >= 5 && !args.all && (structure.is_fully_split() || structure.is_unsplit()) {
                log::info!("Skipping {}", structure);
                continue;
            }
            if catalog.contains(&structure) && !args.force {
                log::info!("Already cataloged: {}", structure);
                continue;
            }

            let time = std::time::Instant::now();
            let functions = all_composed_bf(&structure)?;
            let path = catalog.write(&structure, &functions)?;
            log::info!(
                "{}: {} functions -> {} in {:.3} s",
                structure,
                functions.len(),
                path.display(),
                time.elapsed().as_secs_f64()
            );
        }
    }

    Ok(())
}
