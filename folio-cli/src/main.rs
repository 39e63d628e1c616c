//! Instance tooling for the folio project-selection solver.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use folio_core::{generate_instance, GeneratorConfig, ProblemInstance};

#[derive(Parser)]
#[command(name = "folio", about = "Instance tooling for the folio project-selection solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate class directories of random instance files.
    Generate {
        /// Output directory.
        #[arg(long, default_value = "problems")]
        out: PathBuf,

        /// Number of instance classes.
        #[arg(long, default_value_t = 10)]
        classes: usize,

        /// Instances per class.
        #[arg(long, default_value_t = 10)]
        per_class: usize,

        /// RNG seed for reproducible generation.
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Smallest number of projects per instance.
        #[arg(long, default_value_t = 8000)]
        min_projects: usize,

        /// Largest number of projects per instance.
        #[arg(long, default_value_t = 9000)]
        max_projects: usize,
    },

    /// Parse an instance file and print a summary.
    Inspect {
        /// Instance file path.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Generate {
            out,
            classes,
            per_class,
            seed,
            min_projects,
            max_projects,
        } => generate(out, classes, per_class, seed, min_projects, max_projects),
        Command::Inspect { file } => inspect(file),
    }
}

fn generate(
    out: PathBuf,
    classes: usize,
    per_class: usize,
    seed: u64,
    min_projects: usize,
    max_projects: usize,
) -> Result<()> {
    anyhow::ensure!(
        min_projects >= 1 && min_projects <= max_projects,
        "project count range [{}, {}] is empty",
        min_projects,
        max_projects
    );

    let config = GeneratorConfig {
        num_projects: min_projects..=max_projects,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(seed);

    for cls in 1..=classes {
        let class_dir = out.join(format!("class_{}", cls));
        fs::create_dir_all(&class_dir)
            .with_context(|| format!("creating {}", class_dir.display()))?;

        for prob in 1..=per_class {
            let instance = generate_instance(&config, &mut rng);
            let path = class_dir.join(format!("problem_{}.dat", prob));
            instance
                .write_dat_file(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            log::debug!(
                "wrote {} (N={}, F={}, S={}, P={})",
                path.display(),
                instance.num_projects(),
                instance.capital_budget(),
                instance.staff_budget(),
                instance.max_projects()
            );
        }
    }

    println!(
        "Generated {} instances in {}/",
        classes * per_class,
        out.display()
    );
    Ok(())
}

fn inspect(file: PathBuf) -> Result<()> {
    let instance = ProblemInstance::from_dat_file(&file)
        .with_context(|| format!("loading {}", file.display()))?;

    println!("{}", file.display());
    println!("  projects (N):       {}", instance.num_projects());
    println!("  capital budget (F): {}", instance.capital_budget());
    println!("  staff budget (S):   {}", instance.staff_budget());
    println!("  project cap (P):    {}", instance.max_projects());

    let total_cost: u64 = instance.cost().iter().sum();
    let total_staff: u64 = instance.staff().iter().sum();
    let best_perf = instance.performance().iter().max().copied().unwrap_or(0);
    println!("  total cost if all selected:  {}", total_cost);
    println!("  total staff if all selected: {}", total_staff);
    println!("  best single performance:     {}", best_perf);

    Ok(())
}
