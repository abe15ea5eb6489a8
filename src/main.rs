use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use oncoparam::catalog::{Category, registry};
use oncoparam::cli::{
    CategoryArg, Cli, Commands, CompareArgs, PanelArg, PatientCommand, ValidateArgs,
};
use oncoparam::compare;
use oncoparam::ctx::Ctx;
use oncoparam::io::{self, summary};
use oncoparam::panel::Panel;
use oncoparam::pipeline::{Pipeline, derivation_stages};
use oncoparam::qc;
use oncoparam::store::PatientStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Derive(args) => {
            let mut ctx = Ctx::new(
                args.input,
                args.out,
                panel_from_arg(args.panel),
                !args.no_stability,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            let pipeline = Pipeline::new(derivation_stages());
            pipeline.run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Catalog(args) => {
            let markers = registry::load_builtin()?;
            let filter = args.category.map(category_from_arg);
            for m in &markers {
                if let Some(cat) = filter {
                    if m.category != cat {
                        continue;
                    }
                }
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    m.key.as_str(),
                    m.category.as_str(),
                    m.unit,
                    m.normal,
                    m.name
                );
            }
        }
        Commands::Validate(args) => handle_validate(args)?,
        Commands::Patient(args) => match args.command {
            PatientCommand::Save(save) => {
                let user = io::input::read_user_vector(&save.input)?;
                let biomarkers = user
                    .iter()
                    .map(|(k, v)| (k.as_str().to_string(), v))
                    .collect();
                let store = PatientStore::new(save.data_dir);
                let id = store.save(
                    &biomarkers,
                    &save.id,
                    &save.name,
                    &save.notes,
                    panel_from_arg(save.panel).as_str(),
                )?;
                println!("saved {}", id);
            }
            PatientCommand::Load(load) => {
                let store = PatientStore::new(load.data_dir);
                match store.load(&load.id)? {
                    Some(record) => println!("{}", oncoparam::store::export_record(&record)?),
                    None => anyhow::bail!("patient '{}' not found", load.id),
                }
            }
            PatientCommand::List(list) => {
                let store = PatientStore::new(list.data_dir);
                for record in store.list()? {
                    println!(
                        "{}\t{}\t{}\t{}",
                        record.patient_id, record.patient_name, record.date, record.notes
                    );
                }
            }
            PatientCommand::Delete(delete) => {
                let store = PatientStore::new(delete.data_dir);
                if store.delete(&delete.id)? {
                    println!("deleted {}", delete.id);
                } else {
                    anyhow::bail!("patient '{}' not found", delete.id);
                }
            }
        },
        Commands::Compare(args) => handle_compare(args)?,
    }

    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let user = io::input::read_user_vector(&args.input)?;
    let report = qc::validate_readings(&user);
    println!("oncoparam validate ok ({} supplied)", user.supplied_count());
    if !report.critical_alerts.is_empty() {
        println!("critical alerts:");
        for alert in &report.critical_alerts {
            println!("- {}", alert);
        }
    }
    if !report.warnings.is_empty() {
        println!("warnings:");
        for warning in &report.warnings {
            println!("- {}", warning);
        }
    }
    if report.critical_alerts.is_empty() && report.warnings.is_empty() {
        println!("no findings");
    }
    Ok(())
}

fn handle_compare(args: CompareArgs) -> Result<()> {
    let store = PatientStore::new(args.data_dir);
    let current = store
        .load(&args.current)?
        .ok_or_else(|| anyhow::anyhow!("patient '{}' not found", args.current))?;
    let previous = store
        .load(&args.previous)?
        .ok_or_else(|| anyhow::anyhow!("patient '{}' not found", args.previous))?;

    let rows = compare::compare_readings(&current.biomarkers, &previous.biomarkers, None);
    println!("biomarker\tcurrent\tprevious\tdelta\tpct\ttrend\tinterpretation");
    for row in &rows {
        println!(
            "{}\t{:.3}\t{:.3}\t{:+.3}\t{:+.1}%\t{}\t{}",
            row.key.as_str(),
            row.current,
            row.previous,
            row.delta,
            row.pct_change,
            row.trend.as_str(),
            row.interpretation
        );
    }
    let counts = compare::summarize(&rows);
    println!(
        "summary: {} improved, {} worsened, {} unchanged, {} changed",
        counts.improved, counts.worsened, counts.unchanged, counts.changed
    );
    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let text = summary::format_summary(ctx)?;
    print!("{}", text);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn panel_from_arg(arg: PanelArg) -> Panel {
    match arg {
        PanelArg::Full => Panel::Full,
        PanelArg::Optimized => Panel::Optimized,
        PanelArg::Core => Panel::Core,
    }
}

fn category_from_arg(arg: CategoryArg) -> Category {
    match arg {
        CategoryArg::Tumor => Category::Tumor,
        CategoryArg::Immune => Category::Immune,
        CategoryArg::Resistance => Category::Resistance,
        CategoryArg::Metabolic => Category::Metabolic,
        CategoryArg::Organ => Category::Organ,
    }
}
