//! Camp demo
//!
//! Walks the registry through the behaviors callers rely on:
//!
//! 1. **Validated setters**: a recruit's rank cannot leave Private
//! 2. **Redaction**: an officer's command code is never readable
//! 3. **Authorization**: only officers write scores; recruits read their own
//! 4. **Defensive copies**: mutating returned collections changes nothing
//! 5. **Role-filtered views**: officers see serials, recruits do not

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use camp_registry::{
    CampConfig, CampError, CampManagementSystem, Officer, Person, Personnel, Recruit,
};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "camp-demo", about = "Training camp registry walkthrough")]
struct Args {
    /// TOML file with camp name, location and id sequence settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn header(title: &str) {
    println!();
    println!("{}", "═".repeat(64).cyan());
    println!("  {}", title.cyan().bold());
    println!("{}", "═".repeat(64).cyan());
}

fn step(label: &str, value: impl std::fmt::Display) {
    println!("  {} {:<44} {}", "├".dimmed(), label, value);
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match &args.config {
        Some(path) => CampConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CampConfig::default(),
    };
    let mut camp = CampManagementSystem::from_config(&config);

    header(&format!("{} @ {}", camp.name(), camp.location()));

    let commander_id = camp.get_next_id("O")?;
    let recruit_id = camp.get_next_id("R")?;
    let commander: Person =
        Officer::new(commander_id.as_str(), "James Miller", "Colonel", "Alpha Unit", "Infantry")?.into();
    let mut recruit = Recruit::new(recruit_id.as_str(), "John Smith", "Alpha Unit")?;
    let cmd = commander.principal();
    let me = recruit.principal();

    // ── Part 1: properties and validated setters ───────────────────
    header("Part 1: Validated setters");
    step("Name (via accessor):", commander.name());
    step("Rank (via accessor):", commander.rank());
    match recruit.set_rank("General") {
        Err(CampError::InvalidData(msg)) => {
            step("Recruit promotion to General:", format!("rejected ({msg})").green())
        }
        Err(other) => bail!("unexpected error: {other}"),
        Ok(()) => bail!("recruit rank changed"),
    }

    // ── Part 2: redaction ──────────────────────────────────────────
    header("Part 2: Redaction");
    if let Some(officer) = commander.as_officer() {
        step("Command code:", officer.command_code().yellow());
    }

    // ── Part 3: authorization ──────────────────────────────────────
    header("Part 3: Authorization");
    match recruit.update_training_score("marksmanship", 85, Some(&me)) {
        Err(CampError::AccessDenied(msg)) => {
            step("Recruit scoring themself:", format!("denied ({msg})").green())
        }
        other => bail!("recruit scored themself: {other:?}"),
    }
    recruit.update_training_score("marksmanship", 85, Some(&cmd))?;
    step("Recruit reads own scores:", format!("{:?}", recruit.get_training_scores(Some(&me))?));
    step("Officer reads recruit scores:", format!("{:?}", recruit.get_training_scores(Some(&cmd))?));

    // ── Part 4: defensive copies ───────────────────────────────────
    header("Part 4: Defensive copies");
    let mut ratings = recruit.aptitude_ratings();
    step("Aptitude ratings:", format!("{ratings:?}"));
    ratings.insert("leadership".into(), 100);
    step("After editing the copy:", format!("{:?}", recruit.aptitude_ratings()));

    camp.add_personnel(commander, Some(&cmd))?;
    camp.add_personnel(recruit.into(), Some(&cmd))?;
    let mut roster = camp.personnel();
    roster.clear();
    step("Roster size after clearing a copy:", camp.personnel().len());

    // ── Part 5: role-filtered views ────────────────────────────────
    header("Part 5: Role-filtered equipment views");
    let inventory = camp.get_equipment_inventory();
    inventory.add_equipment("E001", "M4 Rifle", "Weapon", Some(&cmd))?;
    camp.assign_equipment("E001", &recruit_id, Some(&cmd))?;

    let inventory = camp.equipment_inventory();
    let officer_view = inventory.get_equipment_details("E001", Some(&cmd))?;
    let recruit_view = inventory.get_equipment_details("E001", Some(&me))?;
    step(
        "Officer view:",
        format!("{} (serial {})", officer_view.name(), officer_view.serial().unwrap_or("-")),
    );
    step(
        "Recruit view:",
        format!("{} (serial hidden: {})", recruit_view.name(), recruit_view.serial().is_none()),
    );
    if let Some(holder) = camp.equipment_holder("E001", Some(&cmd))? {
        step("Assigned to:", holder.display_info());
    }

    tracing::info!(camp = camp.name(), personnel = camp.active_personnel(), "Walkthrough finished");
    println!();
    println!("{}", "Camp registry walkthrough complete".green().bold());
    Ok(())
}
