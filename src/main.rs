mod body_composition;
mod calculator;
mod domain;
mod error;
mod macronutrients;
mod server;
mod tdee;

use std::fmt::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::calculator::{GoalBreakdown, calorie_floor, compute_breakdown};
use crate::domain::{ActivityLevel, BodyType, Gender, Goal, Profile};
use crate::server::ServerConfig;

/// Daily calorie target and macronutrient split from a biometric profile.
#[derive(Parser, Debug)]
#[command(name = "macrogoal")]
#[command(about = "Personal calorie and macronutrient targets")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        /// Address to bind.
        /// Can also be set via MACROGOAL_HOST environment variable.
        #[arg(long, env = "MACROGOAL_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port number for the web server.
        /// Can also be set via MACROGOAL_PORT environment variable.
        #[arg(long, env = "MACROGOAL_PORT", default_value = "8080")]
        port: u16,

        /// Allow cross-origin requests from any origin.
        #[arg(long)]
        cors: bool,
    },

    /// Compute a plan once and print it.
    Calc(CalcArgs),
}

#[derive(clap::Args, Debug)]
struct CalcArgs {
    /// MALE or FEMALE.
    #[arg(long)]
    gender: Gender,

    /// Age in years.
    #[arg(long)]
    age: u32,

    /// Height in centimeters.
    #[arg(long)]
    height: f64,

    /// Weight in kilograms.
    #[arg(long)]
    weight: f64,

    /// LEAN, NORMAL or HIGH_BODY_FAT.
    #[arg(long)]
    body_type: BodyType,

    /// SEDENTARY, LIGHTLY_ACTIVE, MODERATELY_ACTIVE, VERY_ACTIVE or EXTRA_ACTIVE.
    #[arg(long)]
    activity_level: ActivityLevel,

    /// LOSE, MAINTAIN or GAIN.
    #[arg(long)]
    goal: Goal,

    /// Print the plan as JSON instead of the breakdown.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Serve { host, port, cors } => {
            let config = ServerConfig {
                host,
                port,
                cors,
            };
            server::run_server(config).await?;
        }
        Command::Calc(calc_args) => {
            print!("{}", calc(&calc_args)?);
        }
    }

    Ok(())
}

/// Validates the profile and renders the `calc` output.
fn calc(args: &CalcArgs) -> Result<String> {
    let profile = Profile::new(
        args.gender,
        args.age,
        args.height,
        args.weight,
        args.body_type,
        args.activity_level,
        args.goal,
    )
    .context("Invalid profile")?;

    let breakdown = compute_breakdown(&profile);
    if args.json {
        let json = serde_json::to_string_pretty(&breakdown.plan)
            .context("Failed to render plan as JSON")?;
        return Ok(format!("{}\n", json));
    }

    let mut out = String::new();
    write_breakdown(&mut out, &profile, &breakdown).context("Failed to render breakdown")?;
    Ok(out)
}

/// Writes a human-readable account of one calculation.
fn write_breakdown(out: &mut impl Write, profile: &Profile, b: &GoalBreakdown) -> fmt::Result {
    writeln!(out, "=== Body Composition ===")?;
    writeln!(out)?;
    writeln!(out, "BMI:              {:.1}", b.bmi)?;
    if b.effective_body_type != b.declared_body_type {
        writeln!(
            out,
            "Body type:        {} (declared {})",
            b.effective_body_type, b.declared_body_type
        )?;
    } else {
        writeln!(out, "Body type:        {}", b.effective_body_type)?;
    }
    writeln!(out, "Body fat:         {:.1}%", b.body_fat * 100.0)?;
    writeln!(out, "Lean body mass:   {:.1} kg", b.lean_body_mass_kg)?;

    writeln!(out)?;
    writeln!(out, "=== Energy ===")?;
    writeln!(out)?;
    writeln!(out, "BMR:              {:.0} kcal ({:?})", b.bmr, b.bmr_formula)?;
    writeln!(out, "Activity:         x{}", b.activity_multiplier)?;
    writeln!(out, "TDEE:             {:.0} kcal", b.tdee)?;
    if b.effective_goal != b.stated_goal {
        writeln!(
            out,
            "Goal:             {} (requested {})",
            b.effective_goal, b.stated_goal
        )?;
    } else {
        writeln!(out, "Goal:             {}", b.effective_goal)?;
    }
    if i64::from(b.target_calories) > b.raw_target_calories {
        writeln!(
            out,
            "Target:           {} kcal (raised from {} to the {} kcal minimum)",
            b.target_calories,
            b.raw_target_calories,
            calorie_floor(profile.gender)
        )?;
    } else {
        writeln!(out, "Target:           {} kcal", b.target_calories)?;
    }

    writeln!(out)?;
    writeln!(out, "=== Daily Plan ===")?;
    writeln!(out)?;
    if b.plan.calories > b.target_calories {
        writeln!(
            out,
            "Calories:         {} kcal (raised to cover protein and fat)",
            b.plan.calories
        )?;
    } else {
        writeln!(out, "Calories:         {} kcal", b.plan.calories)?;
    }
    writeln!(out, "Protein:          {} g", b.plan.protein_grams)?;
    writeln!(out, "Fat:              {} g", b.plan.fat_grams)?;
    writeln!(out, "Carbohydrates:    {} g", b.plan.carb_grams)?;
    writeln!(out, "Macro energy:     {} kcal", b.plan.macro_calories())
}
