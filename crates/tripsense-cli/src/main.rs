//! TripSense CLI - Trip planning from the terminal
//!
//! Presentation layer for the TripSense API: collects preferences as
//! flags, renders the returned itinerary, and keeps the current trip in
//! a local JSON file so the budget/packing views work across
//! invocations.

mod api;
mod config;
mod storage;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{GenerateRequest, TripSenseClient};
use config::Config;
use storage::StoredTrip;
use tripsense::{budget_breakdown, build_packing_list, vibe_score, Itinerary, Pace, VibeProfile};

#[derive(Parser)]
#[command(name = "tripsense")]
#[command(about = "TripSense CLI - AI travel itinerary planning", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new itinerary and store it as the current trip
    Generate {
        /// Destination city or region
        destination: String,
        /// Trip start date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Trip end date (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// Total budget for the trip
        #[arg(long, default_value_t = 1000.0)]
        budget: f64,
        #[arg(long, default_value_t = 1)]
        travelers: u32,
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Trip pace: slow, moderate, or fast
        #[arg(long, default_value = "moderate")]
        pace: Pace,
        /// Vibe sliders, 0-100 each
        #[arg(long, default_value_t = 50)]
        adventure: u8,
        #[arg(long, default_value_t = 50)]
        culture: u8,
        #[arg(long, default_value_t = 50)]
        relaxation: u8,
        #[arg(long, default_value_t = 50)]
        foodie: u8,
        #[arg(long, default_value_t = 50)]
        nightlife: u8,
        #[arg(long, default_value_t = 50)]
        nature: u8,
    },

    /// Show the current trip
    Show,

    /// Request a change to the current trip (replaces it wholesale)
    Modify {
        /// Free-text change description, e.g. "add a wine tasting on day 2"
        description: String,
    },

    /// Optimize the current trip toward a target budget
    Optimize {
        /// Target total budget
        target_budget: f64,
    },

    /// Suggest alternatives for one activity of the current trip
    PlanB {
        /// Day number (1-based)
        #[arg(long)]
        day: u32,
        /// Activity number within the day (1-based)
        #[arg(long)]
        activity: usize,
        /// Why the activity became unviable, e.g. "closed for renovation"
        reason: String,
    },

    /// Budget dashboard for the current trip
    Budget {
        /// Flex view multiplier: 70, 100, or 130
        #[arg(long, default_value_t = 100)]
        flex: u32,
    },

    /// Packing list for the current trip
    Packing,

    /// Show or update configuration
    Config {
        /// Set the server base URL
        #[arg(long)]
        set_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Generate {
            destination,
            start,
            end,
            budget,
            travelers,
            currency,
            pace,
            adventure,
            culture,
            relaxation,
            foodie,
            nightlife,
            nature,
        } => {
            let client = TripSenseClient::new(&config.base_url);
            let request = GenerateRequest {
                destination,
                start_date: start,
                end_date: end,
                budget,
                travelers,
                currency,
                pace,
                vibe: VibeProfile {
                    adventure,
                    culture,
                    relaxation,
                    foodie,
                    nightlife,
                    nature,
                },
            };

            println!("{}", "Generating your itinerary...".cyan());
            let response = client.generate(&request).await?;

            let trip = StoredTrip {
                itinerary: response.itinerary,
                vibe_score: response.vibe_score,
            };
            trip.save()?;

            print_itinerary(&trip.itinerary, trip.vibe_score);
        }

        Commands::Show => {
            let trip = StoredTrip::load()?;
            print_itinerary(&trip.itinerary, trip.vibe_score);
        }

        Commands::Modify { description } => {
            let trip = StoredTrip::load()?;
            let client = TripSenseClient::new(&config.base_url);

            let context = serde_json::to_value(&trip.itinerary)?;
            println!("{}", "Applying your change...".cyan());
            let replacement = client.modify(&context, &description).await?;

            // Whole-object replacement; score recomputed from the new plan
            let trip = StoredTrip {
                vibe_score: vibe_score(&replacement),
                itinerary: replacement,
            };
            trip.save()?;

            println!("{}", "Itinerary updated.".green());
            print_itinerary(&trip.itinerary, trip.vibe_score);
        }

        Commands::Optimize { target_budget } => {
            let trip = StoredTrip::load()?;
            let client = TripSenseClient::new(&config.base_url);

            let context = serde_json::to_value(&trip.itinerary)?;
            println!("{}", "Optimizing your budget...".cyan());
            let response = client.optimize(&context, target_budget).await?;

            if let Some(savings) = response.savings {
                println!("{} {:.0}", "Estimated savings:".green().bold(), savings);
            }
            for change in &response.changes {
                println!(
                    "  {} {} {} ({})",
                    change.original.strikethrough(),
                    "->".dimmed(),
                    change.replacement.bold(),
                    change.reason
                );
            }
            if !response.savings_tips.is_empty() {
                println!("{}", "Savings tips:".yellow());
                for tip in &response.savings_tips {
                    println!("  - {}", tip);
                }
            }

            if let Some(optimized) = response.optimized_itinerary {
                let trip = StoredTrip {
                    vibe_score: vibe_score(&optimized),
                    itinerary: optimized,
                };
                trip.save()?;
                println!("{}", "Stored trip replaced with the optimized plan.".green());
            } else {
                println!(
                    "{}",
                    "Provider returned no optimized itinerary; stored trip unchanged.".yellow()
                );
            }
        }

        Commands::PlanB {
            day,
            activity,
            reason,
        } => {
            let trip = StoredTrip::load()?;
            let day_plan = trip
                .itinerary
                .days
                .iter()
                .find(|d| d.day == day)
                .with_context(|| format!("No day {} in the current trip", day))?;
            if activity == 0 || activity > day_plan.activities.len() {
                bail!(
                    "Day {} has {} activities; pick 1-{}",
                    day,
                    day_plan.activities.len(),
                    day_plan.activities.len().max(1)
                );
            }
            let original = &day_plan.activities[activity - 1];

            let client = TripSenseClient::new(&config.base_url);
            println!(
                "{} {}",
                "Finding alternatives for".cyan(),
                original.name.bold()
            );
            let context = serde_json::to_value(original)?;
            let response = client.plan_b(&context, &reason).await?;

            for alternative in &response.alternatives {
                println!(
                    "  {} ({:.0} {})",
                    alternative.name.bold(),
                    alternative.cost,
                    alternative.currency.as_deref().unwrap_or("USD")
                );
                if !alternative.description.is_empty() {
                    println!("    {}", alternative.description.dimmed());
                }
            }
            if let Some(explanation) = &response.explanation {
                println!("{} {}", "Why:".yellow(), explanation);
            }
        }

        Commands::Budget { flex } => {
            if !matches!(flex, 70 | 100 | 130) {
                bail!("--flex must be 70, 100, or 130");
            }
            let trip = StoredTrip::load()?;
            let breakdown = budget_breakdown(&trip.itinerary);
            let multiplier = flex as f64 / 100.0;

            println!(
                "{} {:.0} ({}% view)",
                "Total:".bold(),
                breakdown.total * multiplier,
                flex
            );
            println!(
                "  per day: {:.0}   per person: {:.0}",
                breakdown.daily_average * multiplier,
                breakdown.per_person_cost * multiplier
            );
            println!(
                "  flex views: {:.0} / {:.0} / {:.0}",
                breakdown.flex_views.budget70,
                breakdown.flex_views.budget100,
                breakdown.flex_views.budget130
            );
            for category in &breakdown.categories {
                println!(
                    "  {:<14} {:>8.0}  ({:.0}%)",
                    category.name,
                    category.amount * multiplier,
                    category.percentage
                );
            }
        }

        Commands::Packing => {
            let trip = StoredTrip::load()?;
            let list = build_packing_list(&trip.itinerary);

            println!(
                "{} ({} items)",
                "Packing list".bold(),
                list.total_items
            );
            for category in &list.categories {
                let marker = if category.essential { "*" } else { " " };
                println!("{} {}", marker, category.name.cyan().bold());
                for item in &category.items {
                    println!("    [ ] {} - {}", item.name, item.reason.dimmed());
                }
            }
        }

        Commands::Config { set_url } => {
            let mut config = config;
            if let Some(url) = set_url {
                config.base_url = url;
                config.save()?;
                println!("{}", "Configuration saved.".green());
            }

            println!("{} {:?}", "Config file:".bold(), Config::config_path()?);
            println!("{} {}", "Server:".bold(), config.base_url);
            println!("{} {:?}", "Trip file:".bold(), StoredTrip::path()?);

            let client = TripSenseClient::new(&config.base_url);
            match client.health().await {
                Ok(true) => println!("{} {}", "Server status:".bold(), "healthy".green()),
                _ => println!("{} {}", "Server status:".bold(), "unreachable".red()),
            }
        }
    }

    Ok(())
}

fn print_itinerary(itinerary: &Itinerary, vibe_score: u32) {
    println!(
        "\n{} {}",
        "Trip to".bold(),
        itinerary.destination.green().bold()
    );
    if let (Some(start), Some(end)) = (itinerary.start_date, itinerary.end_date) {
        println!("  {} to {}", start, end);
    }
    println!(
        "  {} {}   {} {:.0} {}",
        "vibe score:".dimmed(),
        vibe_score,
        "total cost:".dimmed(),
        itinerary.total_cost,
        itinerary.currency.as_deref().unwrap_or("USD")
    );

    for day in &itinerary.days {
        let theme = day.theme.as_deref().unwrap_or("");
        println!("\n{} {}", format!("Day {}", day.day).cyan().bold(), theme);
        for activity in &day.activities {
            println!(
                "  {}-{}  {} ({:.0})",
                activity.start_time,
                activity.end_time,
                activity.name.bold(),
                activity.cost
            );
        }
    }

    if !itinerary.highlights.is_empty() {
        println!("\n{}", "Highlights:".yellow().bold());
        for highlight in &itinerary.highlights {
            println!("  - {}", highlight);
        }
    }
}
