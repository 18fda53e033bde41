mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::{Args, CalendarArgs, Command, SearchArgs};
use property_finder::calendar::{
    parse_iso_date, AvailabilityCalendar, AvailableDates, DateRangeSelection, SelectOutcome,
};
use property_finder::search::{self, FilterParams, FilterSpec};
use property_finder::settings::Settings;
use property_finder::{Category, PropertyRecord};
use property_finder::sources::{ApiListingSource, AvailabilitySource, ListingSource, MockListingSource};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct Sources {
    listings: Arc<dyn ListingSource>,
    availability: Arc<dyn AvailabilitySource>,
}

fn build_sources(settings: &Settings, today: NaiveDate) -> Result<Sources> {
    match &settings.source.endpoint {
        Some(endpoint) => {
            let api = Arc::new(ApiListingSource::new(endpoint.as_str(), settings.source.timeout())?);
            Ok(Sources {
                listings: api.clone(),
                availability: api,
            })
        }
        None => {
            let mock = Arc::new(MockListingSource::new(today));
            Ok(Sources {
                listings: mock.clone(),
                availability: mock,
            })
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("property_finder=info")),
        )
        .init();

    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;

    match &args.command {
        Command::Search(search_args) => {
            let sources = build_sources(&settings, Local::now().date_naive())?;
            run_search(&settings, sources.listings.as_ref(), search_args).await
        }
        Command::Calendar(calendar_args) => {
            let today = match &calendar_args.today {
                Some(raw) => parse_iso_date(raw)?,
                None => Local::now().date_naive(),
            };
            let sources = build_sources(&settings, today)?;
            run_calendar(&settings, &sources, calendar_args, today).await
        }
    }
}

async fn run_search(settings: &Settings, source: &dyn ListingSource, args: &SearchArgs) -> Result<()> {
    info!("🏠 Loading listings from {} source", source.source_name());
    let listings = source.fetch_listings().await?;

    let mut spec = FilterSpec::from(FilterParams::from(args));
    if spec.limit.is_none() && settings.search.default_limit > 0 {
        spec.limit = Some(settings.search.default_limit);
    }
    info!("Searching {} listings with {:?}", listings.len(), spec);

    let matches = search::search(&listings, &spec);
    info!("✅ {} listings match\n", matches.len());

    for (i, property) in matches.iter().enumerate() {
        println!("{}. {} ({:.0}, {})", i + 1, property.title, property.price, property.category);
        println!(
            "   {} bd, {} ba, up to {} guests",
            property.bedrooms, property.bathrooms, property.max_guests
        );
        println!("   {}, {}", property.location, property.city);
        println!("   Rating: {:.1} ({} views)", property.rating, property.view_count);
        println!("   Amenities: {}", property.amenities.join(", "));
        println!("   ID: {}", property.id);
        println!();
    }

    if args.summary {
        let summary = search::summarize(matches.iter().copied());
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&matches)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} listings to {}", matches.len(), path.display());
    }

    Ok(())
}

/// Nightly price times nights. Only shortlets are priced per night.
fn estimated_total(listing: &PropertyRecord, nights: i64) -> Option<f64> {
    (listing.category == Category::Shortlet).then(|| listing.price * nights as f64)
}

async fn run_calendar(settings: &Settings, sources: &Sources, args: &CalendarArgs, today: NaiveDate) -> Result<()> {
    let dates = sources.availability.available_dates(&args.property).await?;
    let available = AvailableDates::from_iso_strings(&dates);
    info!("📅 {} bookable days for {}", available.len(), args.property);

    let mut calendar = AvailabilityCalendar::new(available, today)
        .with_min_nights(args.min_nights.unwrap_or(settings.calendar.min_nights))
        .with_week_start(settings.calendar.week_start());
    let mut selection = DateRangeSelection::new();

    for raw in &args.clicks {
        if raw.trim().eq_ignore_ascii_case("clear") {
            selection.clear();
            info!("Selection cleared");
            continue;
        }

        let date = parse_iso_date(raw)?;
        calendar.go_to(date);
        let mut events = Vec::new();
        let outcome = calendar.select(&selection, date, |day, endpoint| {
            info!("onDateSelect({}, {})", day, endpoint.as_str());
            events.push((day, endpoint));
        });
        for (day, endpoint) in events {
            selection.apply(day, endpoint);
        }

        if let SelectOutcome::Ignored { reason } = outcome {
            warn!("Click on {} ignored: {:?}", date, reason);
        }
    }

    println!("{}", calendar.month_view(&selection));

    match (selection.check_in(), selection.check_out(), selection.nights()) {
        (Some(check_in), Some(check_out), Some(nights)) => {
            println!("Check-in {check_in}, check-out {check_out}: {nights} night(s)");
            let listings = sources.listings.fetch_listings().await?;
            let listing = listings.iter().find(|p| p.id == args.property);
            if let Some(total) = listing.and_then(|p| estimated_total(p, nights)) {
                println!("Estimated total: {:.0}", total);
            }
        }
        (Some(check_in), None, _) => println!("Check-in {check_in}, choose a check-out date"),
        _ => println!("No dates selected"),
    }

    Ok(())
}
