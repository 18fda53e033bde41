use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use property_finder::search::FilterParams;

#[derive(Parser, Debug)]
#[command(version, about = "Search marketplace listings and pick stay dates")]
pub struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "CONFIG_PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter and sort listings
    Search(SearchArgs),
    /// Replay date clicks against a listing's availability calendar
    Calendar(CalendarArgs),
}

/// Raw search form values. Numbers stay strings here on purpose: bad input
/// is coerced, not rejected.
#[derive(ClapArgs, Debug)]
pub struct SearchArgs {
    #[arg(short, long)]
    pub query: Option<String>,

    /// buy, rent, shortlet or all
    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    /// Minimum bedrooms, e.g. 2 or 2+
    #[arg(long)]
    pub bedrooms: Option<String>,

    #[arg(long)]
    pub bathrooms: Option<String>,

    #[arg(long)]
    pub guests: Option<String>,

    #[arg(long = "type")]
    pub property_type: Option<String>,

    /// Required amenity; repeat for several
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    #[arg(long)]
    pub featured: bool,

    #[arg(long)]
    pub verified: bool,

    /// newest, relevance, price_asc, price_desc, rating, views, featured
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long)]
    pub limit: Option<String>,

    /// Print filter panel facts for the matches
    #[arg(long)]
    pub summary: bool,

    /// Write the matches as JSON to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl From<&SearchArgs> for FilterParams {
    fn from(args: &SearchArgs) -> Self {
        let flag = |on: bool| on.then(|| "true".to_string());
        FilterParams {
            query: args.query.clone(),
            category: args.category.clone(),
            location: args.location.clone(),
            min_price: args.min_price.clone(),
            max_price: args.max_price.clone(),
            bedrooms: args.bedrooms.clone(),
            bathrooms: args.bathrooms.clone(),
            guests: args.guests.clone(),
            property_type: args.property_type.clone(),
            amenities: args.amenities.clone(),
            featured: flag(args.featured),
            verified: flag(args.verified),
            sort: args.sort.clone(),
            limit: args.limit.clone(),
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct CalendarArgs {
    /// Listing id
    #[arg(short, long)]
    pub property: String,

    /// Overrides calendar.min_nights from the settings
    #[arg(long)]
    pub min_nights: Option<u32>,

    /// Pretend today is this date (yyyy-MM-dd)
    #[arg(long)]
    pub today: Option<String>,

    /// Date to click (yyyy-MM-dd), or "clear"; repeat in order
    #[arg(long = "click")]
    pub clicks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use property_finder::search::{FilterSpec, SortKey};

    #[test]
    fn search_args_parse_into_a_spec() {
        let args = Args::parse_from([
            "property-finder",
            "search",
            "--category",
            "rent",
            "--min-price",
            "abc",
            "--amenity",
            "WiFi",
            "--amenity",
            "Parking",
            "--featured",
            "--sort",
            "price_desc",
        ]);
        let Command::Search(search) = args.command else {
            panic!("expected the search subcommand");
        };
        let spec = FilterSpec::from(FilterParams::from(&search));
        assert_eq!(spec.category, Some(property_finder::Category::Rent));
        assert_eq!(spec.price_min, None);
        assert_eq!(spec.amenities, ["WiFi", "Parking"]);
        assert!(spec.featured_only);
        assert!(!spec.verified_only);
        assert_eq!(spec.sort, Some(SortKey::PriceDesc));
    }

    #[test]
    fn calendar_args_keep_click_order() {
        let args = Args::parse_from([
            "property-finder",
            "--config",
            "finder.toml",
            "calendar",
            "--property",
            "vi-studio",
            "--click",
            "2024-01-10",
            "--click",
            "clear",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("finder.toml")));
        let Command::Calendar(calendar) = args.command else {
            panic!("expected the calendar subcommand");
        };
        assert_eq!(calendar.clicks, ["2024-01-10", "clear"]);
    }
}
