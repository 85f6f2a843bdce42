use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use cropwise_advisor::{OllamaClient, RecommendationEngine, SoilType};
use cropwise_climate::ClimateClient;
use cropwise_core::Config;
use cropwise_geo::GeocodeClient;
use cropwise_session::{AdvisorSession, TtlCache};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    cropwise_core::init()?;

    let (config, _validation) = Config::load_validated()?;
    tracing::info!("Cropwise started");

    // External collaborators are constructed once and reused for the
    // process lifetime.
    let geocoder = GeocodeClient::new(config.geocode.clone())?;
    let climate = ClimateClient::new(config.climate.clone())?;
    let generator = OllamaClient::new(config.model.clone())?;
    let engine = RecommendationEngine::new(generator);

    let ttl = Duration::from_secs(config.cache.ttl_secs);
    let geo_cache = Arc::new(TtlCache::new(ttl));
    let climate_cache = Arc::new(TtlCache::new(ttl));

    let mut session = AdvisorSession::new(geocoder, climate, engine, geo_cache, climate_cache);

    println!("Cropwise - Crop Recommendation Advisor");
    println!("Uses real weather data from Open-Meteo.\n");
    println!("Example locations:");
    println!("  - Pune, Maharashtra");
    println!("  - Bengaluru, Karnataka");
    println!("  - Ludhiana, Punjab\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(location) = prompt(&mut lines, "Enter a location (blank to quit): ")? else {
            break;
        };
        if location.trim().is_empty() {
            break;
        }

        let briefing = match session.submit_location(&location).await {
            Ok(briefing) => briefing,
            Err(e) => {
                println!("  {}\n", e.user_message());
                continue;
            }
        };

        println!("\nClimate data for {}", briefing.place.display_name);
        println!("  Average Temperature: {:.1} °C", briefing.climate.avg_temp_c);
        println!(
            "  Average Rainfall:    {:.1} mm/year\n",
            briefing.climate.avg_rain_mm
        );

        println!("Soil type:");
        for (i, soil) in SoilType::all().iter().enumerate() {
            println!("  {}. {}", i + 1, soil);
        }
        let Some(choice) = prompt(&mut lines, "Choose a soil type [1]: ")? else {
            break;
        };
        if let Err(e) = session.choose_soil(parse_soil(&choice)) {
            println!("  {}\n", e.user_message());
            continue;
        }

        let Some(go) = prompt(&mut lines, "Fetch the most common crops? [Y/n]: ")? else {
            break;
        };
        if go.trim().eq_ignore_ascii_case("n") {
            continue;
        }

        println!("Analyzing regional farming patterns...");
        match session.request_recommendations().await {
            Ok(rec) => {
                println!("\nMost common crops in {}\n", briefing.region);
                println!("{}\n", rec.crop_list);
                println!("About regional agriculture");
                println!("--------------------------");
                println!("{}\n", rec.overview);
            }
            Err(e) => println!("  {}\n", e.user_message()),
        }
    }

    tracing::info!("Cropwise session ended");
    Ok(())
}

/// Print a prompt and read one line; `None` means end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Map selection input to a soil type: a 1-based index or a name.
/// Blank or unrecognized input falls back to the default first option.
fn parse_soil(input: &str) -> SoilType {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return SoilType::default();
    }
    if let Ok(index) = trimmed.parse::<usize>() {
        if (1..=SoilType::all().len()).contains(&index) {
            return SoilType::all()[index - 1];
        }
    }
    SoilType::from_str(trimmed).unwrap_or_default()
}
