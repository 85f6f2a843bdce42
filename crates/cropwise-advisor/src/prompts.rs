//! Prompt templates for the generation backend.
//!
//! Pure functions over accumulated pipeline state. Wording is product
//! copy; the contract is the populated values and the two-call split.

use crate::types::GrowingConditions;

/// Prompt asking for the crops most commonly grown under the given
/// regional conditions.
pub fn crop_list(conditions: &GrowingConditions) -> String {
    let GrowingConditions {
        region,
        avg_temp_c,
        avg_rain_mm,
        soil,
    } = conditions;

    format!(
        "Provide a list of the most commonly grown crops in {region} based on:
- Region: {region}
- Average Temperature: {avg_temp_c:.1}°C
- Average Rainfall: {avg_rain_mm:.1} mm/year
- Typical Soil: {soil}

For each crop, include:
1. Local name and scientific name
2. Typical growing season
3. Percentage of farmland dedicated to this crop in the region
4. Brief description of why it's commonly grown here
5. Any special cultural or economic significance

Format as a numbered list with bold crop names and bullet points for details."
    )
}

/// Supplementary prompt giving broader agricultural context for the
/// region.
pub fn region_overview(region: &str) -> String {
    format!(
        "Provide a brief overview of agriculture in {region}, including:
- Main agricultural products
- Typical farming methods
- Important festivals or traditions related to farming
- Major challenges faced by farmers
- Recent trends in agriculture"
    )
}
