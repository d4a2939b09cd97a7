//! Output rendering for ranked slots.

use std::io::Write;

use gymslot_core::RecommendationResult;
use serde::Serialize;

use crate::CliError;

/// Printed instead of a listing when no slot could be ranked.
pub(crate) const NO_RECOMMENDATIONS: &str =
    "No recommendations found. Please adjust your preferences.";

/// Describe a crowd percentage in words.
pub(crate) const fn crowd_label(percent: u8) -> &'static str {
    match percent {
        0..30 => "Very Empty",
        30..50 => "Moderately Empty",
        50..70 => "Moderately Crowded",
        70..85 => "Very Crowded",
        _ => "Extremely Crowded",
    }
}

/// Write the ranked slots as a numbered, human-readable listing.
pub(crate) fn write_text(
    writer: &mut dyn Write,
    results: &[RecommendationResult],
) -> Result<(), CliError> {
    write_text_lines(writer, results).map_err(CliError::WriteOutput)
}

fn write_text_lines(
    writer: &mut dyn Write,
    results: &[RecommendationResult],
) -> std::io::Result<()> {
    if results.is_empty() {
        return writeln!(writer, "{NO_RECOMMENDATIONS}");
    }
    writeln!(writer, "Top {} Recommended Gym Times:", results.len())?;
    for (rank, result) in (1_usize..).zip(results) {
        writeln!(writer)?;
        writeln!(writer, "{rank}. {} at {}", result.day, result.time)?;
        writeln!(
            writer,
            "   Score: {:.1} | Crowd: {} ({}%)",
            result.score,
            crowd_label(result.crowd_percent),
            result.crowd_percent
        )?;
        writeln!(writer, "   Best time for: {}", result.time_category.headline())?;
    }
    Ok(())
}

/// Write any serialisable value as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
