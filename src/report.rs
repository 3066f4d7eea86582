//! Plain-text rendering for the CLI. Everything here is presentation only.

use chrono::{DateTime, Utc};

use crate::availability::{next_available, AvailabilityRow};
use crate::catalog::ConstellationSpec;
use crate::coverage::CoverageEstimate;
use crate::location::{presets, Area, Location};
use crate::passes::{format_time_delta, format_usd, LastImage, SatellitePass};
use crate::recommend::{Advice, FallbackOption, Recommendation, RecommendationOutcome};
use crate::weather::{WeatherSnapshot, WeatherState};

const NEXT_AVAILABLE_COUNT: usize = 5;
const REASONS_SHOWN: usize = 3;
const FORECAST_HOURS_SHOWN: usize = 3;

pub fn header(location: &Location, area: &Area) -> String {
    format!(
        "{} ({:.4}, {:.4}, {:.0} m) | area {:.1} km²",
        location.name(),
        location.latitude(),
        location.longitude(),
        location.elevation_m(),
        area.area_sqkm()
    )
}

fn weather_summary(weather: &WeatherState, stale: bool) -> String {
    match weather {
        WeatherState::Present(w) => format!(
            "Cloud cover: {:.0}% ({}) | {} | optical {}{}",
            w.current_cloud_cover,
            w.cloud_category(),
            if w.is_daylight { "day" } else { "night" },
            optical_verdict(w),
            if stale { " | stale" } else { "" }
        ),
        WeatherState::Unconfigured => "Weather: not configured".to_string(),
    }
}

fn optical_verdict(w: &WeatherSnapshot) -> &'static str {
    if w.is_good_for_optical() {
        "good"
    } else if w.is_marginal_for_optical() {
        "marginal"
    } else {
        "poor"
    }
}

pub fn availability(
    rows: &[AvailabilityRow],
    weather: &WeatherState,
    stale: bool,
    now: DateTime<Utc>,
) -> String {
    let mut lines = vec![weather_summary(weather, stale), String::new()];
    lines.push(format!(
        "{:<13} {:<14} {:<8} {:>7} {:>10} {:>12} {:>12} {:>10}",
        "Satellite", "Provider", "Type", "Res", "Weather OK", "Last image", "Next image", "Cost"
    ));

    // Rows arrive free first; separate them from the commercial ones
    let mut previous_free = false;
    for row in rows {
        if previous_free && !row.is_free() {
            lines.push("-".repeat(93));
        }
        previous_free = row.is_free();
        lines.push(format!(
            "{:<13} {:<14} {:<8} {:>6}m {:>10} {:>12} {:>12} {:>10}",
            row.constellation,
            row.provider.short_name(),
            row.kind.label(),
            row.resolution_m,
            row.weather_fit.to_string(),
            format_time_delta(row.last_image_available, now),
            format_time_delta(row.next_image_available, now),
            row.cost
        ));
    }

    lines.push(String::new());
    lines.push(format!("Next {} available images:", NEXT_AVAILABLE_COUNT));
    for (i, row) in next_available(rows, NEXT_AVAILABLE_COUNT).iter().enumerate() {
        lines.push(format!(
            "{}. {} - {} ({}, {}m, {})",
            i + 1,
            row.constellation,
            format_time_delta(row.next_image_available, now),
            row.kind.label(),
            row.resolution_m,
            row.cost
        ));
    }
    lines.join("\n")
}

fn weather_panel(w: &WeatherSnapshot, stale: bool) -> Vec<String> {
    let mut lines = vec![
        weather_summary(&WeatherState::Present(w.clone()), stale),
        format!(
            "Visibility: {:.1} km | {} | sunrise {} sunset {}",
            w.current_visibility_km,
            w.current_conditions,
            w.sunrise.format("%H:%M"),
            w.sunset.format("%H:%M")
        ),
    ];
    for f in w.forecast_24h.iter().take(FORECAST_HOURS_SHOWN) {
        lines.push(format!("  {}: {:.0}%", f.time.format("%H:%M"), f.cloud_pct));
    }
    lines.push(format!("Last updated: {}", w.last_updated.format("%H:%M:%S UTC")));
    lines
}

fn recommendation_line(rank: usize, rec: &Recommendation) -> String {
    let reasons: Vec<_> = rec
        .reasons
        .iter()
        .take(REASONS_SHOWN)
        .map(ToString::to_string)
        .collect();
    format!(
        "{:>2}. {:<13} {:>5.0} {:<9} {:>8} {:>6.0}h {:<4} {}",
        rank,
        rec.satellite_name,
        rec.score,
        rec.estimated_quality.to_string(),
        rec.cost,
        rec.eta_hours,
        if rec.weather_suitable { "ok" } else { "no" },
        reasons.join("; ")
    )
}

fn advice_lines(advice: &Advice) -> Vec<String> {
    let mut lines = vec![format!(
        "{} conditions for optical satellites: {}",
        advice.outlook,
        advice.outlook.guidance()
    )];
    if let Some(r) = advice.best_free {
        lines.push(format!(
            "Best free: {} ({}, ETA {:.0}h)",
            r.satellite_name, r.estimated_quality, r.eta_hours
        ));
    }
    if let Some(r) = advice.best_budget {
        lines.push(format!(
            "Best budget: {} ({}, {})",
            r.satellite_name, r.cost, r.estimated_quality
        ));
    }
    if let Some(r) = advice.best_quality {
        lines.push(format!("Best quality: {} ({})", r.satellite_name, r.cost));
    }
    if let Some(r) = advice.fastest {
        lines.push(format!(
            "Fastest: {} (ETA {:.0}h, {})",
            r.satellite_name, r.eta_hours, r.cost
        ));
    }
    if let Some(r) = advice.best_all_weather {
        lines.push(format!(
            "Best all-weather: {} (SAR works through clouds, {})",
            r.satellite_name, r.cost
        ));
    }
    if let Some(trend) = advice.trend {
        lines.push(trend.guidance().to_string());
    }
    lines
}

fn fallback_lines(options: &[FallbackOption]) -> Vec<String> {
    let mut lines = vec![
        "No weather data configured.".to_string(),
        "SAR satellites work regardless of weather; optical ones need clear skies and daylight."
            .to_string(),
        String::new(),
        "Weather-independent options:".to_string(),
    ];
    lines.extend(options.iter().map(|o| {
        format!(
            "  {} ({}) - {}m - {}",
            o.satellite_name,
            o.provider.short_name(),
            o.resolution_m,
            o.cost
        )
    }));
    lines
}

pub fn recommendations(outcome: &RecommendationOutcome, weather: &WeatherState, stale: bool) -> String {
    let lines = match (outcome, weather) {
        (RecommendationOutcome::Ranked(ranked), WeatherState::Present(w)) => {
            let mut lines = weather_panel(w, stale);
            lines.push(String::new());
            lines.extend(
                ranked
                    .iter()
                    .enumerate()
                    .map(|(i, rec)| recommendation_line(i + 1, rec)),
            );
            lines.push(String::new());
            lines.extend(advice_lines(&Advice::from_ranked(w, ranked)));
            lines
        }
        (RecommendationOutcome::Ranked(ranked), WeatherState::Unconfigured) => ranked
            .iter()
            .enumerate()
            .map(|(i, rec)| recommendation_line(i + 1, rec))
            .collect(),
        (RecommendationOutcome::WeatherIndependentOnly(options), _) => fallback_lines(options),
    };
    lines.join("\n")
}

pub fn passes(passes: &[SatellitePass], now: DateTime<Utc>) -> String {
    if passes.is_empty() {
        return "No passes in the requested window".to_string();
    }
    passes
        .iter()
        .map(|p| {
            format!(
                "{} ({:>6}) {:<13} {:<13} {:<7} {:>6}m cloud {:>4} latency {:>6} {}",
                p.pass_time.format("%Y-%m-%d %H:%M"),
                format_time_delta(p.pass_time, now),
                p.constellation,
                p.satellite_name,
                if p.is_weather_independent() { "SAR" } else { "optical" },
                p.resolution_m,
                p.expected_cloud_coverage
                    .map(|c| format!("{:.0}%", c))
                    .unwrap_or_else(|| "n/a".to_string()),
                p.format_latency(),
                p.format_cost()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn coverage(estimates: &[CoverageEstimate]) -> String {
    if estimates.is_empty() {
        return "No constellation meets the resolution and frequency requirements".to_string();
    }
    estimates
        .iter()
        .map(|e| {
            let cost = if e.max_monthly_usd == 0.0 {
                "FREE".to_string()
            } else {
                format!("{} - {}", format_usd(e.min_monthly_usd), format_usd(e.max_monthly_usd))
            };
            format!(
                "{:<13} {:>6}m every {}d  {}",
                e.constellation, e.resolution_m, e.actual_frequency_days, cost
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn catalog<'a>(specs: impl Iterator<Item = &'a ConstellationSpec>) -> String {
    specs
        .map(|spec| {
            let cost = if spec.is_free() {
                "FREE".to_string()
            } else {
                format!("${}-{}/km²", spec.cost_per_sqkm.min, spec.cost_per_sqkm.max)
            };
            format!(
                "{:<13} {:<14} {:<8} {:>6}m {:>5}d revisit {:>4} bands {:>14}  {}",
                spec.name,
                spec.provider.short_name(),
                spec.kind().label(),
                spec.resolution_m,
                spec.revisit_time_days,
                spec.spectral_bands,
                cost,
                spec.provider.ordering_url().unwrap_or("-")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Long-form report: archive, next opportunities and monthly costs.
pub fn full_report(
    location: &Location,
    area: &Area,
    images: &[LastImage],
    upcoming: &[SatellitePass],
    monthly: &[CoverageEstimate],
    now: DateTime<Utc>,
) -> String {
    let rule = "=".repeat(80);
    let mut lines = vec![
        rule.clone(),
        format!(
            "SATELLITE IMAGERY AVAILABILITY REPORT - {}",
            location.name().to_uppercase()
        ),
        rule.clone(),
        format!("Generated: {}", now.format("%Y-%m-%d %H:%M:%S UTC")),
        format!("Coverage area: ~{:.1} km²", area.area_sqkm()),
        format!("Footprint: {}", area.to_wkt()),
        String::new(),
        "LAST AVAILABLE IMAGES".to_string(),
        "-".repeat(40),
    ];

    let mut by_cost: Vec<_> = images.iter().collect();
    by_cost.sort_by(|a, b| a.cost_estimate_usd.min.total_cmp(&b.cost_estimate_usd.min));
    for image in by_cost {
        lines.push(format!("{} ({})", image.constellation, image.provider));
        lines.push(format!(
            "  Last acquisition {}, available since {}",
            image.last_acquisition.format("%Y-%m-%d %H:%M"),
            image.data_available_since.format("%Y-%m-%d %H:%M")
        ));
        let cost = if image.free {
            "FREE".to_string()
        } else {
            format!(
                "{} - {}",
                format_usd(image.cost_estimate_usd.min),
                format_usd(image.cost_estimate_usd.max)
            )
        };
        lines.push(format!("  {}m, {}", image.resolution_m, cost));
        if image.has_sar {
            lines.push("  SAR (works through clouds)".to_string());
        }
    }

    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("IMAGING OPPORTUNITIES".to_string());
    lines.push("-".repeat(40));
    lines.push(passes(upcoming, now));

    lines.push(String::new());
    lines.push(rule);
    lines.push("MONTHLY MONITORING COST (daily coverage)".to_string());
    lines.push("-".repeat(40));
    let mut monthly: Vec<_> = monthly.to_vec();
    monthly.sort_by(|a, b| a.min_monthly_usd.total_cmp(&b.min_monthly_usd));
    lines.push(coverage(&monthly));

    lines.join("\n")
}

pub fn locations() -> String {
    let mut lines = Vec::new();
    for (region, names) in presets::REGIONS {
        lines.push(format!("{}:", region));
        let titled: Vec<_> = names.iter().map(|n| presets::title_case(n)).collect();
        lines.push(format!("  {}", titled.join(", ")));
    }
    lines.join("\n")
}
