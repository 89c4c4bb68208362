//! Output formatting for CLI results

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use holdprint_core::{ImageScore, MatchResult, Point, Route};
use serde::Serialize;

/// Output format for listings and results.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Flat view of a ranked route for JSON output.
#[derive(Serialize)]
struct ResultRow<'a> {
    rank: usize,
    route_id: &'a str,
    route_name: &'a str,
    score: u32,
    image_id: Option<&'a str>,
    set_similarity: Option<u32>,
    order_similarity: Option<u32>,
}

impl<'a> ResultRow<'a> {
    fn new(rank: usize, result: &MatchResult<'a>) -> Self {
        Self {
            rank,
            route_id: &result.route.id,
            route_name: &result.route.name,
            score: result.score,
            image_id: result.image_id,
            set_similarity: result.breakdown.map(|b| b.set_similarity),
            order_similarity: result.breakdown.map(|b| b.order_similarity),
        }
    }
}

#[derive(Serialize)]
struct RouteRow<'a> {
    id: &'a str,
    name: &'a str,
    images: usize,
    points: usize,
    created_at: String,
}

fn score_cell(score: u32) -> Cell {
    let color = match score {
        80.. => Color::Green,
        50..=79 => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(score).fg(color)
}

fn optional_cell(value: Option<u32>) -> Cell {
    value.map_or_else(|| Cell::new("-"), Cell::new)
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}

/// Prints a ranked result list.
pub fn print_results(results: &[MatchResult<'_>], format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<ResultRow<'_>> = results
        .iter()
        .enumerate()
        .map(|(i, r)| ResultRow::new(i + 1, r))
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No routes.".dimmed());
        return Ok(());
    }

    let mut table = new_table(&["#", "Route", "Score", "Set", "Order", "Image", "Route ID"]);
    for row in &rows {
        table.add_row(vec![
            Cell::new(row.rank),
            Cell::new(row.route_name),
            score_cell(row.score),
            optional_cell(row.set_similarity),
            optional_cell(row.order_similarity),
            Cell::new(row.image_id.unwrap_or("-")),
            Cell::new(row.route_id),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Prints the per-image breakdown for one route.
pub fn print_explain(
    route: &Route,
    scores: &[ImageScore<'_>],
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(scores)?);
        return Ok(());
    }

    println!("{} {}", "Route:".bold(), route.name);
    if scores.is_empty() {
        println!("{}", "No images to compare against.".dimmed());
        return Ok(());
    }

    let mut table = new_table(&["Image", "Photo", "Set", "Order", "Combined"]);
    for score in scores {
        let photo = route
            .image(score.image_id)
            .map_or("-", |img| img.photo_ref.as_str());
        table.add_row(vec![
            Cell::new(score.image_id),
            Cell::new(photo),
            Cell::new(score.breakdown.set_similarity),
            Cell::new(score.breakdown.order_similarity),
            score_cell(score.breakdown.combined),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Prints the stored routes.
pub fn print_routes(routes: &[Route], format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<RouteRow<'_>> = routes
        .iter()
        .map(|r| RouteRow {
            id: &r.id,
            name: &r.name,
            images: r.images.len(),
            points: r.images.iter().map(|img| img.len()).sum(),
            created_at: r.created_at.to_rfc3339(),
        })
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No routes.".dimmed());
        return Ok(());
    }

    let mut table = new_table(&["ID", "Name", "Images", "Points", "Created"]);
    for row in &rows {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(row.name),
            Cell::new(row.images),
            Cell::new(row.points),
            Cell::new(&row.created_at),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Prints a point set as JSON.
pub fn print_points(points: &[Point]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(points)?);
    Ok(())
}
