use graphwalk_core::{Algorithm, DijkstraResult, Step, StepKind};

use crate::args::Args;
use crate::colors::ColorScheme;

pub fn display_run_info(algorithm: Algorithm, start: &str, end: Option<&str>, colors: &ColorScheme) {
    match end {
        Some(end) => println!(
            "🧭 Running {} from {} to {}",
            colors.stats(algorithm.as_str()),
            colors.vertex(&format!("\"{}\"", start)),
            colors.vertex(&format!("\"{}\"", end))
        ),
        None => println!(
            "🧭 Running {} from {}",
            colors.stats(algorithm.as_str()),
            colors.vertex(&format!("\"{}\"", start))
        ),
    }
}

pub fn display_traversal_results(order: &[String], steps: &[Step], args: &Args, colors: &ColorScheme) {
    if order.is_empty() {
        println!("{}", colors.error("❌ Start vertex is not in the graph"));
        return;
    }

    println!("{}", format_order_flow(order, colors));

    if args.verbose {
        println!(
            "\n{} {} vertices visited, {} steps recorded",
            colors.success("✅"),
            colors.number(&order.len().to_string()),
            colors.number(&steps.len().to_string())
        );
    }

    if args.steps {
        println!();
        for (index, step) in steps.iter().enumerate() {
            println!("{}", format_step_line(index + 1, step, colors));
        }
    }
}

pub fn display_dijkstra_results(
    result: &DijkstraResult,
    start: &str,
    end: Option<&str>,
    args: &Args,
    colors: &ColorScheme,
) {
    if result.distances.is_empty() {
        println!("{}", colors.error("❌ Start vertex is not in the graph"));
        return;
    }

    match end {
        Some(end) => display_shortest_path(result, start, end, colors),
        None => display_all_distances(result, colors),
    }

    if args.verbose {
        println!(
            "\n{} {} vertices finalized",
            colors.success("✅"),
            colors.number(&result.visited.len().to_string())
        );
    }
}

fn display_shortest_path(result: &DijkstraResult, start: &str, end: &str, colors: &ColorScheme) {
    match result.path_to(start, end) {
        Some(path) => {
            println!("{}", format_order_flow(&path, colors));
            println!(
                "📏 Total distance: {}",
                colors.number(&format_distance(result.distances[end]))
            );
        }
        None => println!(
            "{} {} and {}",
            colors.error("❌ No path found between"),
            colors.vertex(&format!("\"{}\"", start)),
            colors.vertex(&format!("\"{}\"", end))
        ),
    }
}

fn display_all_distances(result: &DijkstraResult, colors: &ColorScheme) {
    let mut labels: Vec<&String> = result.distances.keys().collect();
    labels.sort();

    for label in labels {
        let distance = result.distances[label];
        if distance.is_infinite() {
            println!(
                "{}: {}",
                colors.vertex(label),
                colors.error("unreachable")
            );
        } else {
            println!(
                "{}: {}",
                colors.vertex(label),
                colors.number(&format_distance(distance))
            );
        }
    }
}

pub fn format_order_flow(order: &[String], colors: &ColorScheme) -> String {
    order
        .iter()
        .map(|vertex| colors.vertex(&format!("\"{}\"", vertex)).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

pub fn format_step_line(number: usize, step: &Step, colors: &ColorScheme) -> String {
    let kind_tag = match step.kind {
        StepKind::Discover => colors.discover("[discover]"),
        StepKind::Visit => colors.visit("[visit]   "),
    };

    let frontier = step
        .frontier
        .iter()
        .map(|entry| entry.vertex.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {} {}  (frontier: [{}])",
        colors.step_number(&format!("{:>3}.", number)),
        kind_tag,
        step.message,
        frontier
    )
}

pub fn format_distance(distance: f32) -> String {
    if distance.fract() == 0.0 {
        format!("{}", distance as i64)
    } else {
        format!("{:.2}", distance)
    }
}
