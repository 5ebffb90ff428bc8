//! Generates random people, charts how many hold each job, simulates a hover
//! over the first bar and prints the result as SVG.
//!
//! ```text
//! cargo run --example people_chart -- [config.json] > people.svg
//! ```

use bar_chart::{BarChart, ChartConfig, LogSink, RecordingSurface, Series};
use eyre::{Result, WrapErr};
use rand::Rng;
use std::collections::BTreeMap;

const FIRST_NAMES: &[&str] = &["David", "Sean", "Ingrid", "Matthew", "Lachlan", "Claire", "Bruce", "Wendy"];
const SURNAMES: &[&str] = &["Parry", "Seefried", "Anzola", "Sander", "Kranz", "Hashman", "Taper", "Bornholdt"];
const JOBS: &[&str] = &["Developer", "Analyst", "Scientist", "Engineer", "Spruker", "Lawyer", "Director", "Manager"];

struct Person {
    name: String,
    job: &'static str,
}

fn random_people(count: usize) -> Vec<Person> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = SURNAMES[rng.random_range(0..SURNAMES.len())];
            Person {
                name: format!("{first} {last}"),
                job: JOBS[rng.random_range(0..JOBS.len())],
            }
        })
        .collect()
}

fn main() -> Result<()> {
    let log = LogSink::open("people_chart.log", "bar_chart=debug,people_chart=info")?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).wrap_err_with(|| format!("failed to read {path}"))?;
            ChartConfig::from_json(&json)?
        }
        None => ChartConfig {
            label_max_size: Some(6),
            ..ChartConfig::default()
        }
        .with_size(480.0, 300.0),
    };

    let people = random_people(1000);
    log.in_scope(|| tracing::info!(count = people.len(), first = %people[0].name, "generated people"));

    let mut per_job: BTreeMap<&str, f64> = JOBS.iter().map(|j| (*j, 0.0)).collect();
    for person in &people {
        *per_job.entry(person.job).or_default() += 1.0;
    }
    let series = Series::new(per_job.values().copied().collect(), per_job.keys().copied());

    let chart = BarChart::new(series, config)?;
    let mut surface = RecordingSurface::new(chart.config().width, chart.config().height);
    let mut rendered = chart.render_logged(&mut surface, &log)?;

    if let Some(first) = chart.layout()?.bars.first() {
        let center = first.bounds().center();
        log.in_scope(|| rendered.pointer_moved(center, &mut surface))?;
        log.in_scope(|| tracing::info!(hovered = ?rendered.hovered(), "simulated hover"));
    }

    print!("{}", surface.to_svg());
    log.close()?;
    Ok(())
}
