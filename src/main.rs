use study_match::config::{LoggingSettings, Settings};
use study_match::models::{MatchReport, Roster};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // LOG_LEVEL / LOG_FORMAT override the [logging] section
    let settings = Settings::load();
    let logging = match &settings {
        Ok(settings) => settings.logging.with_env_overrides(),
        Err(_) => LoggingSettings::default().with_env_overrides(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Study Match...");

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configuration loaded successfully");

    let roster = match &settings.roster.path {
        Some(path) => match Roster::from_json_file(path) {
            Ok(roster) => {
                info!("Loaded {} students from {}", roster.len(), path);
                roster
            }
            Err(e) => {
                error!("Failed to load roster from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            info!("No roster path configured, using sample roster");
            Roster::sample()
        }
    };

    let matcher = settings.matcher();
    info!(
        "Matcher initialized with weights: {:?}, min_score: {}",
        matcher.weights(),
        matcher.min_score()
    );

    let reports = matcher.build_reports(roster.students(), settings.matching.top_n);

    if settings.output.format == "json" {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize match reports: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_reports(&reports);
    }
}

fn print_reports(reports: &[MatchReport]) {
    for report in reports {
        println!("\n{}", report.heading());
        if report.matches.is_empty() {
            println!("  (no matches)");
        }
        for entry in &report.matches {
            println!("  {} (Score: {})", entry.student.name, entry.score);
        }

        let stats = &report.statistics;
        println!(
            "  -- {} peers, {} matches, {} good, avg {}, best {}",
            stats.total_users,
            stats.total_matches,
            stats.good_matches,
            stats.avg_score,
            stats.best_match_score
        );
    }
}
