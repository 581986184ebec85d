use std::error::Error;

use chrono::{Datelike, Local};
use tracing_subscriber::EnvFilter;

use colombiacalendar::configuration::Configuration;
use colombiacalendar::time::calendar::workdaymonthreport::WorkdayMonthReport;

// usage: colombiacalendar [YEAR] [CONFIG_JSON]
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let year = match args.next() {
        Some(year) => year.parse::<i32>()?,
        None => Local::now().year()
    };
    let config = match args.next() {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::default()
    };
    tracing::info!(year, "computing holidays");

    let calendar = config.calendar(year)?;
    println!("Easter Sunday: {}", calendar.easter_sunday());
    println!("Holidays ({}):", calendar.len());
    for d in calendar.holidays() {
        println!("  {} {}", d, d.weekday());
    }

    println!("Workdays per month:");
    for month in 1..=12 {
        let report = WorkdayMonthReport::with_calendar(calendar.clone(), month, config.weekends())?;
        println!("  {:04}-{:02}: {}", year, month, report.count());
    }
    Ok(())
}
