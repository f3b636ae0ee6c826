use crate::cli::parser::Cli;
use crate::core::loader::load_records;
use crate::core::report::{build_report, session_minutes};
use crate::errors::AppResult;
use crate::models::session::SessionRecord;
use crate::utils::formatting::{mins2hhmm, mins2hm};

pub fn handle(cli: &Cli) -> AppResult<()> {
    let records = load_records(&cli.file)?;
    let report = build_report(&records);

    for rec in &records {
        print_session(rec);
    }

    println!();
    println!("Total Sessions: {}", report.total_sessions);
    println!("Total time: {}", mins2hm(report.total_minutes));
    println!("Average session length: {}", mins2hm(report.average_minutes));

    Ok(())
}

fn print_session(rec: &SessionRecord) {
    let length = session_minutes(&rec.start, &rec.end);
    println!(
        "{} - {} - {}",
        rec.id,
        rec.start.date_str(),
        mins2hhmm(length)
    );
}
