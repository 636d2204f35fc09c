use std::process::ExitCode;

use vitals_cohort_lib::models::CohortKind;

fn main() -> ExitCode {
    match vitals_cohort_lib::run() {
        Ok(report) => {
            println!("Patients fetched: {}", report.patients_fetched);
            for kind in CohortKind::ALL {
                println!("  {}: {}", kind.as_str(), report.cohorts.ids(kind).len());
            }
            println!("Server response:");
            match serde_json::to_string_pretty(&report.acknowledgement) {
                Ok(pretty) => println!("{pretty}"),
                Err(_) => println!("{}", report.acknowledgement),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Assessment run failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
