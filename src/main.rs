//! crewcal main entrypoint.

use crewcal::run;
use crewcal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
