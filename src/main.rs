//! shiftcal main entrypoint.

use shiftcal::run;
use shiftcal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
