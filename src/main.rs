//! rmileage main entrypoint.

use rmileage::run;
use rmileage::ui::messages::report;

fn main() {
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
