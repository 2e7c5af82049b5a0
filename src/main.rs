//! gymsched main entrypoint.

use gymsched::run;
use gymsched::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
