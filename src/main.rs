//! shiftpay main entrypoint.

use shiftpay::run;
use shiftpay::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
