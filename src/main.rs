//! sesslog main entrypoint.

use sesslog::run;
use sesslog::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(&e);
        std::process::exit(1);
    }
}
