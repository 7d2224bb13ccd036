//! shoplist main entrypoint.

use shoplist::run;
use shoplist::ui::messages::error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
