//! Generate the Vekos and Kaleg fonts from the command line.

use fontgen::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::runner::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
