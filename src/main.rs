mod cli;
mod code_generation;
mod project_management;
mod shared;

use crate::cli::command;
use crate::shared::logging::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    let matches = command::module::spec().get_matches();

    command::module::action(&matches)
}
