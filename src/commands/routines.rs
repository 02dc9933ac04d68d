use clap::ArgMatches;

use crate::error::WellTuneResult;
use crate::formatting::print_routines;
use crate::models::routine::{routines_in, Category};

pub fn handle_routines(matches: &ArgMatches) -> WellTuneResult<()> {
    let category = matches
        .get_one::<String>("category")
        .map(|name| name.parse::<Category>())
        .transpose()?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("simple");

    print_routines(&routines_in(category), format)
}
