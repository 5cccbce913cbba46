//! Cities command handler
//!
//! Lists the cities and districts accepted by manual search.

use crate::error::Result;
use crate::pharmacy::cities;
use clap::Args;

/// Cities command arguments
#[derive(Args)]
pub struct CitiesArgs {
    /// Show districts of a single city
    pub city: Option<String>,
}

/// Run the cities command
pub fn run(args: CitiesArgs) -> Result<()> {
    if let Some(name) = args.city {
        let city = cities::find(&name)?;
        if city.districts.is_empty() {
            println!("{}: any district", city.name);
        } else {
            for district in city.districts {
                println!("{}", district);
            }
        }
        return Ok(());
    }

    for city in cities::all() {
        let districts = if city.districts.is_empty() {
            "any district".to_string()
        } else {
            city.districts.join(", ")
        };
        println!("{:10} {}", city.name, districts);
    }

    Ok(())
}
