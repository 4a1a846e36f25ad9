use std::io::Read;
use std::path::Path;

use crate::builder::StationRow;

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("Could not read station list: {0}")]
    Csv(#[from] csv::Error),
}

/// Read a station list with `Station` and `Line` header columns. Other columns are ignored.
pub fn read_stations<R: Read>(reader: R) -> Result<Vec<StationRow>, LoadError> {
    let rows = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<StationRow>, _>>()?;
    Ok(rows)
}

pub fn read_stations_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<StationRow>, LoadError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    read_stations(std::io::BufReader::new(file))
}
