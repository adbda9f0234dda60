//! Record types for the bins table.

/// A bin row to insert.
///
/// Ids are assigned by the store; there is deliberately no id field.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBin {
    /// Display name of the bin (`nom` column).
    pub name: String,
    /// Fill level percentage (`niveau` column). `None` omits the column
    /// from the insert so the SQL `DEFAULT 0` applies.
    pub level: Option<i64>,
    /// Geographic latitude, if known.
    pub latitude: Option<f64>,
    /// Geographic longitude, if known.
    pub longitude: Option<f64>,
}

/// One of the hard-coded seed rows. Seed data always carries every column.
#[derive(Debug, Clone, Copy)]
pub struct SeedBin {
    pub name: &'static str,
    pub level: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&SeedBin> for NewBin {
    fn from(seed: &SeedBin) -> Self {
        NewBin {
            name: seed.name.to_string(),
            level: Some(seed.level),
            latitude: Some(seed.latitude),
            longitude: Some(seed.longitude),
        }
    }
}
