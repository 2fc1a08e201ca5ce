//! SQLite store for BPLAN reference databases
//!
//! Issues the DDL once per target database: one table per data record
//! type, composite primary keys, foreign keys following the dependency
//! order REF -> LOC -> PLT/NWK -> TLK/TLD, and the default discriminator
//! columns that scope reference-code lookups. Spatial indexing of
//! locations is left to downstream tooling; easting/northing stay plain
//! integer columns.

use std::path::Path;

use rusqlite::{Connection, Transaction};
use tracing::info;

use crate::error::Result;
use crate::schema::RecordType;

/// BPLAN database schema
///
/// Integer-like columns are declared INTEGER and filled through SQLite's
/// type affinity; dates are stored as text.
const SCHEMA_SQL: &str = r#"
    CREATE TABLE REF (
      type TEXT,
      code TEXT,
      description TEXT,
      type_code_type TEXT DEFAULT 'REF',
      PRIMARY KEY (type, code),
      FOREIGN KEY (type_code_type, type) REFERENCES REF
    );
    CREATE TABLE TLD (
      traction TEXT,
      trailing_load TEXT,
      speed INTEGER,
      ra_gauge TEXT,
      description TEXT,
      itps_power_type TEXT,
      itps_load TEXT,
      limiting_speed INTEGER,
      PRIMARY KEY (traction, trailing_load, speed, ra_gauge)
    );
    CREATE TABLE LOC (
      tiploc TEXT PRIMARY KEY,
      name TEXT,
      start_date TEXT,
      end_date TEXT,
      easting INTEGER,
      northing INTEGER,
      timing_point_type TEXT,
      zone TEXT,
      stanox INTEGER,
      off_network_indicator TEXT,
      force_lpb TEXT,
      zone_ref_type TEXT DEFAULT 'ZNE',
      FOREIGN KEY (zone_ref_type, zone) REFERENCES REF
    );
    CREATE TABLE PLT (
      tiploc TEXT,
      platform_id TEXT,
      start_date TEXT,
      end_date TEXT,
      length INTEGER,
      power_supply TEXT,
      doo_passenger TEXT,
      doo_non_passenger TEXT,
      power_supply_ref_type TEXT DEFAULT 'PWR',
      PRIMARY KEY (tiploc, platform_id),
      FOREIGN KEY (tiploc) REFERENCES LOC,
      FOREIGN KEY (power_supply_ref_type, power_supply) REFERENCES REF
    );
    CREATE TABLE NWK (
      origin_location TEXT,
      destination_location TEXT,
      running_line_code TEXT,
      running_line_desc TEXT,
      start_date TEXT,
      end_date TEXT,
      initial_direction TEXT,
      final_direction TEXT,
      distance INTEGER,
      doo_passenger TEXT,
      doo_non_passenger TEXT,
      retb TEXT,
      zone TEXT,
      reversible_line TEXT,
      power_supply TEXT,
      ra TEXT,
      maximum_train_length INTEGER,
      zone_ref_type TEXT DEFAULT 'ZNE',
      power_supply_ref_type TEXT DEFAULT 'PWR',
      PRIMARY KEY (origin_location, destination_location, running_line_code),
      FOREIGN KEY (origin_location) REFERENCES LOC,
      FOREIGN KEY (destination_location) REFERENCES LOC,
      FOREIGN KEY (zone_ref_type, zone) REFERENCES REF,
      FOREIGN KEY (power_supply_ref_type, power_supply) REFERENCES REF
    );
    CREATE TABLE TLK (
      origin_location TEXT,
      destination_location TEXT,
      running_line_code TEXT,
      traction TEXT,
      trailing_load TEXT,
      speed INTEGER,
      ra_gauge TEXT,
      entry_speed INTEGER,
      exit_speed INTEGER,
      start_date TEXT,
      end_date TEXT,
      sectional_running_time TEXT,
      description TEXT,
      PRIMARY KEY (origin_location, destination_location, running_line_code, traction,
      trailing_load, speed, ra_gauge, entry_speed, exit_speed, start_date),
      FOREIGN KEY (origin_location) REFERENCES LOC,
      FOREIGN KEY (destination_location) REFERENCES LOC,
      FOREIGN KEY (origin_location, destination_location, running_line_code) REFERENCES NWK,
      FOREIGN KEY (traction, trailing_load, speed, ra_gauge) REFERENCES TLD
    );
"#;

/// Handle on one target reference database
///
/// Exactly one writer per run; the whole load executes inside a single
/// transaction obtained from [`transaction`](Self::transaction).
pub struct BplanStore {
    conn: Connection,
}

impl BplanStore {
    /// Create a new database file and issue the schema DDL
    pub fn create(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        info!("Created BPLAN database at {}", path.display());
        Ok(Self { conn })
    }

    /// Create an in-memory database with the full schema (test surface)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Begin the run's transaction; dropping it without commit rolls back
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    /// Direct connection access for queries against the loaded data
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Parameterized insert statement for one data record type, columns in the
/// declared field order
pub fn insert_sql(record_type: RecordType) -> String {
    let fields = record_type.fields();
    let columns: Vec<&str> = fields.iter().map(|f| f.name).collect();
    let placeholders = vec!["?"; fields.len()];
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        record_type.table_name(),
        columns.join(", "),
        placeholders.join(", ")
    )
}
