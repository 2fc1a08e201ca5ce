//! Record schema registry for the BPLAN extract format
//!
//! BPLAN is a closed set of record types: a PIF header, a PIT footer, and
//! six data record types, each with a fixed, ordered field layout. The
//! registry declares those layouts statically, with an explicit semantic
//! kind per field. Date fields are identified by descriptor, never by
//! name-suffix inference.

use std::fmt;

/// Semantic kind of a BPLAN field
///
/// Integer-like fields (easting, distance, speeds) are carried as text and
/// coerced by SQLite's type affinity at the relational boundary, so the
/// registry only distinguishes dates from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
}

/// One field of a record layout: name plus semantic kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    const fn date(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Date,
        }
    }

    /// Whether this field holds a BPLAN date-time value
    pub fn is_date(&self) -> bool {
        self.kind == FieldKind::Date
    }
}

/// The closed set of BPLAN record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordType {
    /// File header: version, validity window, publisher, sequence number
    Pif,
    /// Reference codes
    Ref,
    /// Timing loads
    Tld,
    /// Locations (TIPLOCs)
    Loc,
    /// Platforms and sidings
    Plt,
    /// Network links
    Nwk,
    /// Timing links
    Tlk,
    /// File footer: per-type record counts for integrity validation
    Pit,
}

/// The six data record types, in table dependency order
/// (reference codes before locations, locations before links, links before
/// timing data)
pub const DATA_TYPES: [RecordType; 6] = [
    RecordType::Ref,
    RecordType::Tld,
    RecordType::Loc,
    RecordType::Plt,
    RecordType::Nwk,
    RecordType::Tlk,
];

const PIF_FIELDS: &[FieldDef] = &[
    FieldDef::text("version"),
    FieldDef::text("source_system"),
    FieldDef::text("toc"),
    FieldDef::date("start_date"),
    FieldDef::date("end_date"),
    FieldDef::text("cycle_type"),
    FieldDef::text("cycle_stage"),
    FieldDef::date("creation_date"),
    FieldDef::text("sequence_number"),
];

const REF_FIELDS: &[FieldDef] = &[
    FieldDef::text("type"),
    FieldDef::text("code"),
    FieldDef::text("description"),
];

const TLD_FIELDS: &[FieldDef] = &[
    FieldDef::text("traction"),
    FieldDef::text("trailing_load"),
    FieldDef::text("speed"),
    FieldDef::text("ra_gauge"),
    FieldDef::text("description"),
    FieldDef::text("itps_power_type"),
    FieldDef::text("itps_load"),
    FieldDef::text("limiting_speed"),
];

const LOC_FIELDS: &[FieldDef] = &[
    FieldDef::text("tiploc"),
    FieldDef::text("name"),
    FieldDef::date("start_date"),
    FieldDef::date("end_date"),
    FieldDef::text("easting"),
    FieldDef::text("northing"),
    FieldDef::text("timing_point_type"),
    FieldDef::text("zone"),
    FieldDef::text("stanox"),
    FieldDef::text("off_network_indicator"),
    FieldDef::text("force_lpb"),
];

const PLT_FIELDS: &[FieldDef] = &[
    FieldDef::text("tiploc"),
    FieldDef::text("platform_id"),
    FieldDef::date("start_date"),
    FieldDef::date("end_date"),
    FieldDef::text("length"),
    FieldDef::text("power_supply"),
    FieldDef::text("doo_passenger"),
    FieldDef::text("doo_non_passenger"),
];

const NWK_FIELDS: &[FieldDef] = &[
    FieldDef::text("origin_location"),
    FieldDef::text("destination_location"),
    FieldDef::text("running_line_code"),
    FieldDef::text("running_line_desc"),
    FieldDef::date("start_date"),
    FieldDef::date("end_date"),
    FieldDef::text("initial_direction"),
    FieldDef::text("final_direction"),
    FieldDef::text("distance"),
    FieldDef::text("doo_passenger"),
    FieldDef::text("doo_non_passenger"),
    FieldDef::text("retb"),
    FieldDef::text("zone"),
    FieldDef::text("reversible_line"),
    FieldDef::text("power_supply"),
    FieldDef::text("ra"),
    FieldDef::text("maximum_train_length"),
];

const TLK_FIELDS: &[FieldDef] = &[
    FieldDef::text("origin_location"),
    FieldDef::text("destination_location"),
    FieldDef::text("running_line_code"),
    FieldDef::text("traction"),
    FieldDef::text("trailing_load"),
    FieldDef::text("speed"),
    FieldDef::text("ra_gauge"),
    FieldDef::text("entry_speed"),
    FieldDef::text("exit_speed"),
    FieldDef::date("start_date"),
    FieldDef::date("end_date"),
    FieldDef::text("sectional_running_time"),
    FieldDef::text("description"),
];

impl RecordType {
    /// Resolve a 3-letter record tag to its type, or `None` for tags
    /// outside the closed set
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PIF" => Some(Self::Pif),
            "REF" => Some(Self::Ref),
            "TLD" => Some(Self::Tld),
            "LOC" => Some(Self::Loc),
            "PLT" => Some(Self::Plt),
            "NWK" => Some(Self::Nwk),
            "TLK" => Some(Self::Tlk),
            "PIT" => Some(Self::Pit),
            _ => None,
        }
    }

    /// The 3-letter tag carried in column 0 of each record line
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Pif => "PIF",
            Self::Ref => "REF",
            Self::Tld => "TLD",
            Self::Loc => "LOC",
            Self::Plt => "PLT",
            Self::Nwk => "NWK",
            Self::Tlk => "TLK",
            Self::Pit => "PIT",
        }
    }

    /// Whether this is one of the six data record types
    pub fn is_data(&self) -> bool {
        !matches!(self, Self::Pif | Self::Pit)
    }

    /// Target table name for a data record type (same as the tag)
    pub fn table_name(&self) -> &'static str {
        self.tag()
    }

    /// Ordered payload field layout for this record type
    ///
    /// The PIT footer has no fixed layout (it carries repeating count
    /// quadruples) and returns an empty slice.
    pub fn fields(&self) -> &'static [FieldDef] {
        match self {
            Self::Pif => PIF_FIELDS,
            Self::Ref => REF_FIELDS,
            Self::Tld => TLD_FIELDS,
            Self::Loc => LOC_FIELDS,
            Self::Plt => PLT_FIELDS,
            Self::Nwk => NWK_FIELDS,
            Self::Tlk => TLK_FIELDS,
            Self::Pit => &[],
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
