//! Constants shared by the catalogue preparation stages

// Remote services
/// Hipparcos main catalogue (ESA 1997, CDS I/239)
pub const HIPPARCOS_URL: &str = "https://cdsarc.cds.unistra.fr/ftp/cats/I/239/hip_main.dat";
/// CDS identifier of the Hipparcos main catalogue
pub const HIPPARCOS_CATALOGUE_ID: &str = "I/239/hip_main";
/// SIMBAD synchronous TAP endpoint
pub const SIMBAD_TAP_URL: &str = "https://simbad.cds.unistra.fr/simbad/sim-tap/sync";

// Batching
/// Number of identifiers sent to SIMBAD per query
pub const CHUNK_SIZE: usize = 1000;
/// Pause between SIMBAD queries in seconds
pub const BATCH_DELAY_S: u64 = 2;
/// HTTP timeout for large queries in seconds
pub const HTTP_TIMEOUT_S: u64 = 120;

// Default file names
pub const RAW_CATALOGUE_FILE: &str = "hipparcos_catalogue.csv";
pub const FILTERED_CATALOGUE_FILE: &str = "hipparcos_filtered.csv";
pub const NAMED_CATALOGUE_FILE: &str = "hipparcos_data_with_names.csv";
pub const COLOUR_TABLE_FILE: &str = "raw.txt";
pub const COLOUR_OUTPUT_FILE: &str = "processed.txt";
pub const BOUNDARY_INPUT_FILE: &str = "bound_in_20.txt";
pub const CONSTELLATION_VERTICES_FILE: &str = "constellation_vertices.csv";
pub const CONSTELLATION_BORDERS_FILE: &str = "constellation_borders.csv";

// Sky lines
/// Obliquity of the ecliptic used for the ecliptic line, in degrees (23°26.3')
pub const ECLIPTIC_INCLINATION_DEG: f64 = 23.0 + 26.3 / 60.0;
/// Declination of the north galactic pole in degrees (+27°08')
pub const GALACTIC_POLE_DEC_DEG: f64 = 27.0 + 8.0 / 60.0;
/// Right ascension of the north galactic pole in degrees (12h51m)
pub const GALACTIC_POLE_RA_DEG: f64 = (12.0 + 51.0 / 60.0) * 15.0;
/// Default sampling step along a great circle in degrees
pub const SKY_LINE_STEP_DEG: u32 = 5;

// Line colours (RRGGBBAA)
pub const ECLIPTIC_COLOUR: &str = "6BFF6B10";
pub const GALACTIC_EQUATOR_COLOUR: &str = "A66BFF10";
pub const CONSTELLATION_BORDER_COLOUR: &str = "87C5FFFF";
/// Coordinate grid lines
pub const GRID_COLOUR: &str = "D9620D10";
/// Celestial equator and prime meridian
pub const REFERENCE_COLOUR: &str = "D90D0D23";
pub const REFERENCE_WIDTH: f64 = 2.0;

/// The 88 IAU constellation abbreviations
pub const CONSTELLATIONS: [&str; 88] = [
    "And", "Ant", "Aps", "Aqr", "Aql", "Ara", "Ari", "Aur", "Boo", "Cae", "Cam", "Cnc", "CVn",
    "CMa", "CMi", "Cap", "Car", "Cas", "Cen", "Cep", "Cet", "Cha", "Cir", "Col", "Com", "CrA",
    "CrB", "Crv", "Crt", "Cru", "Cyg", "Del", "Dor", "Dra", "Equ", "Eri", "For", "Gem", "Gru",
    "Her", "Hor", "Hya", "Hyi", "Ind", "Lac", "Leo", "LMi", "Lep", "Lib", "Lup", "Lyn", "Lyr",
    "Men", "Mic", "Mon", "Mus", "Nor", "Oct", "Oph", "Ori", "Pav", "Peg", "Per", "Phe", "Pic",
    "Psc", "PsA", "Pup", "Pyx", "Ret", "Sge", "Sgr", "Sco", "Scl", "Sct", "Ser", "Sex", "Tau",
    "Tel", "Tri", "TrA", "Tuc", "UMa", "UMi", "Vel", "Vir", "Vol", "Vul",
];

/// Check whether `abbr` is a constellation abbreviation, ignoring case
pub fn is_constellation(abbr: &str) -> bool {
    CONSTELLATIONS.iter().any(|c| c.eq_ignore_ascii_case(abbr))
}
