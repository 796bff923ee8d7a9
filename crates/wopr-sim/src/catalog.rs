//! Built-in target catalog.
//!
//! Order matters: lookups return the first match, so a name that is a
//! substring of another must come before it.

use wopr_core::enums::{Side, TargetKind};

/// (side, name, kind, latitude, longitude, population, strategic value)
pub type CatalogEntry = (Side, &'static str, TargetKind, f64, f64, u64, u32);

use Side::{Us, Ussr};
use TargetKind::{City, Industrial, Military};

#[rustfmt::skip]
pub const CATALOG: &[CatalogEntry] = &[
    // --- United States ---
    (Us, "NEW YORK",                 City,       40.71,  -74.01, 9_100_000, 10),
    (Us, "LOS ANGELES",              City,       34.05, -118.24, 7_500_000,  9),
    (Us, "CHICAGO",                  City,       41.88,  -87.63, 7_100_000,  9),
    (Us, "WASHINGTON DC",            City,       38.90,  -77.04, 3_300_000, 10),
    (Us, "PHILADELPHIA",             City,       39.95,  -75.17, 4_700_000,  7),
    (Us, "HOUSTON",                  City,       29.76,  -95.37, 2_900_000,  7),
    (Us, "SAN FRANCISCO",            City,       37.77, -122.42, 3_200_000,  8),
    (Us, "DETROIT",                  City,       42.33,  -83.05, 4_300_000,  7),
    (Us, "SEATTLE",                  City,       47.61, -122.33, 1_600_000,  7),
    (Us, "LAS VEGAS",                City,       36.17, -115.14,   460_000,  4),
    (Us, "CHEYENNE MOUNTAIN",        Military,   38.74, -104.85,     5_000, 10),
    (Us, "OFFUTT AIR FORCE BASE",    Military,   41.12,  -95.91,    30_000,  9),
    (Us, "MINOT MISSILE FIELD",      Military,   48.42, -101.33,    40_000,  9),
    (Us, "NORFOLK NAVAL STATION",    Military,   36.95,  -76.33,   260_000,  8),
    (Us, "WHITEMAN AIR FORCE BASE",  Military,   38.73,  -93.55,    10_000,  7),
    (Us, "GROTON SUBMARINE BASE",    Military,   41.35,  -72.08,    40_000,  7),
    (Us, "PITTSBURGH STEEL MILLS",   Industrial, 40.44,  -79.99, 2_200_000,  6),
    (Us, "GARY STEELWORKS",          Industrial, 41.60,  -87.35,   150_000,  5),
    (Us, "HANFORD NUCLEAR SITE",     Industrial, 46.55, -119.49,   100_000,  7),
    (Us, "GULF COAST REFINERIES",    Industrial, 29.90,  -93.90,   300_000,  6),
    // --- Soviet Union ---
    (Ussr, "MOSCOW",                     City,       55.75,  37.62, 8_400_000, 10),
    (Ussr, "LENINGRAD",                  City,       59.93,  30.34, 4_800_000,  9),
    (Ussr, "KIEV",                       City,       50.45,  30.52, 2_400_000,  8),
    (Ussr, "MINSK",                      City,       53.90,  27.57, 1_500_000,  6),
    (Ussr, "KHARKOV",                    City,       49.99,  36.23, 1_500_000,  6),
    (Ussr, "GORKY",                      City,       56.33,  44.00, 1_400_000,  6),
    (Ussr, "NOVOSIBIRSK",                City,       55.03,  82.92, 1_400_000,  7),
    (Ussr, "SVERDLOVSK",                 City,       56.84,  60.60, 1_300_000,  7),
    (Ussr, "TASHKENT",                   City,       41.30,  69.24, 1_900_000,  6),
    (Ussr, "VLADIVOSTOK",                City,       43.12, 131.90,   600_000,  8),
    (Ussr, "BAKU",                       City,       40.41,  49.87, 1_600_000,  5),
    (Ussr, "PLESETSK COSMODROME",        Military,   62.93,  40.58,    40_000,  9),
    (Ussr, "SEVEROMORSK NAVAL BASE",     Military,   69.07,  33.42,    50_000,  9),
    (Ussr, "BAIKONUR COSMODROME",        Military,   45.96,  63.30,    60_000,  8),
    (Ussr, "KOZELSK MISSILE FIELD",      Military,   54.03,  35.78,    20_000,  9),
    (Ussr, "PETROPAVLOVSK SUBMARINE BASE", Military, 53.02, 158.65,   250_000,  8),
    (Ussr, "MAGNITOGORSK STEEL WORKS",   Industrial, 53.40,  59.00,   400_000,  6),
    (Ussr, "NORILSK NICKEL COMBINE",     Industrial, 69.35,  88.20,   180_000,  5),
    (Ussr, "TYUMEN OIL FIELDS",          Industrial, 57.15,  65.53,   400_000,  6),
    (Ussr, "CHELYABINSK TRACTOR PLANT",  Industrial, 55.16,  61.40, 1_100_000,  6),
];
