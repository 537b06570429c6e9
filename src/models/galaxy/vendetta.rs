//! Built-in Vendetta Online galaxy.

use super::{GalaxyBuilder, GalaxyGraph};
use crate::models::constants::FIRST_SYSTEM_ID;
use crate::models::errors::NavResult;
use crate::models::sector::parse_grid_ref;

/// Long names in registry order, starting at id 2.
const SYSTEMS: &[&str] = &[
    "Sol II",
    "Betheshee",
    "Geira Rutilus",
    "Deneb",
    "Eo",
    "Cantus",
    "Metana",
    "Setalli Shinas",
    "Itan",
    "Pherona",
    "Artana Aquilus",
    "Divinia",
    "Jallik",
    "Edras",
    "Verasi",
    "Pelatus",
    "Bractus",
    "Nyrius",
    "Dau",
    "Sedina",
    "Azek",
    "Odia",
    "Latos",
    "Arta Caelestis",
    "Ukari",
    "Helios",
    "Initros",
    "Pyronis",
    "Rhamus",
    "Dantia",
];

/// `(from, to, wormhole cell in from)`. Every row is also a jump.
const WORMHOLES: &[(&str, &str, &str)] = &[
    ("arta", "ukari", "B-7"),
    ("arta", "dau", "O-12"),

    ("dau", "arta", "B-9"),
    ("dau", "azek", "E-15"),
    ("dau", "nyrius", "O-6"),

    ("azek", "dau", "J-1"),
    ("azek", "latos", "I-16"),

    ("nyrius", "dau", "B-10"),
    ("nyrius", "verasi", "O-15"),

    ("verasi", "nyrius", "C-2"),
    ("verasi", "edras", "O-7"),

    ("helios", "pyronis", "B-7"),
    ("helios", "ukari", "O-12"),

    ("ukari", "helios", "B-5"),
    ("ukari", "initros", "A-10"),
    ("ukari", "arta", "L-2"),
    ("ukari", "latos", "O-13"),

    ("latos", "ukari", "B-6"),
    ("latos", "azek", "H-2"),
    ("latos", "sedina", "O-12"),

    ("sedina", "latos", "B-8"),
    ("sedina", "odia", "O-6"),

    ("odia", "sedina", "B-13"),
    ("odia", "bractus", "O-7"),

    ("bractus", "odia", "B-14"),
    ("bractus", "pelatus", "E-2"),

    ("pelatus", "bractus", "K-15"),
    ("pelatus", "edras", "G-2"),

    ("edras", "pelatus", "H-15"),
    ("edras", "verasi", "B-11"),
    ("edras", "jallik", "I-2"),

    ("geira", "deneb", "O-4"),
    ("geira", "betheshee", "L-15"),

    ("betheshee", "geira", "D-2"),
    ("betheshee", "sol", "O-6"),

    ("sol", "betheshee", "B-15"),
    ("sol", "dantia", "O-14"),

    ("dantia", "sol", "B-5"),
    ("dantia", "pyronis", "O-2"),
    ("dantia", "rhamus", "O-13"),

    ("rhamus", "dantia", "B-6"),
    ("rhamus", "initros", "O-5"),

    ("pyronis", "dantia", "B-11"),
    ("pyronis", "helios", "O-9"),
    ("pyronis", "initros", "K-15"),

    ("initros", "rhamus", "B-14"),
    ("initros", "pyronis", "D-2"),
    ("initros", "ukari", "O-12"),

    ("deneb", "geira", "B-12"),
    ("deneb", "eo", "O-3"),

    ("eo", "deneb", "C-12"),
    ("eo", "cantus", "P-11"),

    ("cantus", "eo", "A-7"),
    ("cantus", "metana", "K-2"),

    ("metana", "cantus", "G-16"),
    ("metana", "setalli", "P-6"),

    ("setalli", "metana", "B-8"),
    ("setalli", "itan", "O-13"),

    ("itan", "setalli", "B-6"),
    ("itan", "pherona", "P-6"),

    ("pherona", "itan", "B-14"),
    ("pherona", "artana", "P-7"),

    ("artana", "pherona", "B-7"),
    ("artana", "divinia", "K-1"),

    ("divinia", "artana", "A-13"),
    ("divinia", "jallik", "O-11"),

    ("jallik", "divinia", "C-2"),
    ("jallik", "edras", "E-15"),
];

impl GalaxyGraph {
    /// The stock galaxy: 30 systems joined by 34 two-way jumps.
    pub fn vendetta() -> NavResult<Self> {
        let mut builder = GalaxyBuilder::new();
        for (id, name) in ((FIRST_SYSTEM_ID as u16)..).zip(SYSTEMS) {
            builder.system(id, name);
        }
        for (from, to, grid_ref) in WORMHOLES {
            builder
                .jump(from, to)
                .wormhole(from, to, parse_grid_ref(grid_ref)?);
        }
        builder.build()
    }
}
