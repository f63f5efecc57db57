use super::{NamingConvention, Player, UNIVERSAL_PLAYER};

type Entry = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const UNIVERSAL: Entry = (
    UNIVERSAL_PLAYER,
    "Universal",
    &[
        ("180 LR", "_180_LR"),
        ("180 TB", "_180_TB"),
        ("360 LR", "_360_LR"),
        ("360 TB", "_360_TB"),
        ("180 Mono", "_180"),
        ("360 Mono", "_360"),
        ("SBS", "_SBS"),
        ("TB", "_TB"),
    ],
);

// (id, display name, [(label, suffix)])
const PLAYERS: &[Entry] = &[
    UNIVERSAL,
    (
        "playa_vr",
        "PLAY'A VR",
        &[
            ("180 LR", "_180_LR"),
            ("180 TB", "_180_TB"),
            ("360 LR", "_360_LR"),
            ("360 TB", "_360_TB"),
            ("Fisheye 190", "_FISHEYE190"),
            ("MKX200", "_MKX200"),
            ("VRCA220", "_VRCA220"),
            ("RF52", "_RF52"),
        ],
    ),
    (
        "skybox_vr",
        "Skybox VR Player",
        &[
            ("180 LR", "_180_LR"),
            ("180 TB", "_180_TB"),
            ("360 LR", "_360_LR"),
            ("360 TB", "_360_TB"),
            ("3D Half SBS", "_3dh"),
            ("3D Half OU", "_3dv"),
            ("LR", "_LR"),
            ("TB", "_TB"),
        ],
    ),
    (
        "pigasus_vr",
        "Pigasus VR",
        &[
            ("180 SBS", "_180_sbs"),
            ("180 OU", "_180_ou"),
            ("360 SBS", "_360_sbs"),
            ("360 OU", "_360_ou"),
            ("Fisheye 180", "_fisheye180"),
        ],
    ),
    (
        "rad_tv",
        "Rad TV",
        &[
            ("180 LR", "_180_LR"),
            ("180 TB", "_180_TB"),
            ("360 LR", "_360_LR"),
            ("360 TB", "_360_TB"),
        ],
    ),
    (
        "commedia",
        "Commedia",
        &[
            ("180 LR", "_180_LR"),
            ("180 TB", "_180_TB"),
            ("360 LR", "_360_LR"),
            ("360 TB", "_360_TB"),
        ],
    ),
    (
        "oculus_video",
        "Oculus Video App",
        &[
            ("180 LR", "_180_LR"),
            ("180 TB", "_180_TB"),
            ("360 LR", "_360_LR"),
            ("360 TB", "_360_TB"),
            ("3D LR", "_LR_3D"),
            ("3D TB", "_TB_3D"),
        ],
    ),
];

fn to_player((id, name, conventions): &Entry) -> Player {
    Player {
        id: (*id).to_string(),
        name: (*name).to_string(),
        conventions: conventions
            .iter()
            .map(|(label, suffix)| NamingConvention {
                player: (*id).to_string(),
                label: (*label).to_string(),
                suffix: (*suffix).to_string(),
            })
            .collect(),
    }
}

pub(super) fn players() -> Vec<Player> {
    PLAYERS.iter().map(to_player).collect()
}

pub(super) fn universal() -> Player {
    to_player(&UNIVERSAL)
}
