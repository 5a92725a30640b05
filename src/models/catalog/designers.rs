//! Hand-authored portfolio data: designers, their projects, and the featured
//! slides for the designs-page carousel. Pure data, rendered and filtered
//! only — there is no lifecycle here.

/// A single portfolio piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub preview: &'static str,
    pub tags: &'static [&'static str],
}

/// A named collection of projects shown as one showcase panel.
#[derive(Debug, Clone, Copy)]
pub struct Designer {
    pub id: &'static str,
    pub name: &'static str,
    pub role: Option<&'static str>,
    pub specialties: &'static [&'static str],
    pub projects: &'static [Project],
}

/// A featured slide in the main carousel.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub title: &'static str,
    pub src: &'static str,
    pub link: Option<&'static str>,
}

pub const DESIGNER_SHOWCASE: &[Designer] = &[
    Designer {
        id: "bones",
        name: "Bones",
        role: None,
        specialties: &["Anime Banners", "Logos"],
        projects: &[
            Project {
                id: "bones-1",
                title: "Hinata Header",
                preview: "/static/portfolio/bones-hinata-header.png",
                tags: &["Banner", "Anime", "Discord"],
            },
            Project {
                id: "bones-2",
                title: "Yuta Header",
                preview: "/static/portfolio/bones-yuta-header.png",
                tags: &["Banner", "Anime", "Twitter"],
            },
            Project {
                id: "bones-3",
                title: "Sung Jin-Woo Header",
                preview: "/static/portfolio/bones-solo-leveling-header.png",
                tags: &["Banner", "Anime", "Discord"],
            },
        ],
    },
    Designer {
        id: "mix-white",
        name: "Mix White",
        role: None,
        specialties: &["Banners", "Thumbnails", "PFPs"],
        projects: &[
            Project {
                id: "mix-white-1",
                title: "Social Media Header",
                preview: "/static/portfolio/mix-white-ruski-banner.png",
                tags: &["Social Media"],
            },
            Project {
                id: "mix-white-2",
                title: "Madara Header",
                preview: "/static/portfolio/mix-white-madara-header.png",
                tags: &["Anime Header"],
            },
            Project {
                id: "mix-white-3",
                title: "Gear 5 Luffy Header",
                preview: "/static/portfolio/mix-white-luffy-header.png",
                tags: &["Anime Header"],
            },
            Project {
                id: "mix-white-4",
                title: "Makima Wallpaper",
                preview: "/static/portfolio/mix-white-makima-wallpaper.png",
                tags: &["Wallpaper"],
            },
            Project {
                id: "mix-white-5",
                title: "Studio Wordmark",
                preview: "/static/portfolio/mix-white-wordmark.png",
                tags: &["Logo"],
            },
        ],
    },
];

pub const THUMBNAIL_SHOWCASE: &[Designer] = &[Designer {
    id: "hitaka",
    name: "Hitaka",
    role: Some("Thumbnail Specialist"),
    specialties: &["YouTube Thumbnails", "Click-through Focus"],
    projects: &[
        Project {
            id: "hitaka-1",
            title: "Passive Income Ideas",
            preview: "/static/portfolio/hitaka-passive-income.jpg",
            tags: &["Thumbnail"],
        },
        Project {
            id: "hitaka-2",
            title: "Ghost of Tsushima",
            preview: "/static/portfolio/hitaka-ghost-of-tsushima.jpg",
            tags: &["Thumbnail"],
        },
        Project {
            id: "hitaka-3",
            title: "How I Saved £10,000",
            preview: "/static/portfolio/hitaka-saved-10k.jpg",
            tags: &["Thumbnail"],
        },
        Project {
            id: "hitaka-4",
            title: "It's 2025...",
            preview: "/static/portfolio/hitaka-2025.jpg",
            tags: &["Thumbnail"],
        },
    ],
}];

pub const EMOTE_SHOWCASE: &[Designer] = &[Designer {
    id: "pico",
    name: "Pico",
    role: Some("Emote Artist"),
    specialties: &["Twitch Emotes", "Stickers"],
    projects: &[
        Project {
            id: "pico-1",
            title: "Hype Pack",
            preview: "/static/portfolio/pico-hype-pack.png",
            tags: &["Twitch Emotes"],
        },
        Project {
            id: "pico-2",
            title: "Rage Pack",
            preview: "/static/portfolio/pico-rage-pack.png",
            tags: &["Twitch Emotes"],
        },
        Project {
            id: "pico-3",
            title: "Channel Mascot Sketches",
            preview: "/static/portfolio/pico-mascot-sketches.png",
            tags: &[],
        },
    ],
}];

pub const FEATURED_SLIDES: &[Slide] = &[
    Slide {
        title: "Drip Kaiju Banner",
        src: "/static/portfolio/banners/drip-kaiju.png",
        link: None,
    },
    Slide {
        title: "Ruski Custom Header",
        src: "/static/portfolio/banners/ruski-header.png",
        link: None,
    },
    Slide {
        title: "Solo Leveling Header",
        src: "/static/portfolio/banners/solo-leveling.png",
        link: None,
    },
    Slide {
        title: "Sakura Matou Header",
        src: "/static/portfolio/banners/sakura-matou.png",
        link: None,
    },
    Slide {
        title: "Studio Rebrand Banner",
        src: "/static/portfolio/banners/studio-rebrand.png",
        link: Some("/commissions"),
    },
];

/// Look up a designer across every showcase section.
pub fn find_designer(id: &str) -> Option<&'static Designer> {
    DESIGNER_SHOWCASE
        .iter()
        .chain(THUMBNAIL_SHOWCASE)
        .chain(EMOTE_SHOWCASE)
        .find(|d| d.id == id)
}
