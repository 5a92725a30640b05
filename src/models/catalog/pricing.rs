//! Pricing page data: one category per service, three tiers per category.

#[derive(Debug, Clone, Copy)]
pub struct PricingTier {
    pub id: &'static str,
    pub title: &'static str,
    pub price_label: &'static str,
    pub summary: &'static str,
    pub includes: &'static [&'static str],
    pub excludes: &'static [&'static str],
    pub best_for: Option<&'static str>,
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PricingCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub tiers: &'static [PricingTier],
}

pub const PRICING_CATEGORIES: &[PricingCategory] = &[
    PricingCategory {
        id: "graphics-banners",
        label: "Banners",
        description: "Banner packages for streaming and social platforms, from simple starters to fully detailed premium visuals.",
        tiers: &[
            PricingTier {
                id: "banner-starter",
                title: "Starter Banner",
                price_label: "£15",
                summary: "Minimal, clean layout with simple effects. Good entry point for new creators.",
                includes: &[
                    "Simple composition",
                    "1 revision",
                    "Sized for one platform",
                    "High-resolution PNG/JPEG export",
                ],
                excludes: &["Complex lighting or heavy effects", "Custom characters", "Source files"],
                best_for: Some("New creators, budget clients, simple channels."),
                highlight: false,
            },
            PricingTier {
                id: "banner-standard",
                title: "Standard Banner",
                price_label: "£25",
                summary: "Polished banner with proper lighting, effects, and branding.",
                includes: &[
                    "1 main concept + refinement rounds",
                    "Brand-matched colours and typography",
                    "High-resolution PNG/JPEG export",
                    "Resize for one extra platform on request",
                ],
                excludes: &[],
                best_for: Some("Most streamers, YouTubers, and standard rebrands."),
                highlight: true,
            },
            PricingTier {
                id: "banner-premium",
                title: "Premium Banner",
                price_label: "£50",
                summary: "Highly detailed, fully polished banner with extra revisions and matching assets.",
                includes: &[
                    "Fully detailed composition",
                    "Up to 3 revision rounds",
                    "Matching simple PFP",
                    "Source file (PSD) included",
                    "Exports for Twitch, YouTube, Discord",
                ],
                excludes: &[],
                best_for: Some("Serious creators and full channel revamps."),
                highlight: false,
            },
        ],
    },
    PricingCategory {
        id: "video-thumbnails",
        label: "YouTube Thumbnails",
        description: "Thumbnail packages focused on clarity, contrast, and click-through potential.",
        tiers: &[
            PricingTier {
                id: "thumb-starter",
                title: "Starter Thumbnail",
                price_label: "£15",
                summary: "Simple thumbnail focused on quick readability in the feed.",
                includes: &["1 concept", "Text + 1–2 elements", "1 revision"],
                excludes: &["Subject cut-outs", "Advanced effects"],
                best_for: Some("Small channels and simple uploads."),
                highlight: false,
            },
            PricingTier {
                id: "thumb-standard",
                title: "Standard Thumbnail",
                price_label: "£20",
                summary: "Polished thumbnail with clean cut-outs and strong click-through emphasis.",
                includes: &[
                    "1 strong concept + 1–2 revisions",
                    "Subject cut-outs and layered composition",
                    "Colour tuned for the YouTube feed",
                ],
                excludes: &[],
                best_for: Some("Growing channels and regular uploads."),
                highlight: true,
            },
            PricingTier {
                id: "thumb-premium",
                title: "Premium Thumbnail",
                price_label: "£40",
                summary: "High-impact thumbnail with advanced effects and multiple format versions.",
                includes: &[
                    "Up to 2 concepts",
                    "Advanced lighting and atmosphere",
                    "Horizontal + vertical + Shorts versions",
                    "Source file on delivery",
                ],
                excludes: &[],
                best_for: Some("Channels where a single video matters."),
                highlight: false,
            },
        ],
    },
    PricingCategory {
        id: "profile-pictures",
        label: "Profile Pictures",
        description: "Avatars and PFPs sized for every platform at once.",
        tiers: &[
            PricingTier {
                id: "pfp-starter",
                title: "Starter PFP",
                price_label: "£12",
                summary: "Clean single-subject avatar with a simple backdrop.",
                includes: &["1 concept", "1 revision", "All common platform sizes"],
                excludes: &["Illustrated characters"],
                best_for: Some("Quick refreshes."),
                highlight: false,
            },
            PricingTier {
                id: "pfp-standard",
                title: "Standard PFP",
                price_label: "£24",
                summary: "Polished avatar with effects matched to your branding.",
                includes: &["1 concept + 2 revisions", "Brand-matched palette", "All platform sizes"],
                excludes: &[],
                best_for: Some("Creators aligning PFP and banner."),
                highlight: true,
            },
            PricingTier {
                id: "pfp-premium",
                title: "Premium PFP",
                price_label: "£40",
                summary: "Fully illustrated avatar with source files.",
                includes: &["Illustrated subject", "Up to 3 revisions", "Source file included"],
                excludes: &[],
                best_for: Some("Long-term brand identities."),
                highlight: false,
            },
        ],
    },
    PricingCategory {
        id: "stream-emotes",
        label: "Twitch Emotes",
        description: "Custom emotes and stickers, delivered in every Twitch size.",
        tiers: &[
            PricingTier {
                id: "emote-starter",
                title: "Single Emote",
                price_label: "£10",
                summary: "One custom emote in all Twitch sizes.",
                includes: &["1 emote", "1 revision", "28/56/112px exports"],
                excludes: &[],
                best_for: Some("Testing a new emote idea."),
                highlight: false,
            },
            PricingTier {
                id: "emote-standard",
                title: "Emote Trio",
                price_label: "£30",
                summary: "Three matching emotes with a consistent style.",
                includes: &["3 emotes", "2 revisions", "All Twitch sizes"],
                excludes: &[],
                best_for: Some("New affiliates filling their first slots."),
                highlight: true,
            },
            PricingTier {
                id: "emote-premium",
                title: "Emote Pack",
                price_label: "£55",
                summary: "Six emotes plus matching badges.",
                includes: &["6 emotes", "2 sub badges", "3 revisions", "Source files"],
                excludes: &[],
                best_for: Some("Established channels refreshing their set."),
                highlight: false,
            },
        ],
    },
    PricingCategory {
        id: "creator-bundles",
        label: "Creator Bundles",
        description: "Multi-asset packages for a coherent look across a whole channel.",
        tiers: &[
            PricingTier {
                id: "bundle-starter",
                title: "Starter Streamer Package",
                price_label: "£45",
                summary: "Banner + PFP + one emote to get a channel off the ground.",
                includes: &["Standard banner", "Standard PFP", "1 emote"],
                excludes: &["Overlays and alerts"],
                best_for: Some("First-time streamers."),
                highlight: false,
            },
            PricingTier {
                id: "bundle-standard",
                title: "Stream / Creator Package",
                price_label: "£60",
                summary: "The full social kit: banner, PFP, emote trio, and thumbnail template.",
                includes: &["Standard banner", "Standard PFP", "3 emotes", "1 thumbnail template"],
                excludes: &[],
                best_for: Some("Creators rebranding everything at once."),
                highlight: true,
            },
            PricingTier {
                id: "bundle-premium",
                title: "Full Rebrand",
                price_label: "£110",
                summary: "Every asset above at premium tier, with source files throughout.",
                includes: &["Premium versions of all assets", "Source files", "Priority turnaround"],
                excludes: &[],
                best_for: Some("Partnered channels and brands."),
                highlight: false,
            },
        ],
    },
];

pub fn find_category(id: &str) -> Option<&'static PricingCategory> {
    PRICING_CATEGORIES.iter().find(|c| c.id == id)
}
