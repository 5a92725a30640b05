//! Shop products: static design packs plus the filter/sort plumbing the shop
//! page runs over them, and the read-only product list the admin panel shows.

#[derive(Debug, Clone, Copy)]
pub struct ProductVariant {
    pub id: &'static str,
    pub name: &'static str,
    pub price_gbp: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub cover: &'static str,
    pub includes: &'static [&'static str],
    pub license_summary: &'static str,
    pub variants: &'static [ProductVariant],
    pub featured: bool,
    /// ISO date; "new" sorting compares these lexically.
    pub updated_at: &'static str,
}

pub const SHOP_TAGS: &[&str] = &["psd-included", "anime", "minimal", "dark", "gradient", "headers"];

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "pack-anime-headers",
        slug: "anime-header-pack",
        title: "Anime Header Pack",
        subtitle: Some("Six layered header scenes"),
        category: "headers",
        tags: &["anime", "headers", "psd-included"],
        cover: "/static/shop/anime-header-pack.png",
        includes: &["6 layered PSDs", "Twitch + Twitter export sizes", "Font list"],
        license_summary: "Personal and channel use; no resale.",
        variants: &[
            ProductVariant { id: "anime-headers-psd", name: "PSD Bundle", price_gbp: 18 },
            ProductVariant { id: "anime-headers-flat", name: "Flattened PNGs", price_gbp: 9 },
        ],
        featured: true,
        updated_at: "2025-11-02",
    },
    Product {
        id: "pack-minimal-banners",
        slug: "minimal-banner-kit",
        title: "Minimal Banner Kit",
        subtitle: Some("Clean typographic layouts"),
        category: "headers",
        tags: &["minimal", "headers"],
        cover: "/static/shop/minimal-banner-kit.png",
        includes: &["4 banner templates", "Editable text layers", "Colour swatches"],
        license_summary: "Personal and channel use; no resale.",
        variants: &[ProductVariant {
            id: "minimal-banners-std",
            name: "Standard",
            price_gbp: 12,
        }],
        featured: false,
        updated_at: "2025-09-18",
    },
    Product {
        id: "pack-dark-gradients",
        slug: "dark-gradient-set",
        title: "Dark Gradient Set",
        subtitle: None,
        category: "backgrounds",
        tags: &["dark", "gradient"],
        cover: "/static/shop/dark-gradient-set.png",
        includes: &["20 4K gradient backgrounds", "Stream overlay variants"],
        license_summary: "Use in streams and thumbnails; no redistribution.",
        variants: &[ProductVariant {
            id: "dark-gradients-std",
            name: "Standard",
            price_gbp: 7,
        }],
        featured: false,
        updated_at: "2026-01-10",
    },
    Product {
        id: "pack-emote-bases",
        slug: "emote-base-pack",
        title: "Emote Base Pack",
        subtitle: Some("Line-art bases for custom emotes"),
        category: "emotes",
        tags: &["psd-included", "anime"],
        cover: "/static/shop/emote-base-pack.png",
        includes: &["10 line-art bases", "Twitch size exports", "Colouring guide"],
        license_summary: "Finished emotes may be used commercially.",
        variants: &[
            ProductVariant { id: "emote-bases-psd", name: "PSD Bundle", price_gbp: 15 },
            ProductVariant { id: "emote-bases-png", name: "PNG Only", price_gbp: 8 },
        ],
        featured: true,
        updated_at: "2025-12-01",
    },
];

/// Cheapest variant price, used for price sorting.
pub fn min_price(product: &Product) -> u32 {
    product
        .variants
        .iter()
        .map(|v| v.price_gbp)
        .min()
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopSort {
    #[default]
    Featured,
    New,
    PriceAsc,
    PriceDesc,
}

impl ShopSort {
    pub fn slug(self) -> &'static str {
        match self {
            ShopSort::Featured => "featured",
            ShopSort::New => "new",
            ShopSort::PriceAsc => "price-asc",
            ShopSort::PriceDesc => "price-desc",
        }
    }

    pub fn from_slug(slug: &str) -> Option<ShopSort> {
        match slug {
            "featured" => Some(ShopSort::Featured),
            "new" => Some(ShopSort::New),
            "price-asc" => Some(ShopSort::PriceAsc),
            "price-desc" => Some(ShopSort::PriceDesc),
            _ => None,
        }
    }
}

/// Shop listing: free-text search over title/subtitle, optional tag filter,
/// then the chosen sort. Featured sort is stable, so hand-authored order is
/// kept within each group.
pub fn filter_products(query: &str, tag: Option<&str>, sort: ShopSort) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    let mut list: Vec<Product> = PRODUCTS
        .iter()
        .copied()
        .filter(|p| {
            if needle.is_empty() {
                return true;
            }
            let haystack = format!("{}{}", p.title, p.subtitle.unwrap_or("")).to_lowercase();
            haystack.contains(&needle)
        })
        .filter(|p| tag.is_none_or(|t| p.tags.contains(&t)))
        .collect();

    match sort {
        ShopSort::New => list.sort_by(|a, b| b.updated_at.cmp(a.updated_at)),
        ShopSort::PriceAsc => list.sort_by_key(min_price),
        ShopSort::PriceDesc => list.sort_by(|a, b| min_price(b).cmp(&min_price(a))),
        ShopSort::Featured => list.sort_by_key(|p| !p.featured),
    }
    list
}

/// The static product list on the admin panel's products section.
#[derive(Debug, Clone, Copy)]
pub struct AdminProduct {
    pub id: &'static str,
    pub title: &'static str,
    pub price_gbp: u32,
    pub status: &'static str,
}

pub const ADMIN_PRODUCTS: &[AdminProduct] = &[
    AdminProduct { id: "P-001", title: "Banners", price_gbp: 25, status: "Published" },
    AdminProduct { id: "P-002", title: "YouTube Thumbnail", price_gbp: 15, status: "Published" },
    AdminProduct { id: "P-003", title: "Profile Picture", price_gbp: 24, status: "Published" },
    AdminProduct { id: "P-004", title: "Twitch Emotes", price_gbp: 30, status: "Published" },
    AdminProduct { id: "P-005", title: "Logos", price_gbp: 40, status: "Published" },
    AdminProduct { id: "P-006", title: "Stream / Creator Packs", price_gbp: 60, status: "Published" },
];
