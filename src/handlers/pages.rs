use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{render, AppError};
use crate::models::carousel::Carousel;
use crate::models::catalog::designers::{
    find_designer, Designer, DESIGNER_SHOWCASE, EMOTE_SHOWCASE, FEATURED_SLIDES, THUMBNAIL_SHOWCASE,
};
use crate::models::catalog::pricing::{find_category, PRICING_CATEGORIES};
use crate::models::catalog::products::{filter_products, min_price, ShopSort, PRODUCTS, SHOP_TAGS};
use crate::models::category::{build_categories, classify};
use crate::models::gallery::{next_index, prev_index, Lightbox};
use crate::templates_structs::{
    CarouselView, CategoryTab, DesignerPanel, DesignsTemplate, IndexTemplate, LightboxView, PageContext,
    PaymentCancelTemplate, PaymentSuccessTemplate, PricingTab, PricingTemplate, ProductView,
    ProjectCard, ServiceCard, ShopTemplate, ShowcaseSection, TagLink, ThumbLink,
};

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub async fn home(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let featured = PRODUCTS
        .iter()
        .filter(|p| p.featured)
        .map(|p| ProductView {
            product: *p,
            price_from: min_price(p),
        })
        .collect();
    render(IndexTemplate { ctx, featured })
}

// ---------------------------------------------------------------------------
// Designs page: carousel + designer showcases + lightbox
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DesignsQuery {
    /// Carousel slide index.
    pub slide: Option<usize>,
    /// Designer whose panel holds the active tab / open lightbox.
    pub d: Option<String>,
    /// Active category slug within that panel.
    pub c: Option<String>,
    /// Open lightbox item index within the active category.
    pub i: Option<usize>,
}

pub async fn designs(
    session: Session,
    query: web::Query<DesignsQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);

    let mut carousel = Carousel::new(FEATURED_SLIDES.len());
    if let Some(slide) = query.slide {
        carousel.jump(slide);
    }

    let active_designer = query.d.as_deref();
    let active_category = query.c.as_deref();
    let slide = carousel.current();

    let sections = vec![
        ShowcaseSection {
            heading: "Designer Showcase",
            blurb: "Work across banners, wallpapers, logos and more. Use the tabs inside each card to switch between specialties.",
            panels: build_panels(DESIGNER_SHOWCASE, slide, active_designer, active_category),
        },
        ShowcaseSection {
            heading: "Thumbnail Designers",
            blurb: "Focused thumbnail work designed to convert clicks.",
            panels: build_panels(THUMBNAIL_SHOWCASE, slide, active_designer, active_category),
        },
        ShowcaseSection {
            heading: "Emotes & Stickers",
            blurb: "Twitch emotes and sticker-style assets.",
            panels: build_panels(EMOTE_SHOWCASE, slide, active_designer, active_category),
        },
    ];

    let lightbox = build_lightbox(&query, slide);

    render(DesignsTemplate {
        ctx,
        carousel: build_carousel(&carousel, active_designer, active_category),
        sections,
        lightbox,
        service_cards: service_cards(),
    })
}

/// Link into the designs page with the given UI state. Omitted parts drop
/// out of the query string; in particular the lightbox closes on any
/// navigation that does not name an item.
fn designs_href(
    slide: usize,
    designer: Option<&str>,
    category: Option<&str>,
    item: Option<usize>,
) -> String {
    let mut href = format!("/designs?slide={slide}");
    if let Some(d) = designer {
        href.push_str(&format!("&d={d}"));
    }
    if let Some(c) = category {
        href.push_str(&format!("&c={c}"));
    }
    if let Some(i) = item {
        href.push_str(&format!("&i={i}"));
    }
    href
}

fn build_carousel(carousel: &Carousel, designer: Option<&str>, category: Option<&str>) -> CarouselView {
    let current = carousel.current();
    let prev = {
        let mut c = *carousel;
        c.prev();
        c.current()
    };
    let next = {
        let mut c = *carousel;
        c.next();
        c.current()
    };
    CarouselView {
        slides: FEATURED_SLIDES,
        current,
        total: carousel.len(),
        offset_percent: carousel.offset_percent(),
        prev_href: designs_href(prev, designer, category, None),
        next_href: designs_href(next, designer, category, None),
        thumbs: FEATURED_SLIDES
            .iter()
            .enumerate()
            .map(|(i, s)| ThumbLink {
                href: designs_href(i, designer, category, None),
                title: s.title,
                src: s.src,
                active: i == current,
            })
            .collect(),
    }
}

fn build_panels(
    designers: &'static [Designer],
    slide: usize,
    active_designer: Option<&str>,
    active_category: Option<&str>,
) -> Vec<DesignerPanel> {
    designers
        .iter()
        .map(|d| build_panel(d, slide, active_designer, active_category))
        .collect()
}

fn build_panel(
    designer: &'static Designer,
    slide: usize,
    active_designer: Option<&str>,
    active_category: Option<&str>,
) -> DesignerPanel {
    let categories = build_categories(designer);

    let requested = if active_designer == Some(designer.id) {
        active_category.unwrap_or("all")
    } else {
        "all"
    };
    let active_slug = categories
        .iter()
        .find(|c| c.slug == requested)
        .or_else(|| categories.first())
        .map(|c| c.slug)
        .unwrap_or("all");

    let tabs: Vec<CategoryTab> = categories
        .iter()
        .map(|c| CategoryTab {
            label: c.label,
            href: designs_href(slide, Some(designer.id), Some(c.slug), None),
            active: c.slug == active_slug,
            count: c.projects.len(),
        })
        .collect();

    let (active_label, cards) = match categories.iter().find(|c| c.slug == active_slug) {
        Some(group) => {
            let label = if group.slug == "all" { "All Work" } else { group.label };
            let cards = group
                .projects
                .iter()
                .enumerate()
                .map(|(idx, p)| ProjectCard {
                    project: *p,
                    service_label: classify(p).label(),
                    href: designs_href(slide, Some(designer.id), Some(active_slug), Some(idx)),
                })
                .collect();
            (label, cards)
        }
        None => ("All Work", Vec::new()),
    };

    DesignerPanel {
        id: designer.id,
        name: designer.name,
        role: designer.role,
        specialties: designer.specialties,
        tabs,
        active_label,
        cards,
    }
}

fn build_lightbox(query: &DesignsQuery, slide: usize) -> Option<LightboxView> {
    let designer_id = query.d.as_deref()?;
    let item = query.i?;
    let designer = find_designer(designer_id)?;

    let categories = build_categories(designer);
    let slug = query.c.as_deref().unwrap_or("all");
    let group = categories.into_iter().find(|c| c.slug == slug)?;

    let mut lightbox = Lightbox::closed();
    lightbox.open(group.projects, item);
    let index = lightbox.index()?;
    let total = lightbox.len();
    let current = *lightbox.current()?;

    Some(LightboxView {
        item: current,
        position: index + 1,
        total,
        prev_href: designs_href(slide, Some(designer_id), Some(slug), Some(prev_index(index, total))),
        next_href: designs_href(slide, Some(designer_id), Some(slug), Some(next_index(index, total))),
        close_href: designs_href(slide, Some(designer_id), Some(slug), None),
    })
}

fn service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            title: "Banners & Headers",
            desc: "Custom Twitch and YouTube banners designed around your brand.",
        },
        ServiceCard {
            title: "Wallpapers",
            desc: "High-resolution character and scene wallpapers for desktop or mobile.",
        },
        ServiceCard {
            title: "Thumbnails",
            desc: "High-impact thumbnails optimized for click-through.",
        },
        ServiceCard {
            title: "Logos & Icons",
            desc: "Minimal or illustrated logos for streamers, startups, and developers.",
        },
        ServiceCard {
            title: "Twitch Emotes",
            desc: "Custom emotes and stickers to give your chat more personality.",
        },
        ServiceCard {
            title: "Overlay Elements",
            desc: "Stream overlays, alerts, and scene assets designed for consistency.",
        },
    ]
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PricingQuery {
    pub c: Option<String>,
}

pub async fn pricing(
    session: Session,
    query: web::Query<PricingQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);

    let active = query
        .c
        .as_deref()
        .and_then(find_category)
        .or_else(|| PRICING_CATEGORIES.first())
        .ok_or(AppError::NotFound)?;

    let tabs = PRICING_CATEGORIES
        .iter()
        .map(|c| PricingTab {
            label: c.label,
            href: format!("/pricing?c={}", c.id),
            active: c.id == active.id,
        })
        .collect();

    render(PricingTemplate { ctx, tabs, active })
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ShopQuery {
    pub q: Option<String>,
    pub tag: Option<String>,
    pub sort: Option<String>,
}

pub async fn shop(session: Session, query: web::Query<ShopQuery>) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);

    let text = query.q.clone().unwrap_or_default();
    // Only known tags filter; anything else is ignored.
    let tag = query
        .tag
        .as_deref()
        .and_then(|t| SHOP_TAGS.iter().copied().find(|known| *known == t));
    let sort = query
        .sort
        .as_deref()
        .and_then(ShopSort::from_slug)
        .unwrap_or_default();

    let products = filter_products(&text, tag, sort)
        .into_iter()
        .map(|p| ProductView {
            price_from: min_price(&p),
            product: p,
        })
        .collect();

    let tag_links = SHOP_TAGS
        .iter()
        .map(|t| {
            let active = tag == Some(*t);
            // Clicking the active tag clears it.
            let href = if active {
                format!("/shop?q={text}&sort={}", sort.slug())
            } else {
                format!("/shop?q={text}&tag={t}&sort={}", sort.slug())
            };
            TagLink { tag: t, href, active }
        })
        .collect();

    render(ShopTemplate {
        ctx,
        products,
        query: text,
        sort: sort.slug(),
        tag_links,
    })
}

// ---------------------------------------------------------------------------
// Payment landing pages
// ---------------------------------------------------------------------------

pub async fn payment_success(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    render(PaymentSuccessTemplate { ctx })
}

pub async fn payment_cancel(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    render(PaymentCancelTemplate { ctx })
}
