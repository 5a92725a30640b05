//! Tag → service classification and the per-designer tab groups built from
//! it. All pure: unmatched or missing tags land in the "Other Work" bucket,
//! which is the defined default rather than an error.

use crate::models::catalog::{Designer, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Banners,
    Wallpapers,
    Thumbnails,
    Emotes,
    Logos,
    Other,
}

impl Service {
    pub fn label(self) -> &'static str {
        match self {
            Service::Banners => "Banners",
            Service::Wallpapers => "Wallpapers",
            Service::Thumbnails => "Thumbnails",
            Service::Emotes => "Twitch Emotes",
            Service::Logos => "Logos",
            Service::Other => "Other Work",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Service::Banners => "banners",
            Service::Wallpapers => "wallpapers",
            Service::Thumbnails => "thumbnails",
            Service::Emotes => "emotes",
            Service::Logos => "logos",
            Service::Other => "other",
        }
    }
}

/// Free-text tags that map onto a service. First match wins.
const TAG_TO_SERVICE: &[(&str, Service)] = &[
    ("Banner", Service::Banners),
    ("Anime Header", Service::Banners),
    ("Social Media", Service::Banners),
    ("Thumbnail", Service::Thumbnails),
    ("Twitch Emotes", Service::Emotes),
    ("Wallpaper", Service::Wallpapers),
    ("Wallpapers", Service::Wallpapers),
    ("Logo", Service::Logos),
    ("Logos", Service::Logos),
];

/// First tag that maps to a service decides; no tags or no match is "other".
pub fn classify(project: &Project) -> Service {
    for tag in project.tags {
        if let Some((_, service)) = TAG_TO_SERVICE.iter().find(|(t, _)| t == tag) {
            return *service;
        }
    }
    Service::Other
}

/// One tab in a designer panel.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub slug: &'static str,
    pub label: &'static str,
    pub projects: Vec<Project>,
}

/// Tab groups for one designer: "All" first (when any projects exist), then
/// each service in first-encounter order over a single pass, then "Other
/// Work" last if non-empty.
pub fn build_categories(designer: &Designer) -> Vec<CategoryGroup> {
    let mut buckets: Vec<(Service, Vec<Project>)> = Vec::new();
    for project in designer.projects {
        let service = classify(project);
        match buckets.iter_mut().find(|(s, _)| *s == service) {
            Some((_, list)) => list.push(*project),
            None => buckets.push((service, vec![*project])),
        }
    }

    let mut categories = Vec::new();
    if !designer.projects.is_empty() {
        categories.push(CategoryGroup {
            slug: "all",
            label: "All",
            projects: designer.projects.to_vec(),
        });
    }
    for (service, projects) in &buckets {
        if *service == Service::Other {
            continue;
        }
        categories.push(CategoryGroup {
            slug: service.slug(),
            label: service.label(),
            projects: projects.clone(),
        });
    }
    if let Some((_, other)) = buckets.iter().find(|(s, _)| *s == Service::Other) {
        categories.push(CategoryGroup {
            slug: Service::Other.slug(),
            label: Service::Other.label(),
            projects: other.clone(),
        });
    }
    categories
}
