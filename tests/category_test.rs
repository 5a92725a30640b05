//! Category classifier tests.
//!
//! Covers:
//! - First-matching-tag classification and the "other" default
//! - Group ordering: "All" first, first-encounter middle, "Other Work" last
//! - Empty designers and designers with nothing but unclassified work

use halcyon::models::catalog::designers::{Designer, Project, DESIGNER_SHOWCASE};
use halcyon::models::category::{build_categories, classify, Service};

const MIXED_PROJECTS: &[Project] = &[
    Project { id: "p1", title: "Launch Banner", preview: "/a.png", tags: &["Banner"] },
    Project { id: "p2", title: "Video Thumb", preview: "/b.png", tags: &["Thumbnail"] },
    Project { id: "p3", title: "Untagged Sketch", preview: "/c.png", tags: &[] },
];

const MIXED_DESIGNER: Designer = Designer {
    id: "mixed",
    name: "Mixed",
    role: None,
    specialties: &[],
    projects: MIXED_PROJECTS,
};

#[test]
fn test_classify_first_matching_tag_wins() {
    let project = Project {
        id: "p",
        title: "Header",
        preview: "/p.png",
        tags: &["Some Unknown Tag", "Logo", "Banner"],
    };
    assert_eq!(classify(&project), Service::Logos);
}

#[test]
fn test_classify_alias_tags() {
    let anime = Project { id: "a", title: "A", preview: "/a.png", tags: &["Anime Header"] };
    let social = Project { id: "s", title: "S", preview: "/s.png", tags: &["Social Media"] };
    let walls = Project { id: "w", title: "W", preview: "/w.png", tags: &["Wallpapers"] };
    assert_eq!(classify(&anime), Service::Banners);
    assert_eq!(classify(&social), Service::Banners);
    assert_eq!(classify(&walls), Service::Wallpapers);
}

#[test]
fn test_classify_defaults_to_other() {
    let untagged = Project { id: "u", title: "U", preview: "/u.png", tags: &[] };
    let unknown = Project { id: "x", title: "X", preview: "/x.png", tags: &["Freeform"] };
    assert_eq!(classify(&untagged), Service::Other);
    assert_eq!(classify(&unknown), Service::Other);
}

#[test]
fn test_build_categories_ordering() {
    let groups = build_categories(&MIXED_DESIGNER);

    let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
    assert_eq!(labels, vec!["All", "Banners", "Thumbnails", "Other Work"]);

    assert_eq!(groups[0].projects.len(), 3);
    assert_eq!(groups[1].projects.len(), 1);
    assert_eq!(groups[2].projects.len(), 1);
    assert_eq!(groups[3].projects.len(), 1);
}

#[test]
fn test_build_categories_first_encounter_order() {
    const PROJECTS: &[Project] = &[
        Project { id: "t", title: "T", preview: "/t.png", tags: &["Thumbnail"] },
        Project { id: "b", title: "B", preview: "/b.png", tags: &["Banner"] },
        Project { id: "t2", title: "T2", preview: "/t2.png", tags: &["Thumbnail"] },
    ];
    const DESIGNER: Designer = Designer {
        id: "d",
        name: "D",
        role: None,
        specialties: &[],
        projects: PROJECTS,
    };

    let groups = build_categories(&DESIGNER);
    let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
    // Thumbnails encountered before Banners, so it comes first after "All".
    assert_eq!(labels, vec!["All", "Thumbnails", "Banners"]);
    assert_eq!(groups[1].projects.len(), 2);
}

#[test]
fn test_build_categories_empty_designer() {
    const EMPTY: Designer = Designer {
        id: "empty",
        name: "Empty",
        role: None,
        specialties: &[],
        projects: &[],
    };
    assert!(build_categories(&EMPTY).is_empty());
}

#[test]
fn test_build_categories_only_other() {
    const PROJECTS: &[Project] =
        &[Project { id: "u", title: "U", preview: "/u.png", tags: &[] }];
    const DESIGNER: Designer = Designer {
        id: "d",
        name: "D",
        role: None,
        specialties: &[],
        projects: PROJECTS,
    };

    let groups = build_categories(&DESIGNER);
    let labels: Vec<&str> = groups.iter().map(|g| g.label).collect();
    assert_eq!(labels, vec!["All", "Other Work"]);
}

#[test]
fn test_production_catalog_groups_start_with_all() {
    for designer in DESIGNER_SHOWCASE {
        let groups = build_categories(designer);
        assert_eq!(groups.first().map(|g| g.label), Some("All"));
    }
}
