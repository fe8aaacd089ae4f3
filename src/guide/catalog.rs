//! Static guide catalog.
//!
//! Catalog order is observable: lookups return the first record whose title
//! normalizes to the requested slug.
//!
//! Several records are stale placeholders kept only so their old slugs keep
//! resolving; the alias and display tables decide what those slugs show.

use serde::Serialize;
use std::fmt;

/// Editorial tag shown on guide cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Flights,
    Trains,
    CityTransit,
    Buses,
    Rideshare,
    Driving,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Flights => "Flights",
            Self::Trains => "Trains",
            Self::CityTransit => "City Transit",
            Self::Buses => "Buses",
            Self::Rideshare => "Rideshare",
            Self::Driving => "Driving",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A transportation guide as listed on the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideRecord {
    pub title: &'static str,
    pub category: Category,
    pub author: &'static str,
    pub read_time: &'static str,
    pub image: &'static str,
    /// Teaser paragraph, doubles as the fallback meta description.
    pub intro: &'static str,
}

impl GuideRecord {
    /// Slug derived from the title.
    pub fn slug(&self) -> String {
        super::normalize(self.title)
    }
}

/// Publication timestamps, keyed by canonical slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorialEntry {
    pub slug: &'static str,
    pub published: &'static str,
    pub modified: Option<&'static str>,
}

/// Find editorial timestamps for a slug.
pub fn editorial_entry(slug: &str) -> Option<&'static EditorialEntry> {
    EDITORIAL.iter().find(|entry| entry.slug == slug)
}

const EDITORIAL_DESK: &str = "Stadium Travel Desk";

pub static CATALOG: &[GuideRecord] = &[
    GuideRecord {
        title: "Budget Bus Travel: Intercity Connections",
        category: Category::Buses,
        author: EDITORIAL_DESK,
        read_time: "6 min read",
        image: "/images/transportation/intercity-bus.webp",
        intro: "Greyhound, FlixBus and regional carriers link most host cities for a fraction of airfare.",
    },
    GuideRecord {
        title: "Miami World Cup 2026: Your Complete Transportation Guide to Hard Rock Stadium",
        category: Category::CityTransit,
        author: EDITORIAL_DESK,
        read_time: "12 min read",
        image: "/images/transportation/miami-hard-rock-stadium.webp",
        intro: "Brightline, Metrorail, matchday shuttles and parking: every way to reach Hard Rock Stadium in Miami Gardens.",
    },
    GuideRecord {
        title: "Dallas World Cup 2026: Your Complete Transportation Guide to AT&T Stadium",
        category: Category::Driving,
        author: EDITORIAL_DESK,
        read_time: "11 min read",
        image: "/images/transportation/dallas-att-stadium.webp",
        intro: "Arlington has no rail service, so getting to AT&T Stadium means planning around shuttles and parking.",
    },
    GuideRecord {
        title: "Arlington World Cup 2026: Getting to Dallas Stadium",
        category: Category::Driving,
        author: EDITORIAL_DESK,
        read_time: "11 min read",
        image: "/images/transportation/dallas-att-stadium.webp",
        intro: "Park-and-ride lots, TRE connections and the matchday shuttle loop for the Dallas-area venue in Arlington.",
    },
    GuideRecord {
        title: "San Francisco Bay Area World Cup 2026: Getting to Levi's Stadium",
        category: Category::Trains,
        author: EDITORIAL_DESK,
        read_time: "10 min read",
        image: "/images/transportation/levis-stadium.webp",
        intro: "Caltrain, VTA light rail and ACE trains converge on Santa Clara on matchdays.",
    },
    GuideRecord {
        title: "New York New Jersey World Cup 2026: NJ Transit to MetLife Stadium",
        category: Category::Trains,
        author: EDITORIAL_DESK,
        read_time: "10 min read",
        image: "/images/transportation/metlife-stadium.webp",
        intro: "The Meadowlands rail line, Secaucus transfers and coach buses from Port Authority for the final venue.",
    },
    GuideRecord {
        title: "Los Angeles World Cup 2026: Getting to SoFi Stadium",
        category: Category::CityTransit,
        author: EDITORIAL_DESK,
        read_time: "9 min read",
        image: "/images/transportation/sofi-stadium.webp",
        intro: "Metro K Line, the C Line shuttle from Hawthorne/Lennox and rideshare zones around Inglewood.",
    },
    GuideRecord {
        title: "Seattle World Cup 2026: Link Light Rail to Lumen Field",
        category: Category::CityTransit,
        author: EDITORIAL_DESK,
        read_time: "7 min read",
        image: "/images/transportation/lumen-field.webp",
        intro: "Lumen Field sits between two Link stations and a short walk from King Street Station.",
    },
    GuideRecord {
        title: "Flying Between Host Cities: Airports & Airlines",
        category: Category::Flights,
        author: EDITORIAL_DESK,
        read_time: "8 min read",
        image: "/images/transportation/host-city-flights.webp",
        intro: "Which airports serve each host city and how to time flights between group-stage matches.",
    },
    GuideRecord {
        title: "Rideshare at the Stadium: Pickup Zones & Surge Pricing",
        category: Category::Rideshare,
        author: EDITORIAL_DESK,
        read_time: "5 min read",
        image: "/images/transportation/rideshare-zones.webp",
        intro: "Designated pickup lots, walking times and when surge pricing usually eases after the final whistle.",
    },
];

pub static EDITORIAL: &[EditorialEntry] = &[
    EditorialEntry {
        slug: "miami-world-cup-2026-your-complete-transportation-guide-to-hard-rock-stadium",
        published: "2025-11-03T09:00:00Z",
        modified: Some("2026-04-18T14:30:00Z"),
    },
    EditorialEntry {
        slug: "arlington-world-cup-2026-getting-to-dallas-stadium",
        published: "2026-02-10T09:00:00Z",
        modified: Some("2026-05-02T11:00:00Z"),
    },
    EditorialEntry {
        slug: "san-francisco-bay-area-world-cup-2026-getting-to-levis-stadium",
        published: "2025-12-01T09:00:00Z",
        modified: None,
    },
    EditorialEntry {
        slug: "new-york-new-jersey-world-cup-2026-nj-transit-to-metlife-stadium",
        published: "2025-10-20T09:00:00Z",
        modified: Some("2026-03-12T08:15:00Z"),
    },
];
