//! Hipparcos star catalog, constellation lines, and sky queries
//!
//! Loads the comma-delimited Hipparcos excerpt format into an
//! immutable [`Catalog`] — stars, an optional denser secondary list
//! merged beneath them, and constellation line segments resolved
//! against the combined star list — and answers queries over it:
//! zodiac partitioning, angular field-of-view filtering, centroids of
//! constellation figures, and id lookup.
//!
//! Star positions are unit direction vectors built from the catalog's
//! sexagesimal coordinates ([`radec`]); star colors come from the B-V
//! color index via a blackbody chromaticity fit ([`color`]). Loading
//! is tolerant: malformed or unresolvable lines are dropped and
//! reported, never fatal.
//!
//! # Example
//!
//! ```
//! use asterism::{query, zodiac, Catalog};
//!
//! let stars = "27989,5,55,10.3,1,7,24,25.4,0.42,7.63,,,1.85\n\
//!              25336,5,25,7.9,1,6,20,59,1.64,12.92,,,-0.13\n\
//!              21421,4,35,55.2,1,16,30,33,0.87,50.09,,,1.54\n";
//! let lines = "Ori,27989,25336\nTau,21421,21421\n";
//!
//! let catalog = Catalog::load(stars, None, lines);
//! assert!(catalog.report().is_clean());
//!
//! // Orion is not a zodiac constellation; Taurus is
//! assert_eq!(zodiac::non_zodiac_lines(catalog.lines()).len(), 1);
//!
//! // Aldebaran is within 5° of the Taurus figure's centroid
//! let center = query::constellation_centroid(catalog.lines(), "Tau");
//! let nearby = query::stars_within_angle(catalog.stars(), &center, 5.0);
//! assert!(nearby.iter().any(|s| s.hip_id == 21421));
//! ```

pub mod catalog;
pub mod color;
pub mod errors;
pub mod names;
pub mod query;
pub mod radec;
pub mod zodiac;

pub use catalog::{Catalog, LineSegment, LoadReport, StarRecord};
pub use color::Rgba;
pub use errors::RecordError;
