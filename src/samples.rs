//! Stock sample catalog and demo identity.
//!
//! The generation stub needs a pool of finished plushie designs to hand
//! back, and every artifact needs an owning user. Both ship as built-in
//! demo data: six before/after pairs covering all four styles, and the
//! demo account used when no `[user]` config is present.
//!
//! Sample image references are site-relative paths into the product's
//! published sample set, so exported gallery pages resolve them the same
//! way the hosted dashboard does.

use crate::artifact::PlushStyle;

/// One finished before/after pair from the demo sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySample {
    pub id: &'static str,
    pub original_image: &'static str,
    pub generated_image: &'static str,
    pub style: PlushStyle,
    /// Short human description of the source photo.
    pub subject: &'static str,
}

/// Built-in sample pool the mock generator draws from.
pub const GALLERY_SAMPLES: &[GallerySample] = &[
    GallerySample {
        id: "sample_1",
        original_image: "/plushies/samples/before-1.jpg",
        generated_image: "/plushies/samples/after-1.jpg",
        style: PlushStyle::Kawaii,
        subject: "Cute dog photo",
    },
    GallerySample {
        id: "sample_2",
        original_image: "/plushies/samples/before-2.jpg",
        generated_image: "/plushies/samples/after-2.jpg",
        style: PlushStyle::Cartoon,
        subject: "Family portrait",
    },
    GallerySample {
        id: "sample_3",
        original_image: "/plushies/samples/before-3.jpg",
        generated_image: "/plushies/samples/after-3.jpg",
        style: PlushStyle::Realistic,
        subject: "Pet cat",
    },
    GallerySample {
        id: "sample_4",
        original_image: "/plushies/samples/before-4.jpg",
        generated_image: "/plushies/samples/after-4.jpg",
        style: PlushStyle::Vintage,
        subject: "Child's drawing",
    },
    GallerySample {
        id: "sample_5",
        original_image: "/plushies/samples/before-5.jpg",
        generated_image: "/plushies/samples/after-5.jpg",
        style: PlushStyle::Kawaii,
        subject: "Wedding photo",
    },
    GallerySample {
        id: "sample_6",
        original_image: "/plushies/samples/before-6.jpg",
        generated_image: "/plushies/samples/after-6.jpg",
        style: PlushStyle::Cartoon,
        subject: "Baby photo",
    },
];

/// Default user id stamped on artifacts when no `[user]` config exists.
pub const DEMO_USER_ID: &str = "user_1";

/// Default display name for the demo account.
pub const DEMO_USER_NAME: &str = "Sarah Johnson";
