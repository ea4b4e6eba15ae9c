//! Seeded two-class segmentation of single-channel images.
//!
//! The image is modeled as a 4-connected grid graph weighted by intensity
//! differences. Each pixel is labeled foreground or background by comparing
//! its energy against a user-picked source and sink pixel, then the chosen
//! class is zeroed out of the image.

pub mod capture;
pub mod output;
pub mod segmentation;
