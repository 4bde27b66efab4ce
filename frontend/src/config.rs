use crate::gallery::breakpoint::Breakpoint;
use crate::gallery::carousel::NavigationPolicy;
use crate::gallery::widget::{AutoplayConfig, GalleryConfig};

pub const CLINIC_NAME: &str = "Grupo Restaura Vidas";
pub const WHATSAPP_NUMBER: &str = "5511999999999";
pub const WHATSAPP_GREETING: &str = "Olá, gostaria de informações sobre internação.";
pub const HOTLINE: &str = "0800 123 4567";

#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> String {
    "http://localhost:3001/api/contact".to_string() // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> String {
    "/api/contact".to_string() // Production URL
}

/// Photo strip of the units: three per row on desktop, paged by the arrows.
pub fn units_gallery() -> GalleryConfig {
    GalleryConfig {
        policy: NavigationPolicy::clamped_paging(),
        breakpoint: Breakpoint::default(),
        autoplay: None,
    }
}

/// Hero slideshow: one photo at a time, looping every 3s.
pub fn structure_slideshow() -> GalleryConfig {
    GalleryConfig {
        policy: NavigationPolicy::Cyclic,
        breakpoint: Breakpoint::new(768.0, 1, 1),
        autoplay: Some(AutoplayConfig {
            period_ms: 3_000,
            pause_on_hover: true,
            pause_on_lightbox: true,
        }),
    }
}
