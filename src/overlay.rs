use crate::constants::{ARCHIVE_COUNT_ID, MAP_HINT_ID, MAP_HINT_TEXT, ROOT_ID};
use crate::dom;
use songmap_core::archive_caption;
use web_sys as web;

/// Header count and footer hint around the map.
pub fn update_page_chrome(document: &web::Document, count: usize) {
    dom::set_text(document, ARCHIVE_COUNT_ID, &archive_caption(count));
    dom::set_text(document, MAP_HINT_ID, MAP_HINT_TEXT);
}

/// Mark the container so page CSS can switch off its own transitions.
pub fn mark_reduced_motion(document: &web::Document, reduced: bool) {
    if let Some(el) = document.get_element_by_id(ROOT_ID) {
        let cl = el.class_list();
        _ = if reduced {
            cl.add_1("reduced-motion")
        } else {
            cl.remove_1("reduced-motion")
        };
    }
}
