//! Stage-conditional overlay blocks layered above the canvas.
//!
//! Exactly one stage's block is mounted at a time. Handoffs follow a "wait"
//! policy: the sequencer adds the exit class to the outgoing block, waits for
//! the exit animation, then calls [`show_stage`] to mount the incoming block.
//! Enter/exit choreography itself lives in CSS; this module only flips
//! classes and builds the per-letter reveal spans.

use landing_core::{Stage, REVEAL_STAGGER_SEC, TARGET_PHRASE};
use web_sys as web;

use crate::dom;

const BLOCK_IDS: [&str; 3] = ["landing-block", "decrypt-block", "reveal-block"];

fn block_id(stage: Stage) -> &'static str {
    match stage {
        Stage::Landing => "landing-block",
        Stage::Decrypting => "decrypt-block",
        Stage::Revealing => "reveal-block",
    }
}

/// Start the outgoing block's exit animation. The block stays mounted until
/// the swap timer fires.
pub fn begin_exit(document: &web::Document, stage: Stage) {
    dom::add_class(document, block_id(stage), "exit");
}

/// Unmount everything, then mount the block for `stage` with its enter
/// animation. Also applies the stage's one-off DOM side effects.
pub fn show_stage(document: &web::Document, stage: Stage) {
    for id in BLOCK_IDS {
        dom::add_class(document, id, "hidden");
        dom::remove_class(document, id, "exit");
        dom::remove_class(document, id, "enter");
    }
    let id = block_id(stage);
    dom::remove_class(document, id, "hidden");
    dom::add_class(document, id, "enter");
    match stage {
        Stage::Landing => {}
        Stage::Decrypting => set_decrypt_text(document, ""),
        Stage::Revealing => {
            build_reveal_title(document);
            // background gradient crossfades to the brighter reveal palette
            dom::add_class(document, "bg-gradient", "revealed");
        }
    }
}

/// Write one scrambled frame into the decrypting block.
#[inline]
pub fn set_decrypt_text(document: &web::Document, text: &str) {
    dom::set_text(document, "decrypt-text", text);
}

// One span per character, each with a staggered animation delay, so the title
// rises out of the blur letter by letter.
fn build_reveal_title(document: &web::Document) {
    let Some(el) = document.get_element_by_id("reveal-title") else {
        return;
    };
    el.set_inner_html("");
    for (i, ch) in TARGET_PHRASE.chars().enumerate() {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        span.set_class_name("reveal-letter");
        let delay = i as f32 * REVEAL_STAGGER_SEC;
        let _ = span.set_attribute("style", &format!("animation-delay:{:.2}s", delay));
        let text = if ch == ' ' {
            '\u{00a0}'.to_string()
        } else {
            ch.to_string()
        };
        span.set_text_content(Some(&text));
        let _ = el.append_child(&span);
    }
}
