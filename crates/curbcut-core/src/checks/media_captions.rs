//! media-captions check: audio and video need text alternatives

use crate::checks::{Check, CheckContext, CheckMetadata};
use crate::declare_check;
use crate::tree::{AttrValue, Document, NodeId};
use crate::violation::{Impact, Violation};

fn track_kind_matches(doc: &Document, track: NodeId, kinds: &[&str]) -> bool {
    match doc.attr(track, "kind") {
        // An unknowable kind may be the one required.
        Some(AttrValue::Dynamic) => true,
        Some(AttrValue::Literal(kind)) => {
            kinds.iter().any(|k| k.eq_ignore_ascii_case(kind.trim()))
        }
        None => false,
    }
}

declare_check!(
    MediaCaptions,
    id = "media-captions",
    name = "Media elements need text alternatives",
    description = "Video needs captions, audio needs a text track",
    category = Structure,
    impact = Critical,
    rules = ["video-captions", "audio-track", "track-missing-srclang"]
);

impl Check for MediaCaptions {
    fn metadata(&self) -> &CheckMetadata {
        &self.metadata
    }

    fn run(&self, ctx: &CheckContext) -> Vec<Violation> {
        let doc = ctx.doc;
        let mut violations = Vec::new();

        for id in doc.elements() {
            match doc.tag(id) {
                "video" => {
                    let has_captions = doc
                        .element_children(id)
                        .filter(|&child| doc.tag(child) == "track")
                        .any(|track| track_kind_matches(doc, track, &["captions"]));
                    if !has_captions {
                        violations.push(
                            Violation::new(
                                "video-captions",
                                Impact::Critical,
                                format!("{} has no captions track", doc.describe(id)),
                                id,
                            )
                            .with_help("Add <track kind=\"captions\"> with a caption file"),
                        );
                    }
                }
                "audio" => {
                    let has_track = doc
                        .element_children(id)
                        .any(|child| doc.tag(child) == "track");
                    if !has_track {
                        violations.push(
                            Violation::new(
                                "audio-track",
                                Impact::Serious,
                                format!("{} has no text track", doc.describe(id)),
                                id,
                            )
                            .with_help("Add a <track> with a transcript or captions"),
                        );
                    }
                }
                "track" => {
                    if track_kind_matches(doc, id, &["captions", "subtitles"])
                        && !matches!(doc.attr(id, "kind"), Some(AttrValue::Dynamic))
                        && srclang_missing(doc, id)
                    {
                        violations.push(
                            Violation::new(
                                "track-missing-srclang",
                                Impact::Minor,
                                format!("{} has no srclang", doc.describe(id)),
                                id,
                            )
                            .with_help("Declare the track language, e.g. srclang=\"en\""),
                        );
                    }
                }
                _ => {}
            }
        }

        violations
    }
}

fn srclang_missing(doc: &Document, track: NodeId) -> bool {
    match doc.attr(track, "srclang") {
        Some(AttrValue::Dynamic) => false,
        Some(AttrValue::Literal(value)) => value.trim().is_empty(),
        None => true,
    }
}
