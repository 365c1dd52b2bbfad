//! Composition of raw style fragments into an applicable patch.

use super::StyleFragment;
use crate::dom::Element;

/// An ordered set of inline-style writes produced by one animation
/// option at one scroll position.
///
/// All transform fragments collapse into a single `transform` entry,
/// concatenated space-separated in source order. The entry is emitted
/// even when empty: an option with no active transform properties resets
/// any transform a previous option wrote. Each concatenated function is
/// followed by a space, so consumers must tolerate a trailing space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StylePatch {
    entries: Vec<(&'static str, String)>,
}

impl StylePatch {
    /// Merge fragments into a patch, applying the transform
    /// concatenation policy.
    pub fn compose(fragments: Vec<StyleFragment>) -> Self {
        let mut entries = Vec::new();
        let mut transform = String::new();

        for fragment in fragments {
            match fragment {
                StyleFragment::Entry { property, value } => entries.push((property, value)),
                StyleFragment::Transform(function) => {
                    transform.push_str(&function);
                    transform.push(' ');
                }
            }
        }

        entries.push(("transform", transform));
        Self { entries }
    }

    /// Patch entries in application order.
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    /// Value for one property, if the patch touches it.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Write every entry onto the target's inline style. Untouched keys
    /// are left as they are.
    pub fn apply_to<E: Element>(&self, target: &E) {
        for (property, value) in &self.entries {
            log::trace!("{property}: {value}");
            target.set_style(property, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleFragment;

    #[test]
    fn test_transforms_collapse_into_one_entry() {
        let patch = StylePatch::compose(vec![
            StyleFragment::transform("translateY(-50px)".into()),
            StyleFragment::entry("opacity", "0.5".into()),
            StyleFragment::transform("scale(0.75)".into()),
            StyleFragment::transform("rotate(22.5deg)".into()),
        ]);

        assert_eq!(
            patch.get("transform"),
            Some("translateY(-50px) scale(0.75) rotate(22.5deg) ")
        );
        assert_eq!(patch.get("opacity"), Some("0.5"));
        // One transform entry no matter how many fragments contributed.
        let transform_entries = patch
            .entries()
            .iter()
            .filter(|(name, _)| *name == "transform")
            .count();
        assert_eq!(transform_entries, 1);
    }

    #[test]
    fn test_empty_transform_is_still_emitted() {
        let patch = StylePatch::compose(vec![StyleFragment::entry("opacity", "1".into())]);
        assert_eq!(patch.get("transform"), Some(""));
    }

    #[test]
    fn test_non_transform_fragments_pass_through() {
        let patch = StylePatch::compose(vec![
            StyleFragment::entry("filter", "blur(2px)".into()),
            StyleFragment::entry("background", "color-mix(in hsl, #000, #fff 50%)".into()),
        ]);
        assert_eq!(patch.get("filter"), Some("blur(2px)"));
        assert_eq!(
            patch.get("background"),
            Some("color-mix(in hsl, #000, #fff 50%)")
        );
    }

    #[test]
    fn test_apply_overwrites_only_patched_keys() {
        let dom = crate::dom::MemoryDom::new();
        let target = dom.insert_element("t", 0.0, 0.0);
        target.set_style("visibility", "visible");
        target.set_style("opacity", "0");

        StylePatch::compose(vec![StyleFragment::entry("opacity", "0.25".into())])
            .apply_to(&target);

        assert_eq!(target.style("opacity").as_deref(), Some("0.25"));
        assert_eq!(target.style("visibility").as_deref(), Some("visible"));
    }
}
