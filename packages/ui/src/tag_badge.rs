//! Coloured tag pills for the records table.

use dioxus::prelude::*;

/// Tags named exactly this are always shown in [`TagColor::Volcano`].
pub const OVERRIDE_TAG: &str = "loser";

/// Longer tags than this are shown in [`TagColor::GeekBlue`].
const SHORT_TAG_MAX: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagColor {
    GeekBlue,
    Green,
    Volcano,
}

impl TagColor {
    pub fn for_tag(tag: &str) -> Self {
        if tag == OVERRIDE_TAG {
            TagColor::Volcano
        } else if tag.chars().count() > SHORT_TAG_MAX {
            TagColor::GeekBlue
        } else {
            TagColor::Green
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            TagColor::GeekBlue => "tag tag--geekblue",
            TagColor::Green => "tag tag--green",
            TagColor::Volcano => "tag tag--volcano",
        }
    }
}

/// Display text for a tag. Stored data is never changed.
pub fn tag_label(tag: &str) -> String {
    tag.to_uppercase()
}

#[component]
pub fn TagBadge(tag: String) -> Element {
    let class = TagColor::for_tag(&tag).class();
    let label = tag_label(&tag);

    rsx! {
        span { class: "{class}", "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_short_tags() {
        assert_eq!(TagColor::for_tag("database"), TagColor::GeekBlue);
        assert_eq!(TagColor::for_tag("cat"), TagColor::Green);
        assert_eq!(TagColor::for_tag("fives"), TagColor::Green);
        assert_eq!(TagColor::for_tag("sixsix"), TagColor::GeekBlue);
    }

    #[test]
    fn override_tag_wins() {
        assert_eq!(TagColor::for_tag("loser"), TagColor::Volcano);
        assert_eq!(TagColor::for_tag("Loser"), TagColor::Green);
    }

    #[test]
    fn labels_are_upper_cased() {
        assert_eq!(tag_label("math"), "MATH");
        assert_eq!(tag_label("straße"), "STRASSE");
    }
}
