//! Record shapes shared by the content modules.

/// A hyperlink with visible text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    /// Target path, optionally with a `#fragment`.
    pub href: &'static str,
    /// Visible text.
    pub label: &'static str,
}

/// A labelled value tile ("Particle Size: <10nm").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spec {
    /// Small caption.
    pub label: &'static str,
    /// Emphasised value.
    pub value: &'static str,
}

/// A headline number with a caption and a line of detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    /// Headline value.
    pub value: &'static str,
    /// Caption under the value.
    pub label: &'static str,
    /// Detail line.
    pub description: &'static str,
}

/// Title and body text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    /// Heading.
    pub title: &'static str,
    /// Body paragraph.
    pub description: &'static str,
}

/// A card followed by a bullet list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListCard {
    /// Heading.
    pub title: &'static str,
    /// Body paragraph, empty when the card is only a list.
    pub description: &'static str,
    /// Bullet items.
    pub items: &'static [&'static str],
}

/// One entry in a numbered or timed sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Marker shown in the badge ("01", "6", "18+").
    pub marker: &'static str,
    /// Step heading.
    pub title: &'static str,
    /// Detail line.
    pub description: &'static str,
}

/// A horizontal comparison bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    /// Left-hand label.
    pub label: &'static str,
    /// Right-hand value text.
    pub value: &'static str,
    /// Fill width, 0..=100.
    pub percent: u8,
    /// Whether the bar uses the accent colour.
    pub highlight: bool,
}
